use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const LOCOMO25_ITEM_COUNT: usize = 25;

/// The 25-item self-report questionnaire. Each item is rated 0–4, higher is
/// worse; the total spans 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Locomo25 {
    pub items: [u8; LOCOMO25_ITEM_COUNT],
    /// Sum of the 25 items. Stored for persistence; evaluation re-derives the
    /// total from `items` and ignores this field.
    pub total: u16,
}

impl Locomo25 {
    pub fn new(items: [u8; LOCOMO25_ITEM_COUNT]) -> Self {
        Self {
            items,
            total: Self::total_of(&items),
        }
    }

    pub fn total_of(items: &[u8; LOCOMO25_ITEM_COUNT]) -> u16 {
        items.iter().map(|&score| u16::from(score)).sum()
    }
}
