use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stand-up test answers: can the subject rise from a platform of the given
/// height, with both legs or one leg.
///
/// `None` means the height was not attempted. Evaluation treats an absent
/// answer as not-failing, so a partially filled record never trips a fail
/// branch on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandingTest {
    pub both_legs_40cm: Option<bool>,
    pub both_legs_20cm: Option<bool>,
    pub both_legs_10cm: Option<bool>,
    pub one_leg_40cm: Option<bool>,
    pub one_leg_20cm: Option<bool>,
    pub one_leg_10cm: Option<bool>,
}
