//! Fixed clinical cut points for the JOA locomotive-syndrome risk tests.
//!
//! Domain constants, not configuration. The two-step norms come from the
//! published JOA table (https://locomo-joa.jp/check/test/two-step).

/// Two-step score bands. Strict upper bounds, closed on the lower edge:
/// score < 0.9 → degree 3, [0.9, 1.1) → degree 2, [1.1, 1.3) → degree 1.
pub const TWO_STEP_DEGREE3_UPPER: f64 = 0.9;
pub const TWO_STEP_DEGREE2_UPPER: f64 = 1.1;
pub const TWO_STEP_DEGREE1_UPPER: f64 = 1.3;

/// Locomo25 total bands, inclusive lower bounds.
pub const LOCOMO25_DEGREE3_MIN: u16 = 24;
pub const LOCOMO25_DEGREE2_MIN: u16 = 16;
pub const LOCOMO25_DEGREE1_MIN: u16 = 7;

/// Each questionnaire item is rated 0 to this, inclusive.
pub const LOCOMO25_ITEM_MAX: u8 = 4;

/// Population-norm two-step averages per 5-year age band, as
/// (exclusive upper age bound, reference average). Ages past the last bound
/// belong to the open 80+ band. The table starts at 20–24; younger ages
/// resolve to that first band.
pub const AGE_AVERAGE_TWO_STEP: [(u32, f64); 12] = [
    (25, 1.66),
    (30, 1.64),
    (35, 1.62),
    (40, 1.60),
    (45, 1.58),
    (50, 1.55),
    (55, 1.52),
    (60, 1.48),
    (65, 1.44),
    (70, 1.39),
    (75, 1.33),
    (80, 1.26),
];

/// Reference average for the open-ended 80+ band.
pub const AGE_AVERAGE_TWO_STEP_80_PLUS: f64 = 1.17;
