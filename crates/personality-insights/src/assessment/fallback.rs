//! Named constants for every substitute value the pipeline can produce when
//! input data is missing.

use super::domain::{GlobalFactor, PrimaryFactor};
use serde::Serialize;

/// Closed interval of scores or multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Overall score used when no Global Factor values and no stored score exist.
pub const DEFAULT_OVERALL_SCORE: u8 = 75;

/// Multiplier applied to the mean of all category scores when none of a
/// Global Factor's primary factors were measured.
pub const fn proportional_adjustment(factor: GlobalFactor) -> ScoreRange {
    match factor {
        GlobalFactor::Extraversion => ScoreRange::new(1.00, 1.10),
        GlobalFactor::Anxiety => ScoreRange::new(0.85, 0.95),
        GlobalFactor::ToughMindedness => ScoreRange::new(0.95, 1.05),
        GlobalFactor::Independence => ScoreRange::new(0.90, 1.00),
        GlobalFactor::SelfControl => ScoreRange::new(1.05, 1.15),
    }
}

/// Score used when no category data exists at all.
pub const fn global_baseline(factor: GlobalFactor) -> ScoreRange {
    match factor {
        GlobalFactor::Extraversion => ScoreRange::new(55.0, 75.0),
        GlobalFactor::Anxiety => ScoreRange::new(35.0, 55.0),
        GlobalFactor::ToughMindedness => ScoreRange::new(50.0, 70.0),
        GlobalFactor::Independence => ScoreRange::new(45.0, 65.0),
        GlobalFactor::SelfControl => ScoreRange::new(60.0, 80.0),
    }
}

/// Placeholder category profile used only by the synthetic demo policy.
pub const fn category_baseline(factor: PrimaryFactor) -> ScoreRange {
    match factor {
        PrimaryFactor::A => ScoreRange::new(55.0, 75.0),
        PrimaryFactor::B => ScoreRange::new(50.0, 70.0),
        PrimaryFactor::C => ScoreRange::new(50.0, 70.0),
        PrimaryFactor::E => ScoreRange::new(45.0, 65.0),
        PrimaryFactor::F => ScoreRange::new(50.0, 70.0),
        PrimaryFactor::G => ScoreRange::new(55.0, 75.0),
        PrimaryFactor::H => ScoreRange::new(45.0, 65.0),
        PrimaryFactor::I => ScoreRange::new(40.0, 60.0),
        PrimaryFactor::L => ScoreRange::new(35.0, 55.0),
        PrimaryFactor::M => ScoreRange::new(45.0, 65.0),
        PrimaryFactor::N => ScoreRange::new(45.0, 65.0),
        PrimaryFactor::O => ScoreRange::new(35.0, 55.0),
        PrimaryFactor::Q1 => ScoreRange::new(50.0, 70.0),
        PrimaryFactor::Q2 => ScoreRange::new(40.0, 60.0),
        PrimaryFactor::Q3 => ScoreRange::new(55.0, 75.0),
        PrimaryFactor::Q4 => ScoreRange::new(35.0, 55.0),
    }
}
