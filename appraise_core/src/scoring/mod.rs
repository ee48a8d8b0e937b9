//! Scoring - per-category rule tables and tier classification

mod classify;
mod rules;

pub use classify::{builtin_rules, classify, Classification};
pub use rules::{RuleSet, StatRequirement, ValidationRule};

/// Scoring constants
pub mod constants {
    /// Threshold divider giving partial credit to near-misses
    ///
    /// Every raw threshold is divided by this before comparison, so a stat
    /// slightly under its bar still registers. One knob for the whole table.
    pub const DEFAULT_TOLERANCE: f64 = 1.2;

    /// Minimum score for a Low verdict
    pub const LOW_SCORE: f64 = 1.0;

    /// Minimum score for a Mid verdict
    pub const MID_SCORE: f64 = 2.0;

    /// Minimum score for a High verdict
    pub const HIGH_SCORE: f64 = 3.0;
}
