//! Prelude module for convenient imports
//!
//! ```rust
//! use appraise_core::prelude::*;
//! ```

// Item model
pub use crate::item::{Item, ItemProperty};
pub use crate::types::{GearType, QualityTier, Rarity};

// Extraction
pub use crate::catalog::{extract, MatchCounter, MatchObserver, StatKind};

// Aggregation
pub use crate::stats::{aggregate, aggregate_with, AccumulatedStats};

// Scoring
pub use crate::scoring::{builtin_rules, classify, Classification, RuleSet};

// Config
pub use crate::config::{load_ruleset, parse_ruleset, ConfigError};
