//! appraise_core - Loot appraisal engine
//!
//! Decides whether looted equipment is worth keeping:
//! - Stat catalog: the closed stat set and one extraction pattern per
//!   recognized modifier-line form
//! - AccumulatedStats: per-item totals folded from modifier text, plus
//!   derived and composite stats
//! - RuleSet: per-category thresholds describing chase-worthy gear
//! - Classification: a score and a discrete tier (High / Mid / Low / None /
//!   Unhandled) per item
//!
//! Everything is a pure function over immutable inputs; items can be
//! appraised concurrently with no coordination.
//!
//! ```
//! use appraise_core::prelude::*;
//!
//! let mut item = Item::new("Ruby Band", GearType::Ring, Rarity::Rare);
//! item.explicit_mods.push("+48 to maximum Life".to_string());
//! item.explicit_mods.push("+40% to Fire Resistance".to_string());
//!
//! let stats = aggregate(&item);
//! let verdict = classify(item.gear_type, &stats);
//! assert_eq!(verdict.tier, QualityTier::Low);
//! ```

pub mod catalog;
pub mod config;
pub mod item;
pub mod prelude;
pub mod scoring;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use catalog::{extract, extract_with, ExtractionRule, MatchCounter, MatchObserver, StatKind};
pub use config::{load_ruleset, parse_ruleset, ConfigError};
pub use item::{Item, ItemProperty};
pub use scoring::{builtin_rules, classify, Classification, RuleSet, StatRequirement, ValidationRule};
pub use stats::{aggregate, aggregate_with, AccumulatedStats};
pub use types::{GearType, QualityTier, Rarity};
