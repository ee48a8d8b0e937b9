//! Classification - scoring accumulated stats against a category's rules

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::stats::AccumulatedStats;
use crate::types::{GearType, QualityTier};

use super::rules::{RuleSet, StatRequirement, ValidationRule};

/// Outcome of classifying one item's stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the table had any rules for the category
    pub applicable: bool,
    /// Sum of per-rule contributions; 0.0 when not applicable
    pub score: f64,
    /// Tier derived from the score
    pub tier: QualityTier,
}

impl Classification {
    fn unhandled() -> Self {
        Classification {
            applicable: false,
            score: 0.0,
            tier: QualityTier::Unhandled,
        }
    }
}

impl RuleSet {
    /// Score accumulated stats against this table's rules for one category
    ///
    /// Every rule is evaluated and its contribution summed; rules never
    /// suppress each other, so a stat referenced twice counts twice. A
    /// category with zero rules is unhandled regardless of the stats.
    pub fn classify(&self, gear_type: GearType, stats: &AccumulatedStats) -> Classification {
        let rules = match self.slots.get(&gear_type) {
            Some(rules) if !rules.is_empty() => rules,
            _ => return Classification::unhandled(),
        };

        let score: f64 = rules
            .iter()
            .map(|rule| self.rule_contribution(rule, stats))
            .sum();

        Classification {
            applicable: true,
            score,
            tier: QualityTier::from_score(score),
        }
    }

    fn rule_contribution(&self, rule: &ValidationRule, stats: &AccumulatedStats) -> f64 {
        match rule {
            ValidationRule::Single(requirement) => self.requirement_ratio(requirement, stats),
            ValidationRule::Paired { first, second } => {
                let first_ratio = self.requirement_ratio(first, stats);
                let second_ratio = self.requirement_ratio(second, stats);
                if first_ratio > 0.0 && second_ratio > 0.0 {
                    (first_ratio + second_ratio) / 2.0
                } else {
                    0.0
                }
            }
        }
    }

    /// value / (threshold / tolerance), or 0 when the relaxed bar is missed
    fn requirement_ratio(&self, requirement: &StatRequirement, stats: &AccumulatedStats) -> f64 {
        let adjusted = requirement.threshold / self.tolerance;
        let value = stats.get(requirement.stat);
        if value < adjusted {
            0.0
        } else {
            value / adjusted
        }
    }
}

static BUILTIN_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::builtin);

/// The built-in rule table, constructed once
pub fn builtin_rules() -> &'static RuleSet {
    &BUILTIN_RULES
}

/// Classify against the built-in rule table
pub fn classify(gear_type: GearType, stats: &AccumulatedStats) -> Classification {
    builtin_rules().classify(gear_type, stats)
}
