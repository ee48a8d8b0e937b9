//! Stat aggregation - folding an item's modifier text into one stat map

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, MatchObserver, StatKind};
use crate::item::Item;

/// Structured property name carrying an item's real energy shield total
pub const ENERGY_SHIELD_PROPERTY: &str = "Energy Shield";

/// Per-item stat totals
///
/// A key is present only when something contributed to it; reading an absent
/// key yields 0.0. Built fresh per item and never mutated after aggregation
/// returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccumulatedStats {
    values: HashMap<StatKind, f64>,
}

impl AccumulatedStats {
    /// Create an empty stat map
    pub fn new() -> Self {
        AccumulatedStats {
            values: HashMap::new(),
        }
    }

    /// Read a stat total, treating absence as zero
    pub fn get(&self, stat: StatKind) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    /// Whether any contribution was recorded for a stat
    pub fn contains(&self, stat: StatKind) -> bool {
        self.values.contains_key(&stat)
    }

    /// Add into a stat's running total, creating the entry at zero first
    pub fn add(&mut self, stat: StatKind, amount: f64) {
        *self.values.entry(stat).or_insert(0.0) += amount;
    }

    /// Overwrite a stat's total
    pub fn set(&mut self, stat: StatKind, value: f64) {
        self.values.insert(stat, value);
    }

    /// Iterate over all recorded (stat, total) pairs, unordered
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.values.iter().map(|(&stat, &value)| (stat, value))
    }

    /// Number of recorded stats
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fold one item's modifier lines and properties into accumulated stats
///
/// Steps, in order:
/// 1. run extraction over every implicit and explicit line and sum the
///    contributions (line order is irrelevant to a sum);
/// 2. when the item lists an "Energy Shield" property, that value replaces
///    any summed energy-shield lines (the structured field is the item's
///    authoritative total);
/// 3. strictly positive strength grants half its value as life;
/// 4. total-attributes becomes the sum of the three attributes, when any
///    are present.
///
/// Pure function: the same item always yields the same map.
pub fn aggregate(item: &Item) -> AccumulatedStats {
    aggregate_with(item, &mut ())
}

/// [`aggregate`] with an observer receiving one call per rule hit
pub fn aggregate_with(item: &Item, observer: &mut impl MatchObserver) -> AccumulatedStats {
    let mut stats = AccumulatedStats::new();

    for line in item.mod_lines() {
        for (stat, magnitude) in catalog::extract_with(line, observer) {
            stats.add(stat, magnitude);
        }
    }

    if let Some(energy_shield) = item.property(ENERGY_SHIELD_PROPERTY) {
        stats.set(StatKind::EnergyShield, energy_shield);
    }

    let strength = stats.get(StatKind::Strength);
    if strength > 0.0 {
        stats.add(StatKind::Life, strength / 2.0);
    }

    let attributes = stats.get(StatKind::Strength)
        + stats.get(StatKind::Dexterity)
        + stats.get(StatKind::Intelligence);
    if attributes > 0.0 {
        stats.set(StatKind::TotalAttributes, attributes);
    }

    stats
}
