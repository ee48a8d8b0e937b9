//! Stat catalog - the fixed stat set and the modifier-line extraction rules
//!
//! Every recognizable attribute is a `StatKind`, and every modifier-line
//! form the engine understands is one `ExtractionRule`. Rules are evaluated
//! independently: a line is tested against the whole table, and every match
//! contributes. That is how "+30 to All Attributes" feeds three stats and a
//! global crit line feeds both the spell and attack crit buckets.

mod patterns;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One recognized numeric attribute an item can carry
///
/// Closed set, fixed at process start. Adding a member means adding
/// extraction rules, and usually threshold entries, in the same change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    // Defences
    Life,
    EnergyShield,
    EnergyShieldMult,
    Armour,
    // Attributes
    Strength,
    Dexterity,
    Intelligence,
    TotalAttributes,
    // Resistances (all elements pooled into one bucket)
    Resistance,
    // Offence
    Accuracy,
    AttackSpeed,
    CastSpeed,
    CritChance,
    CritMult,
    SpellDamage,
    SpellCritChance,
    PhysicalDamageMult,
    PhysicalDamageAdd,
    FireDamageAttack,
    ColdDamageAttack,
    LightningDamageAttack,
    FireDamageSpell,
    ColdDamageSpell,
    LightningDamageSpell,
    WeaponElemDamage,
    GemLevel,
    // Utility
    MovementSpeed,
    ManaRegen,
    IncreasedRarity,
    FlaskChargesUsed,
    FlaskChargesGained,
    FlaskEffectDuration,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Life,
            StatKind::EnergyShield,
            StatKind::EnergyShieldMult,
            StatKind::Armour,
            StatKind::Strength,
            StatKind::Dexterity,
            StatKind::Intelligence,
            StatKind::TotalAttributes,
            StatKind::Resistance,
            StatKind::Accuracy,
            StatKind::AttackSpeed,
            StatKind::CastSpeed,
            StatKind::CritChance,
            StatKind::CritMult,
            StatKind::SpellDamage,
            StatKind::SpellCritChance,
            StatKind::PhysicalDamageMult,
            StatKind::PhysicalDamageAdd,
            StatKind::FireDamageAttack,
            StatKind::ColdDamageAttack,
            StatKind::LightningDamageAttack,
            StatKind::FireDamageSpell,
            StatKind::ColdDamageSpell,
            StatKind::LightningDamageSpell,
            StatKind::WeaponElemDamage,
            StatKind::GemLevel,
            StatKind::MovementSpeed,
            StatKind::ManaRegen,
            StatKind::IncreasedRarity,
            StatKind::FlaskChargesUsed,
            StatKind::FlaskChargesGained,
            StatKind::FlaskEffectDuration,
        ]
    }
}

/// One extraction rule: a line pattern feeding one stat
///
/// Patterns are end-anchored and never start-anchored: a line qualifies by
/// ending in the expected phrase, so prefixed variants still match while a
/// longer phrase ("... Fire Damage to Spells") never satisfies a shorter
/// rule ("... Fire Damage"). Capture group 1 is the magnitude.
#[derive(Debug)]
pub struct ExtractionRule {
    /// The stat the captured magnitude lands on
    pub stat: StatKind,
    pattern: Regex,
}

impl ExtractionRule {
    fn new(stat: StatKind, pattern: &str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid catalog pattern {:?}: {}", pattern, e));
        ExtractionRule { stat, pattern }
    }

    /// The pattern's source text, for diagnostics and reports
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Test one line, returning the captured magnitude on a match
    pub fn try_match(&self, line: &str) -> Option<f64> {
        let caps = self.pattern.captures(line)?;
        let magnitude = caps.get(1)?.as_str();
        match magnitude.parse::<f64>() {
            Ok(value) => Some(value),
            // Unreachable while every capture group is [0-9]+; a rule that
            // captures anything else is a broken catalog entry.
            Err(_) => panic!(
                "catalog pattern {:?} captured non-numeric {:?}",
                self.pattern.as_str(),
                magnitude
            ),
        }
    }
}

/// The full extraction rule table, in fixed evaluation order
pub fn catalog() -> &'static [ExtractionRule] {
    patterns::CATALOG.as_slice()
}

/// Observer notified once per successful rule match
///
/// `rule_index` is the rule's position in [`catalog()`]. The engine keeps no
/// match state of its own; anything that wants counters brings one of these.
pub trait MatchObserver {
    fn on_match(&mut self, rule_index: usize, stat: StatKind, magnitude: f64);
}

impl MatchObserver for () {
    fn on_match(&mut self, _rule_index: usize, _stat: StatKind, _magnitude: f64) {}
}

/// Per-rule hit tally, for offline pattern tuning
#[derive(Debug, Clone)]
pub struct MatchCounter {
    counts: Vec<u64>,
}

impl MatchCounter {
    /// Create a counter with one slot per catalog rule
    pub fn new() -> Self {
        MatchCounter {
            counts: vec![0; catalog().len()],
        }
    }

    /// Hits recorded for one rule
    pub fn count(&self, rule_index: usize) -> u64 {
        self.counts.get(rule_index).copied().unwrap_or(0)
    }

    /// Total hits across all rules
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (rule, hits) pairs in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&'static ExtractionRule, u64)> + '_ {
        catalog().iter().zip(self.counts.iter().copied())
    }
}

impl Default for MatchCounter {
    fn default() -> Self {
        MatchCounter::new()
    }
}

impl MatchObserver for MatchCounter {
    fn on_match(&mut self, rule_index: usize, _stat: StatKind, _magnitude: f64) {
        if let Some(slot) = self.counts.get_mut(rule_index) {
            *slot += 1;
        }
    }
}

/// Run every catalog rule against one line
///
/// No short-circuit: every rule is tried, so one line can feed several
/// stats, and a stat can be fed by several rules. A line matching nothing
/// contributes nothing; that is normal, not an error.
pub fn extract(line: &str) -> Vec<(StatKind, f64)> {
    extract_with(line, &mut ())
}

/// [`extract`] with an observer receiving one call per rule hit
pub fn extract_with(line: &str, observer: &mut impl MatchObserver) -> Vec<(StatKind, f64)> {
    let mut found = Vec::new();
    for (index, rule) in catalog().iter().enumerate() {
        if let Some(magnitude) = rule.try_match(line) {
            observer.on_match(index, rule.stat, magnitude);
            found.push((rule.stat, magnitude));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_form_extracts() {
        // One sample line per rule; multi-rule lines appear once per stat
        // they feed.
        let cases: &[(&str, StatKind, f64)] = &[
            ("+78 to maximum Life", StatKind::Life, 78.0),
            ("+101 to maximum Energy Shield", StatKind::EnergyShield, 101.0),
            ("21% increased Energy Shield", StatKind::EnergyShieldMult, 21.0),
            ("+32 to Strength", StatKind::Strength, 32.0),
            ("+27 to Dexterity", StatKind::Dexterity, 27.0),
            ("+41 to Intelligence", StatKind::Intelligence, 41.0),
            ("+16 to All Attributes", StatKind::Strength, 16.0),
            ("+16 to All Attributes", StatKind::Dexterity, 16.0),
            ("+16 to All Attributes", StatKind::Intelligence, 16.0),
            ("+35% to Fire Resistance", StatKind::Resistance, 35.0),
            ("+29% to Cold Resistance", StatKind::Resistance, 29.0),
            ("+42% to Lightning Resistance", StatKind::Resistance, 42.0),
            ("+17% to Chaos Resistance", StatKind::Resistance, 17.0),
            ("+312 to Accuracy Rating", StatKind::Accuracy, 312.0),
            ("25% increased Movement Speed", StatKind::MovementSpeed, 25.0),
            ("14% increased Attack Speed", StatKind::AttackSpeed, 14.0),
            ("88% increased Spell Damage", StatKind::SpellDamage, 88.0),
            (
                "95% increased Critical Strike Chance for Spells",
                StatKind::SpellCritChance,
                95.0,
            ),
            (
                "38% increased Global Critical Strike Chance",
                StatKind::SpellCritChance,
                38.0,
            ),
            (
                "38% increased Global Critical Strike Chance",
                StatKind::CritChance,
                38.0,
            ),
            (
                "+33% to Global Critical Strike Multiplier",
                StatKind::CritMult,
                33.0,
            ),
            ("+1 to Level of Socketed Fire Gems", StatKind::GemLevel, 1.0),
            ("Adds 12 to 24 Fire Damage", StatKind::FireDamageAttack, 24.0),
            ("Adds 9 to 19 Cold Damage", StatKind::ColdDamageAttack, 19.0),
            (
                "Adds 3 to 41 Lightning Damage",
                StatKind::LightningDamageAttack,
                41.0,
            ),
            (
                "Adds 11 to 22 Fire Damage to Spells",
                StatKind::FireDamageSpell,
                22.0,
            ),
            (
                "Adds 8 to 17 Cold Damage to Spells",
                StatKind::ColdDamageSpell,
                17.0,
            ),
            (
                "Adds 2 to 35 Lightning Damage to Spells",
                StatKind::LightningDamageSpell,
                35.0,
            ),
            ("142% increased Physical Damage", StatKind::PhysicalDamageMult, 142.0),
            ("Adds 7 to 15 Physical Damage", StatKind::PhysicalDamageAdd, 15.0),
            ("19% increased Cast Speed", StatKind::CastSpeed, 19.0),
            ("+96 to Armour", StatKind::Armour, 96.0),
            (
                "31% increased Elemental Damage with Attack Skills",
                StatKind::WeaponElemDamage,
                31.0,
            ),
            ("20% reduced Flask Charges used", StatKind::FlaskChargesUsed, 20.0),
            (
                "18% increased Flask Charges gained",
                StatKind::FlaskChargesGained,
                18.0,
            ),
            (
                "24% increased Flask effect duration",
                StatKind::FlaskEffectDuration,
                24.0,
            ),
            (
                "46% increased Mana Regeneration Rate",
                StatKind::ManaRegen,
                46.0,
            ),
            (
                "26% increased Rarity of Items found",
                StatKind::IncreasedRarity,
                26.0,
            ),
        ];

        for &(line, stat, expected) in cases {
            let found = extract(line);
            assert!(
                found
                    .iter()
                    .any(|&(s, v)| s == stat && (v - expected).abs() < f64::EPSILON),
                "expected {:?} = {} from {:?}, got {:?}",
                stat,
                expected,
                line,
                found
            );
        }
    }

    #[test]
    fn test_catalog_size_is_pinned() {
        assert_eq!(catalog().len(), 38);
    }

    #[test]
    fn test_every_pattern_has_one_capture_group() {
        for rule in catalog() {
            assert_eq!(
                rule.pattern.captures_len(),
                2,
                "pattern {:?} must capture exactly the magnitude",
                rule.pattern()
            );
        }
    }

    #[test]
    fn test_all_attributes_feeds_three_stats() {
        let found = extract("+16 to All Attributes");
        assert_eq!(found.len(), 3);
        for stat in [StatKind::Strength, StatKind::Dexterity, StatKind::Intelligence] {
            assert!(found.contains(&(stat, 16.0)));
        }
    }

    #[test]
    fn test_global_crit_feeds_spell_and_attack_crit() {
        let found = extract("38% increased Global Critical Strike Chance");
        assert_eq!(found.len(), 2);
        assert!(found.contains(&(StatKind::SpellCritChance, 38.0)));
        assert!(found.contains(&(StatKind::CritChance, 38.0)));
    }

    #[test]
    fn test_spell_damage_line_does_not_feed_attack_bucket() {
        let found = extract("Adds 11 to 22 Fire Damage to Spells");
        assert!(found.contains(&(StatKind::FireDamageSpell, 22.0)));
        assert!(!found.iter().any(|&(s, _)| s == StatKind::FireDamageAttack));
    }

    #[test]
    fn test_damage_roll_captures_upper_bound() {
        let found = extract("Adds 3 to 41 Lightning Damage");
        assert_eq!(found, vec![(StatKind::LightningDamageAttack, 41.0)]);
    }

    #[test]
    fn test_trailing_text_defeats_end_anchor() {
        assert!(extract("+60 to maximum Life gained on Kill").is_empty());
    }

    #[test]
    fn test_prefixed_line_still_matches() {
        // Unanchored starts are deliberate: qualified variants of a line
        // still end in the recognized phrase.
        let found = extract("Minions have 10% increased Movement Speed");
        assert_eq!(found, vec![(StatKind::MovementSpeed, 10.0)]);
    }

    #[test]
    fn test_unrecognized_line_contributes_nothing() {
        assert!(extract("Corrupted").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_match_counter_tallies_hits() {
        let mut counter = MatchCounter::new();
        extract_with("+78 to maximum Life", &mut counter);
        extract_with("+16 to All Attributes", &mut counter);
        extract_with("Corrupted", &mut counter);

        assert_eq!(counter.total(), 4);

        let life_hits: u64 = counter
            .entries()
            .filter(|(rule, _)| rule.stat == StatKind::Life)
            .map(|(_, hits)| hits)
            .sum();
        assert_eq!(life_hits, 1);

        let attribute_hits: u64 = counter
            .entries()
            .filter(|(rule, _)| {
                matches!(
                    rule.stat,
                    StatKind::Strength | StatKind::Dexterity | StatKind::Intelligence
                )
            })
            .map(|(_, hits)| hits)
            .sum();
        assert_eq!(attribute_hits, 3);
    }

    #[test]
    fn test_stat_kind_all_is_complete() {
        assert_eq!(StatKind::all().len(), 32);
        // Every rule's target appears in the enumeration
        for rule in catalog() {
            assert!(StatKind::all().contains(&rule.stat));
        }
    }
}
