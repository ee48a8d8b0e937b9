//! Rule tables - what "worth keeping" means per gear category

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::StatKind;
use crate::config::ConfigError;
use crate::types::GearType;

use super::constants::DEFAULT_TOLERANCE;

/// One stat bar: the accumulated total must clear `threshold` (relaxed by
/// the table's tolerance) to contribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRequirement {
    pub stat: StatKind,
    pub threshold: f64,
}

/// One scoring rule for a category
///
/// Untagged on the wire: a table with `stat`/`threshold` keys is a single
/// requirement, one with `first`/`second` sub-tables is a paired
/// requirement that only counts when both bars clear together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationRule {
    Single(StatRequirement),
    Paired {
        first: StatRequirement,
        second: StatRequirement,
    },
}

impl ValidationRule {
    /// The one or two requirements behind this rule
    pub fn requirements(&self) -> impl Iterator<Item = &StatRequirement> {
        let (first, second) = match self {
            ValidationRule::Single(requirement) => (requirement, None),
            ValidationRule::Paired { first, second } => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }
}

/// A slot rule table: the tolerance knob plus per-category rule lists
///
/// A category with no rules (absent, or listed with an empty array) is
/// unhandled. The production table is [`RuleSet::builtin`]; alternatives
/// load from TOML through the config module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Threshold divider; values slightly under a raw bar still register
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Rule lists keyed by gear category
    pub slots: HashMap<GearType, Vec<ValidationRule>>,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn single(stat: StatKind, threshold: f64) -> ValidationRule {
    ValidationRule::Single(StatRequirement { stat, threshold })
}

fn paired(
    first: StatKind,
    first_threshold: f64,
    second: StatKind,
    second_threshold: f64,
) -> ValidationRule {
    ValidationRule::Paired {
        first: StatRequirement {
            stat: first,
            threshold: first_threshold,
        },
        second: StatRequirement {
            stat: second,
            threshold: second_threshold,
        },
    }
}

fn crit_pair() -> Vec<ValidationRule> {
    vec![
        single(StatKind::CritChance, 20.0),
        single(StatKind::CritMult, 20.0),
    ]
}

fn elemental_attack_rolls() -> Vec<ValidationRule> {
    vec![
        single(StatKind::FireDamageAttack, 50.0),
        single(StatKind::ColdDamageAttack, 50.0),
        single(StatKind::LightningDamageAttack, 90.0),
    ]
}

fn attack_weapon_list() -> Vec<ValidationRule> {
    let mut rules = vec![
        single(StatKind::PhysicalDamageMult, 130.0),
        single(StatKind::PhysicalDamageAdd, 25.0),
        single(StatKind::AttackSpeed, 15.0),
        single(StatKind::GemLevel, 2.0),
    ];
    rules.extend(elemental_attack_rolls());
    rules
}

fn caster_weapon_list() -> Vec<ValidationRule> {
    vec![
        single(StatKind::SpellDamage, 75.0),
        single(StatKind::SpellCritChance, 90.0),
        single(StatKind::FireDamageSpell, 40.0),
        single(StatKind::ColdDamageSpell, 40.0),
        single(StatKind::LightningDamageSpell, 70.0),
        single(StatKind::CritMult, 20.0),
        single(StatKind::PhysicalDamageMult, 130.0),
        single(StatKind::PhysicalDamageAdd, 25.0),
    ]
}

impl RuleSet {
    /// The built-in production rule table
    ///
    /// Thresholds are raw bars, tuned per category; the shared tolerance
    /// relaxes them at evaluation time. Claws, flasks and jewels carry no
    /// list: they classify as unhandled.
    pub fn builtin() -> Self {
        let mut slots = HashMap::new();

        slots.insert(
            GearType::Chest,
            vec![
                single(StatKind::Life, 60.0),
                single(StatKind::EnergyShield, 500.0),
                paired(StatKind::Life, 50.0, StatKind::EnergyShield, 300.0),
                single(StatKind::Strength, 30.0),
                single(StatKind::Intelligence, 30.0),
                single(StatKind::Resistance, 60.0),
            ],
        );

        slots.insert(
            GearType::Helmet,
            vec![
                single(StatKind::Life, 50.0),
                single(StatKind::EnergyShield, 250.0),
                paired(StatKind::Life, 40.0, StatKind::EnergyShield, 175.0),
                single(StatKind::Accuracy, 250.0),
                single(StatKind::Intelligence, 30.0),
                single(StatKind::Resistance, 60.0),
            ],
        );

        slots.insert(
            GearType::Boots,
            vec![
                single(StatKind::MovementSpeed, 20.0),
                single(StatKind::Life, 50.0),
                single(StatKind::EnergyShield, 100.0),
                paired(StatKind::Life, 40.0, StatKind::EnergyShield, 75.0),
                single(StatKind::Strength, 30.0),
                single(StatKind::Intelligence, 30.0),
                single(StatKind::Resistance, 60.0),
            ],
        );

        slots.insert(
            GearType::Gloves,
            vec![
                single(StatKind::Life, 50.0),
                single(StatKind::EnergyShield, 100.0),
                paired(StatKind::Life, 40.0, StatKind::EnergyShield, 75.0),
                single(StatKind::AttackSpeed, 12.0),
                single(StatKind::Accuracy, 250.0),
                single(StatKind::Strength, 30.0),
                single(StatKind::Intelligence, 30.0),
                single(StatKind::Resistance, 60.0),
            ],
        );

        slots.insert(
            GearType::Shield,
            vec![
                single(StatKind::Life, 60.0),
                single(StatKind::EnergyShield, 250.0),
                paired(StatKind::Life, 50.0, StatKind::EnergyShield, 220.0),
                single(StatKind::Resistance, 80.0),
                single(StatKind::Strength, 30.0),
                single(StatKind::Intelligence, 30.0),
                single(StatKind::SpellDamage, 40.0),
                single(StatKind::SpellCritChance, 60.0),
            ],
        );

        // Attack weapons share one archetype list; bows add the crit pair.
        for gear_type in [GearType::Sword, GearType::Axe, GearType::Mace] {
            slots.insert(gear_type, attack_weapon_list());
        }
        let mut bow = attack_weapon_list();
        bow.extend(crit_pair());
        slots.insert(GearType::Bow, bow);

        // Caster weapons carry the caster list, a per-type attack speed
        // bar, then the attack-archetype checks: a hybrid item can satisfy
        // both archetypes and both count.
        let mut dagger = caster_weapon_list();
        dagger.push(single(StatKind::AttackSpeed, 15.0));
        dagger.extend(crit_pair());
        dagger.extend(elemental_attack_rolls());
        slots.insert(GearType::Dagger, dagger);

        let mut wand = caster_weapon_list();
        wand.push(single(StatKind::AttackSpeed, 8.0));
        wand.extend(crit_pair());
        wand.extend(elemental_attack_rolls());
        slots.insert(GearType::Wand, wand);

        let mut sceptre = caster_weapon_list();
        sceptre.extend(crit_pair());
        sceptre.extend(elemental_attack_rolls());
        slots.insert(GearType::Sceptre, sceptre);

        slots.insert(
            GearType::Staff,
            vec![
                single(StatKind::GemLevel, 2.0),
                single(StatKind::FireDamageSpell, 50.0),
                single(StatKind::ColdDamageSpell, 50.0),
                single(StatKind::LightningDamageSpell, 100.0),
                single(StatKind::SpellDamage, 75.0),
            ],
        );

        slots.insert(
            GearType::Belt,
            vec![
                single(StatKind::Life, 60.0),
                single(StatKind::Strength, 25.0),
                single(StatKind::Armour, 200.0),
                single(StatKind::EnergyShield, 35.0),
                single(StatKind::Resistance, 50.0),
                single(StatKind::WeaponElemDamage, 25.0),
                single(StatKind::FlaskChargesGained, 1.0),
                single(StatKind::FlaskChargesUsed, 1.0),
                single(StatKind::FlaskEffectDuration, 1.0),
            ],
        );

        slots.insert(
            GearType::Ring,
            vec![
                single(StatKind::Life, 40.0),
                single(StatKind::Strength, 40.0),
                single(StatKind::PhysicalDamageAdd, 8.0),
                single(StatKind::WeaponElemDamage, 20.0),
                single(StatKind::IncreasedRarity, 30.0),
                single(StatKind::Resistance, 60.0),
                single(StatKind::ManaRegen, 40.0),
                single(StatKind::Accuracy, 200.0),
                single(StatKind::TotalAttributes, 60.0),
            ],
        );

        slots.insert(
            GearType::Amulet,
            vec![
                single(StatKind::Life, 40.0),
                single(StatKind::PhysicalDamageAdd, 8.0),
                single(StatKind::WeaponElemDamage, 20.0),
                single(StatKind::IncreasedRarity, 30.0),
                single(StatKind::Resistance, 60.0),
                single(StatKind::ManaRegen, 40.0),
                single(StatKind::Accuracy, 200.0),
                single(StatKind::TotalAttributes, 60.0),
                single(StatKind::CritMult, 20.0),
                single(StatKind::CritChance, 20.0),
                single(StatKind::SpellDamage, 20.0),
                single(StatKind::EnergyShieldMult, 10.0),
            ],
        );

        slots.insert(
            GearType::Quiver,
            vec![
                single(StatKind::Life, 50.0),
                single(StatKind::WeaponElemDamage, 20.0),
                single(StatKind::CritMult, 20.0),
                single(StatKind::CritChance, 20.0),
                single(StatKind::Resistance, 55.0),
            ],
        );

        RuleSet {
            tolerance: DEFAULT_TOLERANCE,
            slots,
        }
    }

    /// Check the table is usable: positive finite tolerance and thresholds
    ///
    /// Empty category lists pass; they mark a category explicitly unscored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }

        for (gear_type, rules) in &self.slots {
            for rule in rules {
                for requirement in rule.requirements() {
                    if !(requirement.threshold > 0.0 && requirement.threshold.is_finite()) {
                        return Err(ConfigError::ValidationError(format!(
                            "{:?} threshold for {:?} must be positive and finite, got {}",
                            requirement.stat, gear_type, requirement.threshold
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        assert!(RuleSet::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_category_coverage() {
        let rules = RuleSet::builtin();

        let scored = [
            GearType::Helmet,
            GearType::Chest,
            GearType::Gloves,
            GearType::Boots,
            GearType::Belt,
            GearType::Ring,
            GearType::Amulet,
            GearType::Quiver,
            GearType::Shield,
            GearType::Sword,
            GearType::Axe,
            GearType::Mace,
            GearType::Dagger,
            GearType::Wand,
            GearType::Sceptre,
            GearType::Staff,
            GearType::Bow,
        ];
        for gear_type in scored {
            assert!(
                rules.slots.contains_key(&gear_type),
                "missing rules for {:?}",
                gear_type
            );
        }

        for gear_type in [GearType::Claw, GearType::Flask, GearType::Jewel, GearType::Unknown] {
            assert!(
                !rules.slots.contains_key(&gear_type),
                "{:?} should stay unscored",
                gear_type
            );
        }
    }

    #[test]
    fn test_attack_weapons_share_one_list() {
        let rules = RuleSet::builtin();
        let sword = &rules.slots[&GearType::Sword];

        assert_eq!(sword, &rules.slots[&GearType::Axe]);
        assert_eq!(sword, &rules.slots[&GearType::Mace]);

        // Bows extend the shared list with the crit pair
        let bow = &rules.slots[&GearType::Bow];
        assert_eq!(bow.len(), sword.len() + 2);
        assert_eq!(&bow[..sword.len()], sword.as_slice());
    }

    #[test]
    fn test_caster_weapons_differ_in_attack_speed_only() {
        let rules = RuleSet::builtin();
        let dagger = &rules.slots[&GearType::Dagger];
        let wand = &rules.slots[&GearType::Wand];
        let sceptre = &rules.slots[&GearType::Sceptre];

        assert_eq!(dagger.len(), sceptre.len() + 1);
        assert_eq!(wand.len(), sceptre.len() + 1);

        let attack_speed_bar = |rules: &[ValidationRule]| -> Option<f64> {
            rules.iter().find_map(|rule| match rule {
                ValidationRule::Single(req) if req.stat == StatKind::AttackSpeed => {
                    Some(req.threshold)
                }
                _ => None,
            })
        };
        assert_eq!(attack_speed_bar(dagger), Some(15.0));
        assert_eq!(attack_speed_bar(wand), Some(8.0));
        assert_eq!(attack_speed_bar(sceptre), None);
    }

    #[test]
    fn test_caster_lists_keep_duplicate_crit_mult() {
        // CritMult backs both the caster list and the attack-archetype
        // tail; both entries score.
        let rules = RuleSet::builtin();
        let duplicates = rules.slots[&GearType::Sceptre]
            .iter()
            .filter(|rule| {
                matches!(
                    rule,
                    ValidationRule::Single(req) if req.stat == StatKind::CritMult
                )
            })
            .count();
        assert_eq!(duplicates, 2);
    }

    #[test]
    fn test_requirements_iterator() {
        let single_rule = single(StatKind::Life, 60.0);
        assert_eq!(single_rule.requirements().count(), 1);

        let paired_rule = paired(StatKind::Life, 50.0, StatKind::EnergyShield, 300.0);
        let stats: Vec<StatKind> = paired_rule.requirements().map(|r| r.stat).collect();
        assert_eq!(stats, vec![StatKind::Life, StatKind::EnergyShield]);
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        let mut rules = RuleSet::builtin();
        rules.tolerance = 0.0;
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_threshold() {
        let mut slots = HashMap::new();
        slots.insert(GearType::Ring, vec![single(StatKind::Life, 0.0)]);
        let rules = RuleSet {
            tolerance: DEFAULT_TOLERANCE,
            slots,
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_accepts_empty_category_list() {
        let mut slots = HashMap::new();
        slots.insert(GearType::Flask, Vec::new());
        let rules = RuleSet {
            tolerance: DEFAULT_TOLERANCE,
            slots,
        };
        assert!(rules.validate().is_ok());
    }
}
