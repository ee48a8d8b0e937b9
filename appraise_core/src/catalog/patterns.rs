//! The extraction rule table
//!
//! One entry per recognized modifier-line form, in the order they were
//! tuned. Conventions baked into the table:
//! - end-anchored, never start-anchored
//! - magnitudes are plain integers, captured as group 1
//! - "Adds A to B ..." damage rolls count the upper bound B
//! - the three All Attributes entries fan one line out to three stats
//! - the Global Critical Strike Chance pattern appears under two stats

use once_cell::sync::Lazy;

use super::{ExtractionRule, StatKind};

fn rule(stat: StatKind, pattern: &str) -> ExtractionRule {
    ExtractionRule::new(stat, pattern)
}

pub(super) static CATALOG: Lazy<Vec<ExtractionRule>> = Lazy::new(|| {
    vec![
        rule(StatKind::Life, r"\+([0-9]+) to maximum Life$"),
        rule(StatKind::EnergyShield, r"\+([0-9]+) to maximum Energy Shield$"),
        rule(StatKind::EnergyShieldMult, r"([0-9]+)% increased Energy Shield$"),
        rule(StatKind::Strength, r"\+([0-9]+) to Strength$"),
        rule(StatKind::Dexterity, r"\+([0-9]+) to Dexterity$"),
        rule(StatKind::Intelligence, r"\+([0-9]+) to Intelligence$"),
        rule(StatKind::Strength, r"\+([0-9]+) to All Attributes$"),
        rule(StatKind::Dexterity, r"\+([0-9]+) to All Attributes$"),
        rule(StatKind::Intelligence, r"\+([0-9]+) to All Attributes$"),
        rule(StatKind::Resistance, r"\+([0-9]+)% to Fire Resistance$"),
        rule(StatKind::Resistance, r"\+([0-9]+)% to Cold Resistance$"),
        rule(StatKind::Resistance, r"\+([0-9]+)% to Lightning Resistance$"),
        rule(StatKind::Resistance, r"\+([0-9]+)% to Chaos Resistance$"),
        rule(StatKind::Accuracy, r"\+([0-9]+) to Accuracy Rating$"),
        rule(StatKind::MovementSpeed, r"([0-9]+)% increased Movement Speed$"),
        rule(StatKind::AttackSpeed, r"([0-9]+)% increased Attack Speed$"),
        rule(StatKind::SpellDamage, r"([0-9]+)% increased Spell Damage$"),
        rule(
            StatKind::SpellCritChance,
            r"([0-9]+)% increased Critical Strike Chance for Spells$",
        ),
        rule(
            StatKind::SpellCritChance,
            r"([0-9]+)% increased Global Critical Strike Chance$",
        ),
        rule(
            StatKind::CritChance,
            r"([0-9]+)% increased Global Critical Strike Chance$",
        ),
        rule(
            StatKind::CritMult,
            r"([0-9]+)% to Global Critical Strike Multiplier$",
        ),
        rule(StatKind::GemLevel, r"\+([0-9]+) to Level of Socketed .*Gems$"),
        rule(StatKind::FireDamageAttack, r"Adds [0-9]+ to ([0-9]+) Fire Damage$"),
        rule(StatKind::ColdDamageAttack, r"Adds [0-9]+ to ([0-9]+) Cold Damage$"),
        rule(
            StatKind::LightningDamageAttack,
            r"Adds [0-9]+ to ([0-9]+) Lightning Damage$",
        ),
        rule(
            StatKind::FireDamageSpell,
            r"Adds [0-9]+ to ([0-9]+) Fire Damage to Spells$",
        ),
        rule(
            StatKind::ColdDamageSpell,
            r"Adds [0-9]+ to ([0-9]+) Cold Damage to Spells$",
        ),
        rule(
            StatKind::LightningDamageSpell,
            r"Adds [0-9]+ to ([0-9]+) Lightning Damage to Spells$",
        ),
        rule(StatKind::PhysicalDamageMult, r"([0-9]+)% increased Physical Damage$"),
        rule(
            StatKind::PhysicalDamageAdd,
            r"Adds [0-9]+ to ([0-9]+) Physical Damage$",
        ),
        rule(StatKind::CastSpeed, r"([0-9]+)% increased Cast Speed$"),
        rule(StatKind::Armour, r"\+([0-9]+) to Armour$"),
        rule(
            StatKind::WeaponElemDamage,
            r"([0-9]+)% increased Elemental Damage with Attack Skills$",
        ),
        rule(StatKind::FlaskChargesUsed, r"([0-9]+)% reduced Flask Charges used$"),
        rule(
            StatKind::FlaskChargesGained,
            r"([0-9]+)% increased Flask Charges gained$",
        ),
        rule(
            StatKind::FlaskEffectDuration,
            r"([0-9]+)% increased Flask effect duration$",
        ),
        rule(StatKind::ManaRegen, r"([0-9]+)% increased Mana Regeneration Rate$"),
        rule(
            StatKind::IncreasedRarity,
            r"([0-9]+)% increased Rarity of Items found$",
        ),
    ]
});
