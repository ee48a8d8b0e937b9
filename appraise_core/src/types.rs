//! Core types specific to the appraisal engine

use serde::{Deserialize, Serialize};

/// Equipment category of a looted item
///
/// Categories line up with the gear kinds the rule table knows how to score.
/// Anything upstream sends that we do not recognize lands on `Unknown` and
/// classifies as unhandled rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum GearType {
    Helmet,
    Chest,
    Gloves,
    Boots,
    Belt,
    Ring,
    Amulet,
    Quiver,
    Shield,
    Sword,
    Axe,
    Mace,
    Claw,
    Dagger,
    Wand,
    Sceptre,
    Staff,
    Bow,
    Flask,
    Jewel,
    Unknown,
}

impl From<String> for GearType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "helmet" => GearType::Helmet,
            "chest" => GearType::Chest,
            "gloves" => GearType::Gloves,
            "boots" => GearType::Boots,
            "belt" => GearType::Belt,
            "ring" => GearType::Ring,
            "amulet" => GearType::Amulet,
            "quiver" => GearType::Quiver,
            "shield" => GearType::Shield,
            "sword" => GearType::Sword,
            "axe" => GearType::Axe,
            "mace" => GearType::Mace,
            "claw" => GearType::Claw,
            "dagger" => GearType::Dagger,
            "wand" => GearType::Wand,
            "sceptre" => GearType::Sceptre,
            "staff" => GearType::Staff,
            "bow" => GearType::Bow,
            "flask" => GearType::Flask,
            "jewel" => GearType::Jewel,
            _ => GearType::Unknown,
        }
    }
}

impl GearType {
    /// Get all gear types
    pub fn all() -> &'static [GearType] {
        &[
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
            GearType::Claw,
            GearType::Dagger,
            GearType::Wand,
            GearType::Sceptre,
            GearType::Staff,
            GearType::Bow,
            GearType::Flask,
            GearType::Jewel,
            GearType::Unknown,
        ]
    }

    /// Display name for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            GearType::Helmet => "Helmet",
            GearType::Chest => "Chest",
            GearType::Gloves => "Gloves",
            GearType::Boots => "Boots",
            GearType::Belt => "Belt",
            GearType::Ring => "Ring",
            GearType::Amulet => "Amulet",
            GearType::Quiver => "Quiver",
            GearType::Shield => "Shield",
            GearType::Sword => "Sword",
            GearType::Axe => "Axe",
            GearType::Mace => "Mace",
            GearType::Claw => "Claw",
            GearType::Dagger => "Dagger",
            GearType::Wand => "Wand",
            GearType::Sceptre => "Sceptre",
            GearType::Staff => "Staff",
            GearType::Bow => "Bow",
            GearType::Flask => "Flask",
            GearType::Jewel => "Jewel",
            GearType::Unknown => "Unknown",
        }
    }
}

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

impl Rarity {
    /// Display name for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Unique => "Unique",
        }
    }
}

/// Appraisal verdict for one item
///
/// `Unhandled` means the rule table has no rules for the item's category,
/// which is a different statement than `None` (scored, found wanting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Unhandled,
    None,
    Low,
    Mid,
    High,
}

impl QualityTier {
    /// Map a classification score onto a tier
    ///
    /// Cutoffs are inclusive: a score of exactly 1.0 is already `Low`.
    pub fn from_score(score: f64) -> Self {
        use crate::scoring::constants::{HIGH_SCORE, LOW_SCORE, MID_SCORE};

        if score >= HIGH_SCORE {
            QualityTier::High
        } else if score >= MID_SCORE {
            QualityTier::Mid
        } else if score >= LOW_SCORE {
            QualityTier::Low
        } else {
            QualityTier::None
        }
    }

    /// Display name for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Unhandled => "Unhandled",
            QualityTier::None => "None",
            QualityTier::Low => "Low",
            QualityTier::Mid => "Mid",
            QualityTier::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_score_cutoffs() {
        assert_eq!(QualityTier::from_score(0.0), QualityTier::None);
        assert_eq!(QualityTier::from_score(0.99), QualityTier::None);
        assert_eq!(QualityTier::from_score(1.0), QualityTier::Low);
        assert_eq!(QualityTier::from_score(1.99), QualityTier::Low);
        assert_eq!(QualityTier::from_score(2.0), QualityTier::Mid);
        assert_eq!(QualityTier::from_score(2.99), QualityTier::Mid);
        assert_eq!(QualityTier::from_score(3.0), QualityTier::High);
        assert_eq!(QualityTier::from_score(10.0), QualityTier::High);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(QualityTier::Unhandled < QualityTier::None);
        assert!(QualityTier::None < QualityTier::Low);
        assert!(QualityTier::Low < QualityTier::Mid);
        assert!(QualityTier::Mid < QualityTier::High);
    }

    #[test]
    fn test_gear_type_serde_names() {
        let json = serde_json::to_string(&GearType::Sceptre).unwrap();
        assert_eq!(json, "\"sceptre\"");

        let back: GearType = serde_json::from_str("\"chest\"").unwrap();
        assert_eq!(back, GearType::Chest);
    }

    #[test]
    fn test_gear_type_unknown_catch_all() {
        let parsed: GearType = serde_json::from_str("\"fishing_rod\"").unwrap();
        assert_eq!(parsed, GearType::Unknown);
    }

    #[test]
    fn test_all_covers_every_gear_type() {
        assert_eq!(GearType::all().len(), 21);
    }
}
