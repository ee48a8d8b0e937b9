//! Item - The looted-equipment shape handed in by upstream acquisition

use serde::{Deserialize, Serialize};

use crate::types::{GearType, Rarity};

/// A structured (non-modifier) property on an item, e.g. "Energy Shield": 412
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperty {
    /// Property display name
    pub name: String,
    /// Already-parsed numeric value
    pub value: f64,
}

/// One looted item as upstream hands it over
///
/// The engine reads modifier lines as plain text. Which lines exist, and in
/// what order, is upstream's business; aggregation does not care.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Equipment category
    pub gear_type: GearType,
    /// Item rarity
    pub rarity: Rarity,
    /// Implicit modifier lines
    #[serde(default)]
    pub implicit_mods: Vec<String>,
    /// Explicit modifier lines
    #[serde(default)]
    pub explicit_mods: Vec<String>,
    /// Structured properties (name + parsed value)
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
}

impl Item {
    /// Create an item with no modifiers or properties
    pub fn new(name: impl Into<String>, gear_type: GearType, rarity: Rarity) -> Self {
        Item {
            name: name.into(),
            gear_type,
            rarity,
            implicit_mods: Vec::new(),
            explicit_mods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Look up a structured property value by name
    pub fn property(&self, name: &str) -> Option<f64> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }

    /// All modifier lines in aggregation order (implicits, then explicits)
    pub fn mod_lines(&self) -> impl Iterator<Item = &str> {
        self.implicit_mods
            .iter()
            .chain(self.explicit_mods.iter())
            .map(String::as_str)
    }

    /// Whether the item's explicit modifiers are not yet visible
    ///
    /// Normal items legitimately have no explicits; anything rarer with an
    /// empty explicit list simply has not been identified yet, so its
    /// modifier text cannot be trusted.
    pub fn is_unidentified(&self) -> bool {
        self.rarity != Rarity::Normal && self.explicit_mods.is_empty()
    }
}
