//! The persistent hero.

use serde::{Deserialize, Serialize};

/// Placeholder name of an empty armor slot.
pub const NO_ARMOR: &str = "None";

/// Weapon every new hero starts with.
pub const STARTING_WEAPON: &str = "Wooden Sword";

/// Health every new hero starts with, before armor.
pub const BASE_HEALTH: u32 = 100;

/// An armor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmorSlot {
    Head,
    UpperBody,
    LowerBody,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 3] = [ArmorSlot::Head, ArmorSlot::UpperBody, ArmorSlot::LowerBody];
}

impl std::fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArmorSlot::Head => f.write_str("Head"),
            ArmorSlot::UpperBody => f.write_str("Upper Body"),
            ArmorSlot::LowerBody => f.write_str("Lower Body"),
        }
    }
}

/// Armor worn in each slot, by item name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub head: String,
    pub upper_body: String,
    pub lower_body: String,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            head: NO_ARMOR.to_string(),
            upper_body: NO_ARMOR.to_string(),
            lower_body: NO_ARMOR.to_string(),
        }
    }
}

impl Equipment {
    /// Name of the item in a slot, `"None"` if empty.
    #[must_use]
    pub fn get(&self, slot: ArmorSlot) -> &str {
        match slot {
            ArmorSlot::Head => &self.head,
            ArmorSlot::UpperBody => &self.upper_body,
            ArmorSlot::LowerBody => &self.lower_body,
        }
    }

    /// Put an item in a slot and return what was there.
    pub fn replace(&mut self, slot: ArmorSlot, item: impl Into<String>) -> String {
        let target = match slot {
            ArmorSlot::Head => &mut self.head,
            ArmorSlot::UpperBody => &mut self.upper_body,
            ArmorSlot::LowerBody => &mut self.lower_body,
        };
        std::mem::replace(target, item.into())
    }
}

/// Level, currency, and gear. Saved between sessions.
///
/// `health` is the hero's health before armor; the health a battle starts
/// with is `max_health()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub health: u32,
    pub level: u32,
    pub exp: u32,
    pub gold: u32,
    pub armor: Equipment,
    pub armor_health_bonus: u32,
    pub weapon: String,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            health: BASE_HEALTH,
            level: 1,
            exp: 0,
            gold: 0,
            armor: Equipment::default(),
            armor_health_bonus: 0,
            weapon: STARTING_WEAPON.to_string(),
        }
    }
}

impl Character {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting gold.
    #[must_use]
    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    /// Health including armor.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.health + self.armor_health_bonus
    }

    /// Check whether an item is worn in any slot.
    #[must_use]
    pub fn is_equipped(&self, item: &str) -> bool {
        ArmorSlot::ALL.iter().any(|&slot| self.armor.get(slot) == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character() {
        let hero = Character::new();
        assert_eq!(hero.level, 1);
        assert_eq!(hero.max_health(), 100);
        assert_eq!(hero.weapon, "Wooden Sword");
        assert_eq!(hero.armor.get(ArmorSlot::UpperBody), "None");
    }

    #[test]
    fn test_save_blob_field_names() {
        let mut hero = Character::new().with_gold(40);
        hero.armor.replace(ArmorSlot::UpperBody, "Padded Jacket");
        hero.armor_health_bonus = 8;

        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["armorHealthBonus"], 8);
        assert_eq!(json["armor"]["upperBody"], "Padded Jacket");
        assert_eq!(json["armor"]["lowerBody"], "None");
        assert_eq!(json["gold"], 40);
    }

    #[test]
    fn test_partial_save_fills_defaults() {
        let hero: Character = serde_json::from_str(r#"{ "level": 3, "exp": 20 }"#).unwrap();
        assert_eq!(hero.level, 3);
        assert_eq!(hero.health, 100);
        assert_eq!(hero.weapon, "Wooden Sword");
    }

    #[test]
    fn test_replace_slot() {
        let mut armor = Equipment::default();
        assert_eq!(armor.replace(ArmorSlot::Head, "Iron Helm"), "None");
        assert_eq!(armor.replace(ArmorSlot::Head, "Steel Helmet"), "Iron Helm");
        assert_eq!(armor.get(ArmorSlot::Head), "Steel Helmet");
    }
}
