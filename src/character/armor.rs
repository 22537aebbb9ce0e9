//! Armor catalog and the blacksmith's stock.

use serde::Serialize;
use tracing::info;

use super::player::{ArmorSlot, Character};
use crate::core::{GameRng, ShopError};

/// Number of items the blacksmith offers at a time.
pub const STOCK_SIZE: usize = 3;

/// A purchasable armor piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorItem {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub slot: ArmorSlot,
    pub health_bonus: u32,
    /// Price in gold.
    pub value: u32,
}

const fn item(name: &'static str, slot: ArmorSlot, health_bonus: u32, value: u32) -> ArmorItem {
    ArmorItem { name, slot, health_bonus, value }
}

/// Every armor piece in the game, four per slot.
pub const CATALOG: [ArmorItem; 12] = [
    item("Leather Cap", ArmorSlot::Head, 5, 20),
    item("Iron Helm", ArmorSlot::Head, 10, 50),
    item("Steel Helmet", ArmorSlot::Head, 15, 100),
    item("Mythril Helm", ArmorSlot::Head, 25, 250),
    item("Padded Jacket", ArmorSlot::UpperBody, 8, 30),
    item("Chainmail Shirt", ArmorSlot::UpperBody, 15, 75),
    item("Steel Cuirass", ArmorSlot::UpperBody, 20, 150),
    item("Dragon Plate", ArmorSlot::UpperBody, 35, 350),
    item("Cloth Pants", ArmorSlot::LowerBody, 3, 15),
    item("Leather Leggings", ArmorSlot::LowerBody, 7, 25),
    item("Iron Greaves", ArmorSlot::LowerBody, 12, 60),
    item("Steel Greaves", ArmorSlot::LowerBody, 18, 120),
];

/// Look up a catalog item by exact name.
#[must_use]
pub fn find_item(name: &str) -> Option<&'static ArmorItem> {
    CATALOG.iter().find(|item| item.name == name)
}

/// What a completed purchase changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub item: ArmorItem,
    /// Item name previously in the slot, `"None"` if it was empty.
    pub replaced: String,
    pub gold_spent: u32,
    /// Change to the armor health bonus; negative when downgrading.
    pub bonus_delta: i64,
}

/// The blacksmith's rotating stock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blacksmith {
    stock: Vec<ArmorItem>,
}

impl Blacksmith {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items on offer, restocking from a shuffled catalog if empty.
    pub fn stock(&mut self, rng: &mut GameRng) -> &[ArmorItem] {
        if self.stock.is_empty() {
            let mut catalog = CATALOG.to_vec();
            rng.shuffle(&mut catalog);
            catalog.truncate(STOCK_SIZE);
            self.stock = catalog;
        }
        &self.stock
    }

    /// Items on offer without restocking.
    #[must_use]
    pub fn current_stock(&self) -> &[ArmorItem] {
        &self.stock
    }

    /// Empty the stock so the next visit draws fresh items.
    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Buy an item from the stock and equip it.
    ///
    /// The old piece in the slot is discarded and its bonus removed.
    pub fn purchase(&self, hero: &mut Character, name: &str) -> Result<Purchase, ShopError> {
        let item = *self
            .stock
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| ShopError::UnknownItem(name.to_string()))?;

        if hero.armor.get(item.slot) == item.name {
            return Err(ShopError::AlreadyEquipped(item.name.to_string()));
        }
        if hero.gold < item.value {
            return Err(ShopError::InsufficientGold {
                item: item.name.to_string(),
                cost: item.value,
                available: hero.gold,
            });
        }

        hero.gold -= item.value;
        let replaced = hero.armor.replace(item.slot, item.name);
        let old_bonus = find_item(&replaced).map_or(0, |old| old.health_bonus);
        hero.armor_health_bonus = hero.armor_health_bonus.saturating_sub(old_bonus) + item.health_bonus;

        info!(item = item.name, slot = %item.slot, gold_left = hero.gold, "Armor purchased");

        Ok(Purchase {
            item,
            replaced,
            gold_spent: item.value,
            bonus_delta: i64::from(item.health_bonus) - i64::from(old_bonus),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked(names: &[&str]) -> Blacksmith {
        Blacksmith {
            stock: names.iter().filter_map(|n| find_item(n).copied()).collect(),
        }
    }

    #[test]
    fn test_catalog_has_four_per_slot() {
        for slot in ArmorSlot::ALL {
            assert_eq!(CATALOG.iter().filter(|i| i.slot == slot).count(), 4);
        }
        assert_eq!(find_item("Dragon Plate").unwrap().health_bonus, 35);
        assert!(find_item("Obsidian Helm").is_none());
    }

    #[test]
    fn test_stock_is_lazy_and_stable() {
        let mut smith = Blacksmith::new();
        let mut rng = GameRng::new(5);
        assert!(smith.current_stock().is_empty());

        let first = smith.stock(&mut rng).to_vec();
        assert_eq!(first.len(), STOCK_SIZE);
        assert_eq!(smith.stock(&mut rng), first.as_slice());

        smith.clear();
        assert!(smith.current_stock().is_empty());
        assert_eq!(smith.stock(&mut rng).len(), STOCK_SIZE);
    }

    #[test]
    fn test_purchase_and_upgrade() {
        let smith = stocked(&["Iron Helm", "Mythril Helm", "Cloth Pants"]);
        let mut hero = Character::new().with_gold(400);

        let receipt = smith.purchase(&mut hero, "Iron Helm").unwrap();
        assert_eq!(receipt.replaced, "None");
        assert_eq!(receipt.bonus_delta, 10);
        assert_eq!(hero.gold, 350);
        assert_eq!(hero.max_health(), 110);

        let receipt = smith.purchase(&mut hero, "Mythril Helm").unwrap();
        assert_eq!(receipt.replaced, "Iron Helm");
        assert_eq!(receipt.bonus_delta, 15);
        assert_eq!(hero.armor_health_bonus, 25);
        assert_eq!(hero.gold, 100);
    }

    #[test]
    fn test_purchase_rejections() {
        let smith = stocked(&["Steel Greaves", "Leather Cap"]);
        let mut hero = Character::new().with_gold(30);

        assert_eq!(
            smith.purchase(&mut hero, "Steel Greaves"),
            Err(ShopError::InsufficientGold {
                item: "Steel Greaves".into(),
                cost: 120,
                available: 30,
            })
        );
        assert_eq!(
            smith.purchase(&mut hero, "Dragon Plate"),
            Err(ShopError::UnknownItem("Dragon Plate".into()))
        );

        smith.purchase(&mut hero, "Leather Cap").unwrap();
        assert_eq!(
            smith.purchase(&mut hero, "Leather Cap"),
            Err(ShopError::AlreadyEquipped("Leather Cap".into()))
        );
        assert_eq!(hero.gold, 10);
    }
}
