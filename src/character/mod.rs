//! The hero between battles: stats, armor, rewards, and saves.

pub mod player;
pub mod armor;
pub mod rewards;
pub mod store;

pub use player::{ArmorSlot, Character, Equipment, BASE_HEALTH, NO_ARMOR, STARTING_WEAPON};
pub use armor::{find_item, ArmorItem, Blacksmith, Purchase, CATALOG, STOCK_SIZE};
pub use rewards::{exp_required_for_level, reward_for, settle, RewardReport};
pub use store::{CharacterStore, FileStore, MemoryStore};
