//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by every other module and know nothing about
//! quests or battles.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{BattleConfig, MinionHealth, Pacing, RewardFormula};
pub use error::{
    BattleError, ConfigError, ContentError, GameError, LookupError, ShopError, StoreError,
};
