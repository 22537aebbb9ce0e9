//! # anatomy-quest
//!
//! A quiz RPG engine: the hero fights minions and a boss by answering
//! anatomy questions loaded from JSON content files.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A battle is a `BattleSession` value passed to
//!    `BattleEngine` methods. No globals.
//!
//! 2. **No Clocks in the Core**: The engine emits `Schedule` events; the
//!    host decides when time passes through its `TimerQueue`.
//!
//! 3. **Deterministic**: Every shuffle and pick goes through `GameRng`, so
//!    a seed and a list of answers replay a battle exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `content`: Units, quests, groups, questions, and the content library
//! - `answers`: Answer normalization and hotspot hit testing
//! - `questions`: Question queues, boss pool, answer options, matching boards
//! - `battle`: The turn state machine
//! - `character`: The hero, armor shop, rewards, and saves
//! - `town`: The game host, presenter seam, timers, and tavern

pub mod core;
pub mod content;
pub mod answers;
pub mod questions;
pub mod battle;
pub mod character;
pub mod town;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    BattleConfig, MinionHealth, Pacing, RewardFormula,
    BattleError, ConfigError, ContentError, GameError, LookupError, ShopError, StoreError,
};

pub use crate::content::{ContentLibrary, Group, GroupKind, Hotspot, Quest, Question, QuestionKind, Unit};

pub use crate::answers::{normalize, AnswerSet, Point};

pub use crate::questions::{MatchSelection, MatchingBoard, MatchingResult, QuestionQueue};

pub use crate::battle::{
    BattleEngine, BattleEvent, BattleOutcome, BattleSession,
    Difficulty, HealthDisplay, Phase, PlayerAnswer, Prompt, QuestionView,
    Scheduled, Transition, Turn,
};

pub use crate::character::{
    ArmorItem, ArmorSlot, Blacksmith, Character, CharacterStore, FileStore, MemoryStore, RewardReport,
};

pub use crate::town::{Command, Game, NullPresenter, Presenter, Screen, TimerQueue};
