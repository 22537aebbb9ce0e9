//! The turn-based battle: a session, the engine that drives it, and the
//! events it emits.

pub mod event;
pub mod session;
pub mod engine;

pub use event::{
    BattleEvent, BattleOutcome, HealthDisplay, PlayerAnswer, Prompt, QuestionView, Scheduled,
    Transition, Turn,
};
pub use session::{BattleSession, Difficulty, Phase};
pub use engine::BattleEngine;
