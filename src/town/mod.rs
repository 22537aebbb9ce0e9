//! The town host: screens, commands, timers, and the presenter seam.

pub mod game;
pub mod presenter;
pub mod scheduler;
pub mod tavern;

pub use game::{Command, Game, Screen};
pub use presenter::{NullPresenter, Presenter};
pub use scheduler::TimerQueue;
pub use tavern::{default_rivals, leaderboard, LeaderboardEntry, Ranked, HERO_NAME};
