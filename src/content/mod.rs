//! Quest content: the data model and the library it is loaded into.
//!
//! ## Key Types
//!
//! - `Unit`: One content file (a chapter)
//! - `Quest`: Groups of questions plus minion and boss images
//! - `Group`: One minion encounter, `standard` or `matching`
//! - `Question`: Prompt, kind, accepted answers, optional hotspots
//! - `ContentLibrary`: Loading and `(unit_id, quest_id)` lookup

pub mod model;
pub mod library;

pub use model::{Group, GroupKind, Hotspot, Quest, Question, QuestionKind, Region, Unit};
pub use library::ContentLibrary;
