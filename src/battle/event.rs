//! Battle inputs and outputs.
//!
//! The engine never touches a screen or a clock. It consumes
//! `PlayerAnswer`s and `Transition`s and emits `BattleEvent`s; the host
//! renders the events and runs the scheduled transitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::answers::Point;
use crate::content::QuestionKind;
use crate::questions::{MatchSelection, MatchingBoard, Options};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The player attacks: a correct answer damages the minion.
    #[default]
    Player,
    /// The minion attacks: a correct answer blocks.
    Enemy,
}

impl Turn {
    /// The other side.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Turn::Player => Turn::Enemy,
            Turn::Enemy => Turn::Player,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player => f.write_str("player"),
            Turn::Enemy => f.write_str("enemy"),
        }
    }
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    /// Every minion and the boss defeated.
    Victory,
    /// Player health reached zero.
    Defeat,
    /// Broken question data; rewarded like a defeat.
    Aborted,
}

impl BattleOutcome {
    #[must_use]
    pub fn is_victory(self) -> bool {
        self == BattleOutcome::Victory
    }
}

/// A delayed step the host must feed back with `BattleEngine::fire`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Resolve the answered turn and start the next one.
    NextTurn,
    /// Bring in the next group's minion.
    NextMinion,
    /// Bring in the boss.
    BossIntro,
    /// End a battle whose question data is broken.
    ForceEnd,
    /// Leave the battle screen. Handled by the host.
    ReturnToTown,
}

/// A transition and how long to wait before running it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub transition: Transition,
}

/// What the player submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAnswer {
    /// A chosen option, true/false, or typed answer.
    Text(String),
    /// A click on a hotspot image, in percent of the image.
    Click(Point),
    /// Picks for every row of a matching round.
    Matching(Vec<MatchSelection>),
}

impl PlayerAnswer {
    pub fn text(answer: impl Into<String>) -> Self {
        PlayerAnswer::Text(answer.into())
    }
}

/// How a question is answered on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Buttons, one per option.
    Choice { options: Options },
    /// A True and a False button.
    TrueFalse { options: Options },
    /// A text box.
    Written,
    /// A clickable image.
    Hotspot { image_url: String },
}

/// A question ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub kind: QuestionKind,
    pub prompt: Prompt,
}

/// Values for both health bars. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HealthDisplay {
    pub player: u32,
    pub player_max: u32,
    pub minion: u32,
    pub minion_max: u32,
}

/// Output of the battle engine, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    RenderQuestion(QuestionView),
    RenderMatching(MatchingBoard),
    Health(HealthDisplay),
    /// A line for the battle log.
    Log(String),
    EnemyImage(String),
    /// The submitted answer was judged; controls are now locked.
    Feedback { correct: bool, damage: u32 },
    Schedule(Scheduled),
    Finished(BattleOutcome),
}
