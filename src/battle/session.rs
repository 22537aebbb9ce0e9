//! The state of one battle.
//!
//! A `BattleSession` is created when a quest starts and dropped when the
//! host returns to town. It is plain data; every rule lives in
//! `BattleEngine`.

use serde::{Deserialize, Serialize};

use super::event::{BattleOutcome, HealthDisplay, Turn};
use crate::content::{Group, Quest, Question, QuestionKind};
use crate::questions::{MatchingResult, QuestionQueue};

/// Default kind for questions that do not declare one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    MultipleChoice,
    Written,
}

impl Difficulty {
    /// The question kind this difficulty stands for.
    #[must_use]
    pub fn question_kind(self) -> QuestionKind {
        match self {
            Difficulty::MultipleChoice => QuestionKind::MultipleChoice,
            Difficulty::Written => QuestionKind::Written,
        }
    }
}

/// Where the battle is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// A question is on screen; input is accepted.
    TurnActive,
    /// An answer was applied; waiting for `NextTurn`.
    Resolving,
    /// A minion fell; waiting for `NextMinion`.
    GroupCleared,
    /// The last minion fell; waiting for the boss.
    BossIntro,
    /// No question could be found for the turn. Nothing more happens.
    Stalled,
    /// A question could not be rendered; waiting for `ForceEnd`.
    Failing,
    /// Terminal.
    Finished(BattleOutcome),
}

/// One battle in progress.
#[derive(Clone, Debug)]
pub struct BattleSession {
    /// Private copy of the quest with its groups shuffled.
    pub(crate) quest: Quest,
    pub(crate) group_index: usize,
    pub(crate) queue: QuestionQueue,
    pub(crate) boss_pool: Vec<Question>,
    pub(crate) player_health: u32,
    pub(crate) player_max: u32,
    pub(crate) minion_health: u32,
    pub(crate) minion_max: u32,
    pub(crate) turn: Turn,
    pub(crate) is_boss: bool,
    pub(crate) last_matching: Option<MatchingResult>,
    pub(crate) enemy_image: String,
    pub(crate) phase: Phase,
    pub(crate) difficulty: Difficulty,
    /// Normalized answers of the whole quest, for distractors.
    pub(crate) answer_pool: Vec<String>,
}

impl BattleSession {
    /// The quest being fought, groups in battle order.
    #[must_use]
    pub fn quest(&self) -> &Quest {
        &self.quest
    }

    #[must_use]
    pub fn group_index(&self) -> usize {
        self.group_index
    }

    /// The group whose minion is on screen. `None` during the boss fight.
    #[must_use]
    pub fn current_group(&self) -> Option<&Group> {
        if self.is_boss {
            None
        } else {
            self.quest.group(self.group_index)
        }
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.queue.cursor()
    }

    /// The question under the cursor, if the queue is filled.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.queue.current()
    }

    /// Questions queued for the current minion or boss.
    #[must_use]
    pub fn queued_questions(&self) -> &[Question] {
        self.queue.questions()
    }

    #[must_use]
    pub fn boss_pool(&self) -> &[Question] {
        &self.boss_pool
    }

    #[must_use]
    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    #[must_use]
    pub fn minion_health(&self) -> u32 {
        self.minion_health
    }

    #[must_use]
    pub fn minion_max_health(&self) -> u32 {
        self.minion_max
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[must_use]
    pub fn is_boss_battle(&self) -> bool {
        self.is_boss
    }

    #[must_use]
    pub fn last_matching_result(&self) -> Option<MatchingResult> {
        self.last_matching
    }

    #[must_use]
    pub fn enemy_image(&self) -> &str {
        &self.enemy_image
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Check whether an answer would be accepted right now.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::TurnActive
    }

    /// The outcome, once the battle is over.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Current values for both health bars.
    #[must_use]
    pub fn health_display(&self) -> HealthDisplay {
        HealthDisplay {
            player: self.player_health,
            player_max: self.player_max,
            minion: self.minion_health,
            minion_max: self.minion_max,
        }
    }
}
