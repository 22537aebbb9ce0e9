//! Question order for minions and the boss.
//!
//! A minion's questions are shuffled once and consumed in order; the
//! queue is only refilled after it has been cleared. The boss draws from
//! one shuffled pool of every question in the quest and wraps around
//! when the pool runs out, so a long boss fight repeats questions.

use crate::content::{Group, Quest, Question};
use crate::core::GameRng;

/// The group at `group_index`, if the quest has that many groups.
#[must_use]
pub fn next_group(quest: &Quest, group_index: usize) -> Option<&Group> {
    quest.group(group_index)
}

/// A uniformly shuffled copy of the group's questions.
#[must_use]
pub fn shuffled_questions(group: &Group, rng: &mut GameRng) -> Vec<Question> {
    let mut questions = group.questions.clone();
    rng.shuffle(&mut questions);
    questions
}

/// Every question of the quest, each exactly once, shuffled.
#[must_use]
pub fn boss_pool(quest: &Quest, rng: &mut GameRng) -> Vec<Question> {
    let mut pool: Vec<Question> = quest.questions().cloned().collect();
    rng.shuffle(&mut pool);
    pool
}

/// Questions in the order they will be asked, with a wrapping cursor.
#[derive(Clone, Debug, Default)]
pub struct QuestionQueue {
    questions: Vec<Question>,
    cursor: usize,
}

impl QuestionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queued questions. The cursor is left where it is.
    pub fn fill(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    /// Drop the queued questions so the next turn refills.
    pub fn clear(&mut self) {
        self.questions.clear();
    }

    /// The question under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Move the cursor forward, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.questions.is_empty() {
            self.cursor = (self.cursor + 1) % self.questions.len();
        }
    }

    /// Move the cursor back to the first question.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
