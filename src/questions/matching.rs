//! Matching rounds: a whole group answered as term/definition pairs.
//!
//! Each row shows one question's first accepted answer; the player picks
//! which prompt it belongs to. The round is scored in one submission.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::answers::normalize;
use crate::content::{Group, Question};
use crate::core::{BattleError, GameRng};

/// What the player sees for a matching round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingBoard {
    /// Selectable prompts, shuffled.
    pub prompts: Vec<String>,
    /// One answer per row, shuffled independently.
    pub rows: Vec<String>,
}

impl MatchingBoard {
    /// Shuffle a group into a board.
    pub fn build(group: &Group, rng: &mut GameRng) -> Result<Self, BattleError> {
        let mut prompts: Vec<String> = group.questions.iter().map(|q| q.prompt.clone()).collect();
        let mut rows = group
            .questions
            .iter()
            .map(|q| {
                q.answers.first().cloned().ok_or_else(|| {
                    BattleError::MissingQuestionData(format!(
                        "matching question '{}' has no answer",
                        q.prompt
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rng.shuffle(&mut prompts);
        rng.shuffle(&mut rows);
        Ok(Self { prompts, rows })
    }
}

/// The player's pick for one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSelection {
    /// The row's answer text.
    pub answer: String,
    /// The prompt chosen for it, if any.
    pub chosen_prompt: Option<String>,
}

impl MatchSelection {
    pub fn new(answer: impl Into<String>, chosen_prompt: Option<&str>) -> Self {
        Self {
            answer: answer.into(),
            chosen_prompt: chosen_prompt.map(str::to_string),
        }
    }
}

/// Tally of a scored matching round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingResult {
    pub correct: usize,
    pub incorrect: usize,
}

/// Score a submission against the group's questions.
///
/// Each row counts at most once. Rows left out, unanswered, or matched to
/// the wrong prompt are incorrect; `correct + incorrect` always equals the
/// number of questions.
#[must_use]
pub fn score(questions: &[Question], selections: &[MatchSelection]) -> MatchingResult {
    let mut scored_rows = FxHashSet::default();
    let mut correct = 0;

    for selection in selections {
        let row = normalize(&selection.answer);
        if !scored_rows.insert(row.clone()) {
            continue;
        }
        let Some(chosen) = selection.chosen_prompt.as_deref() else {
            continue;
        };
        let owner = questions
            .iter()
            .find(|q| q.answers.iter().any(|a| normalize(a) == row));
        if owner.is_some_and(|q| normalize(&q.prompt) == normalize(chosen)) {
            correct += 1;
        }
    }

    let correct = correct.min(questions.len());
    MatchingResult {
        correct,
        incorrect: questions.len() - correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GroupKind;

    fn group() -> Group {
        Group {
            kind: GroupKind::Matching,
            questions: vec![
                Question::new("Upper arm bone", ["Humerus"]),
                Question::new("Lateral forearm bone", ["Radius"]),
                Question::new("Medial forearm bone", ["Ulna"]),
            ],
        }
    }

    #[test]
    fn test_board_has_every_prompt_and_row() {
        let mut rng = GameRng::new(9);
        let board = MatchingBoard::build(&group(), &mut rng).unwrap();

        let mut prompts = board.prompts.clone();
        prompts.sort();
        assert_eq!(prompts, vec!["Lateral forearm bone", "Medial forearm bone", "Upper arm bone"]);

        let mut rows = board.rows.clone();
        rows.sort();
        assert_eq!(rows, vec!["Humerus", "Radius", "Ulna"]);
    }

    #[test]
    fn test_board_missing_answer() {
        let mut g = group();
        g.questions[1].answers.clear();
        let mut rng = GameRng::new(9);

        assert!(matches!(
            MatchingBoard::build(&g, &mut rng),
            Err(BattleError::MissingQuestionData(_))
        ));
    }

    #[test]
    fn test_score_all_correct() {
        let g = group();
        let selections = vec![
            MatchSelection::new("Ulna", Some("medial forearm bone ")),
            MatchSelection::new("Humerus", Some("Upper arm bone")),
            MatchSelection::new("Radius", Some("Lateral forearm bone")),
        ];

        assert_eq!(score(&g.questions, &selections), MatchingResult { correct: 3, incorrect: 0 });
    }

    #[test]
    fn test_score_partial_and_missing() {
        let g = group();
        let selections = vec![
            MatchSelection::new("Ulna", Some("Lateral forearm bone")),
            MatchSelection::new("Humerus", Some("Upper arm bone")),
            // Radius row left unanswered
            MatchSelection::new("Radius", None),
        ];

        assert_eq!(score(&g.questions, &selections), MatchingResult { correct: 1, incorrect: 2 });
        assert_eq!(score(&g.questions, &[]), MatchingResult { correct: 0, incorrect: 3 });
    }

    #[test]
    fn test_score_counts_each_row_once() {
        let g = group();
        let selections = vec![
            MatchSelection::new("Humerus", Some("Upper arm bone")),
            MatchSelection::new("humerus", Some("Upper arm bone")),
            MatchSelection::new("Stapes", Some("Upper arm bone")),
        ];

        assert_eq!(score(&g.questions, &selections), MatchingResult { correct: 1, incorrect: 2 });
    }
}
