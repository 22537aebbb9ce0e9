//! Question selection: queues, the boss pool, answer options, and
//! matching boards.

pub mod selector;
pub mod choices;
pub mod matching;

pub use selector::{boss_pool, next_group, shuffled_questions, QuestionQueue};
pub use choices::{answer_pool, multiple_choice_options, true_false_options, Options};
pub use matching::{score as score_matching, MatchSelection, MatchingBoard, MatchingResult};
