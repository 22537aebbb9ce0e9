//! The presentation seam.
//!
//! A `Presenter` receives everything the player should see. The game
//! never reads anything back from it.

use super::game::Screen;
use crate::battle::{BattleOutcome, HealthDisplay, QuestionView};
use crate::character::RewardReport;
use crate::questions::MatchingBoard;

/// Renders game output.
///
/// Every method has an empty default so adapters implement only what
/// they show.
pub trait Presenter {
    fn render_question(&mut self, _question: &QuestionView) {}

    fn render_matching(&mut self, _board: &MatchingBoard) {}

    fn update_health_display(&mut self, _health: HealthDisplay) {}

    fn show_screen(&mut self, _screen: Screen) {}

    /// A line for the battle log or a town message.
    fn log(&mut self, _message: &str) {}

    fn answer_feedback(&mut self, _correct: bool, _damage: u32) {}

    fn enemy_image(&mut self, _image: &str) {}

    fn battle_finished(&mut self, _outcome: BattleOutcome, _report: Option<&RewardReport>) {}
}

/// A presenter that shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
