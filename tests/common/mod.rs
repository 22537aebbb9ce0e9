//! Shared fixtures for integration tests.

#![allow(dead_code)]

use anatomy_quest::answers::Point;
use anatomy_quest::battle::{BattleOutcome, BattleSession, HealthDisplay, PlayerAnswer, QuestionView};
use anatomy_quest::character::RewardReport;
use anatomy_quest::content::{ContentLibrary, Quest, QuestionKind, Region};
use anatomy_quest::questions::{MatchSelection, MatchingBoard};
use anatomy_quest::town::{Presenter, Screen};

/// One unit with a mixed quest, a single-group quest, and a broken quest.
pub const SKELETON_UNIT: &str = r#"{
    "unit_id": "u2c5",
    "quests": [
        {
            "quest_id": "skeleton",
            "quest_title": "The Skeletal System",
            "quest_description": "Clear the crypt.",
            "minion_images": ["skeleton.png", "bone-rat.png"],
            "boss_image": "lich.png",
            "groups": [
                {
                    "type": "standard",
                    "questions": [
                        { "question": "Longest bone in the body", "type": "written", "answers": ["Femur"] },
                        { "question": "Kneecap", "type": "multiple-choice", "answers": ["Patella"] },
                        { "question": "The skull protects the brain", "type": "true/false", "answers": ["True"] },
                        { "question": "Collarbone", "answers": ["Clavicle"] },
                        {
                            "question": "Click the sternum",
                            "type": "image-hotspot",
                            "image_url": "thorax.png",
                            "hotspots": [
                                { "x": 45, "y": 30, "width": 10, "height": 30, "answers": ["Sternum"] }
                            ]
                        }
                    ]
                },
                {
                    "type": "matching",
                    "questions": [
                        { "question": "Upper arm bone", "answers": ["Humerus"] },
                        { "question": "Lateral forearm bone", "answers": ["Radius"] },
                        { "question": "Medial forearm bone", "answers": ["Ulna"] }
                    ]
                }
            ]
        },
        {
            "quest_id": "arm",
            "quest_title": "Bones of the Arm",
            "minion_images": ["skeleton.png"],
            "boss_image": "lich.png",
            "groups": [
                {
                    "questions": [
                        { "question": "Upper arm bone", "type": "written", "answers": ["Humerus"] },
                        { "question": "Lateral forearm bone", "type": "written", "answers": ["Radius"] },
                        { "question": "Medial forearm bone", "type": "written", "answers": ["Ulna"] },
                        { "question": "Wrist bones", "type": "written", "answers": ["Carpals"] },
                        { "question": "Finger bones", "type": "written", "answers": ["Phalanges"] }
                    ]
                }
            ]
        },
        {
            "quest_id": "broken",
            "quest_title": "Missing Pages",
            "minion_images": ["skeleton.png"],
            "boss_image": "lich.png",
            "groups": [
                { "questions": [ { "question": "What is this?", "type": "written", "answers": [] } ] }
            ]
        }
    ]
}"#;

pub fn library() -> ContentLibrary {
    ContentLibrary::from_json_str("Unit2Chapter5.json", SKELETON_UNIT).unwrap()
}

pub fn quest(id: &str) -> Quest {
    library().find_quest("u2c5", id).unwrap().clone()
}

/// An answer that is judged correct for the current turn.
pub fn correct_answer(session: &BattleSession) -> PlayerAnswer {
    if let Some(group) = session.current_group().filter(|g| g.is_matching()) {
        return PlayerAnswer::Matching(
            group
                .questions
                .iter()
                .map(|q| MatchSelection::new(q.answers[0].clone(), Some(q.prompt.as_str())))
                .collect(),
        );
    }

    let question = session.current_question().unwrap();
    if question.kind == Some(QuestionKind::ImageHotspot) {
        let point = match question.hotspots[0].region().unwrap() {
            Region::Circle { cx, cy, .. } => Point::new(cx, cy),
            Region::Rect { x, y, width, height } => Point::new(x + width / 2.0, y + height / 2.0),
        };
        return PlayerAnswer::Click(point);
    }
    PlayerAnswer::text(question.answers[0].clone())
}

/// An answer that is judged wrong for the current turn.
pub fn wrong_answer(session: &BattleSession) -> PlayerAnswer {
    if let Some(group) = session.current_group().filter(|g| g.is_matching()) {
        return PlayerAnswer::Matching(
            group
                .questions
                .iter()
                .map(|q| MatchSelection::new(q.answers[0].clone(), None))
                .collect(),
        );
    }

    let question = session.current_question().unwrap();
    if question.kind == Some(QuestionKind::ImageHotspot) {
        return PlayerAnswer::Click(Point::new(1.0, 1.0));
    }
    PlayerAnswer::text("not even close")
}

/// Everything a presenter was asked to show.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub questions: Vec<QuestionView>,
    pub boards: Vec<MatchingBoard>,
    pub health: Vec<HealthDisplay>,
    pub screens: Vec<Screen>,
    pub log: Vec<String>,
    pub feedback: Vec<(bool, u32)>,
    pub enemy_images: Vec<String>,
    pub finished: Vec<(BattleOutcome, Option<RewardReport>)>,
}

impl Presenter for RecordingPresenter {
    fn render_question(&mut self, question: &QuestionView) {
        self.questions.push(question.clone());
    }

    fn render_matching(&mut self, board: &MatchingBoard) {
        self.boards.push(board.clone());
    }

    fn update_health_display(&mut self, health: HealthDisplay) {
        self.health.push(health);
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    fn log(&mut self, message: &str) {
        self.log.push(message.to_string());
    }

    fn answer_feedback(&mut self, correct: bool, damage: u32) {
        self.feedback.push((correct, damage));
    }

    fn enemy_image(&mut self, image: &str) {
        self.enemy_images.push(image.to_string());
    }

    fn battle_finished(&mut self, outcome: BattleOutcome, report: Option<&RewardReport>) {
        self.finished.push((outcome, report.copied()));
    }
}
