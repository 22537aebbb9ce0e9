//! The battle state machine.
//!
//! ```text
//! start_quest ─► TurnActive ──submit──► Resolving ──NextTurn──┬─► TurnActive (turn flips)
//!                    ▲                                        ├─► GroupCleared ──NextMinion──► TurnActive
//!                    │                                        ├─► BossIntro ────BossIntro────► TurnActive
//!                    │                                        ├─► Finished(Victory)   (boss down)
//!                    │                                        └─► Finished(Defeat)
//!                    └── render failure ─► Failing ──ForceEnd──► Finished(Aborted)
//! ```
//!
//! All randomness comes from the engine's `GameRng`, and time only
//! passes when the host feeds a `Transition` back in, so a battle is fully
//! reproducible from a seed and a list of answers.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::event::{
    BattleEvent, BattleOutcome, PlayerAnswer, Prompt, QuestionView, Scheduled, Transition, Turn,
};
use super::session::{BattleSession, Difficulty, Phase};
use crate::answers::{locate, AnswerSet};
use crate::content::{Quest, Question, QuestionKind};
use crate::core::{BattleConfig, BattleError, GameRng, GameRngState, LookupError};
use crate::questions::{
    answer_pool, boss_pool, multiple_choice_options, next_group, score_matching,
    shuffled_questions, true_false_options, MatchingBoard,
};

/// Runs battles under one configuration.
///
/// The engine holds no battle state of its own; every operation takes the
/// `BattleSession` it acts on.
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    rng: GameRng,
}

impl BattleEngine {
    /// Create an engine.
    #[must_use]
    pub fn new(config: BattleConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Capture the RNG position, e.g. to replay a battle.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind the RNG to a captured position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Start a quest and its first turn.
    ///
    /// `player_max_health` is the character's health including armor.
    pub fn start_quest(
        &mut self,
        quest: &Quest,
        player_max_health: u32,
        difficulty: Difficulty,
    ) -> Result<(BattleSession, Vec<BattleEvent>), LookupError> {
        if quest.groups.is_empty() {
            return Err(LookupError::EmptyQuest(quest.id.clone()));
        }

        let mut quest = quest.clone();
        self.rng.shuffle(&mut quest.groups);

        let minion_max = self.config.minion_health.max_for(quest.groups[0].len());
        let enemy_image = self.pick_minion_image(&quest);
        let answer_pool = answer_pool(&quest);

        info!(quest_id = %quest.id, groups = quest.group_count(), "Quest started");

        let mut session = BattleSession {
            quest,
            group_index: 0,
            queue: Default::default(),
            boss_pool: Vec::new(),
            player_health: player_max_health,
            player_max: player_max_health,
            minion_health: minion_max,
            minion_max,
            turn: Turn::Player,
            is_boss: false,
            last_matching: None,
            enemy_image: enemy_image.clone(),
            phase: Phase::TurnActive,
            difficulty,
            answer_pool,
        };

        let mut out = vec![BattleEvent::EnemyImage(enemy_image)];
        self.start_turn(&mut session, &mut out);
        Ok((session, out))
    }

    /// Judge an answer for the current turn and apply its damage.
    ///
    /// Input is locked until the scheduled `NextTurn` runs; answers
    /// submitted in between are rejected and change nothing.
    pub fn submit(
        &mut self,
        session: &mut BattleSession,
        answer: PlayerAnswer,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        match session.phase {
            Phase::TurnActive => {}
            Phase::Finished(_) => return Err(BattleError::NoActiveBattle),
            phase => {
                warn!(?phase, "Answer rejected while controls are locked");
                return Err(BattleError::InputLocked);
            }
        }

        let matching_group = session.current_group().filter(|g| g.is_matching());

        let (correct, damage, message) = if let Some(group) = matching_group {
            let PlayerAnswer::Matching(selections) = answer else {
                return Err(BattleError::AnswerMismatch {
                    expected: "matching selections",
                });
            };
            let result = score_matching(&group.questions, &selections);
            session.last_matching = Some(result);

            let per_pair = self.config.matching_pair_damage;
            match session.turn {
                Turn::Player => {
                    let damage = per_pair * result.correct as u32;
                    let message = format!(
                        "You matched {} pairs and deal {} damage!",
                        result.correct, damage
                    );
                    (result.incorrect == 0, damage, message)
                }
                Turn::Enemy => {
                    let damage = per_pair * result.incorrect as u32;
                    let message = if damage == 0 {
                        "Successful defense! You matched every pair!".to_string()
                    } else {
                        format!(
                            "Defense failed! You missed {} pairs and take {} damage!",
                            result.incorrect, damage
                        )
                    };
                    (result.incorrect == 0, damage, message)
                }
            }
        } else {
            let question = session
                .queue
                .current()
                .ok_or_else(|| BattleError::MissingQuestionData("no current question".into()))?;
            let kind = question.kind.unwrap_or(session.difficulty.question_kind());
            let correct = judge(question, kind, &answer)?;

            match session.turn {
                Turn::Player if correct => {
                    let damage = self.config.player_hit_damage;
                    (true, damage, format!("Correct! You strike the minion for {damage} damage!"))
                }
                Turn::Player => (false, 0, "Incorrect! Your attack misses.".to_string()),
                Turn::Enemy if correct => {
                    (true, 0, "Successful defense! You block the attack!".to_string())
                }
                Turn::Enemy => {
                    let mut damage = self.config.enemy_hit_damage;
                    if session.is_boss {
                        damage *= self.config.boss_damage_multiplier;
                    }
                    (false, damage, format!("Defense failed! You take {damage} damage!"))
                }
            }
        };

        match session.turn {
            Turn::Player => session.minion_health = session.minion_health.saturating_sub(damage),
            Turn::Enemy => session.player_health = session.player_health.saturating_sub(damage),
        }
        session.phase = Phase::Resolving;

        debug!(turn = %session.turn, correct, damage, "Answer resolved");

        Ok(vec![
            BattleEvent::Feedback { correct, damage },
            BattleEvent::Log(message),
            BattleEvent::Health(session.health_display()),
            self.schedule(self.config.pacing.answer_delay(), Transition::NextTurn),
        ])
    }

    /// Run a scheduled transition.
    ///
    /// Transitions that do not match the session's phase are stale and
    /// ignored.
    pub fn fire(&mut self, session: &mut BattleSession, transition: Transition) -> Vec<BattleEvent> {
        let mut out = Vec::new();

        match (transition, session.phase) {
            (Transition::NextTurn, Phase::Resolving) => {
                if session.minion_health == 0 {
                    self.clear_group(session, &mut out);
                } else if session.player_health == 0 {
                    self.finish(session, BattleOutcome::Defeat, &mut out);
                } else {
                    session.queue.advance();
                    session.turn = session.turn.flip();
                    self.start_turn(session, &mut out);
                }
            }
            (Transition::NextMinion, Phase::GroupCleared) => {
                let question_count = session.current_group().map_or(0, |g| g.len());
                session.minion_max = self.config.minion_health.max_for(question_count);
                session.minion_health = session.minion_max;
                session.enemy_image = self.pick_minion_image(&session.quest);
                session.queue.clear();
                out.push(BattleEvent::EnemyImage(session.enemy_image.clone()));
                self.start_turn(session, &mut out);
            }
            (Transition::BossIntro, Phase::BossIntro) => {
                self.start_boss(session, &mut out);
                self.start_turn(session, &mut out);
            }
            (Transition::ForceEnd, Phase::Failing) => {
                self.finish(session, BattleOutcome::Aborted, &mut out);
            }
            (transition, phase) => {
                warn!(?transition, ?phase, "Ignoring stale transition");
            }
        }

        out
    }

    /// Fill the queue if needed and put the current question on screen.
    fn start_turn(&mut self, session: &mut BattleSession, out: &mut Vec<BattleEvent>) {
        if session.player_health == 0 {
            self.finish(session, BattleOutcome::Defeat, out);
            return;
        }

        if session.queue.is_empty() {
            if session.is_boss {
                session.queue.fill(session.boss_pool.clone());
            } else if let Some(group) = next_group(&session.quest, session.group_index) {
                let questions = shuffled_questions(group, &mut self.rng);
                session.queue.fill(questions);
            }
        }

        let Some(question) = session.queue.current().cloned() else {
            warn!(group = session.group_index, "No question data at turn start");
            session.queue.rewind();
            session.phase = Phase::Stalled;
            return;
        };

        out.push(BattleEvent::Health(session.health_display()));
        out.push(BattleEvent::Log(turn_banner(session.turn, session.is_boss).to_string()));

        let rendered = match session.current_group().filter(|g| g.is_matching()) {
            Some(group) => MatchingBoard::build(group, &mut self.rng).map(BattleEvent::RenderMatching),
            None => self.question_view(session, &question).map(BattleEvent::RenderQuestion),
        };

        match rendered {
            Ok(event) => {
                out.push(event);
                session.phase = Phase::TurnActive;
            }
            Err(err) => {
                error!(%err, "Error rendering question");
                out.push(BattleEvent::Log("An error occurred. Missing question data.".to_string()));
                session.phase = Phase::Failing;
                out.push(self.schedule(self.config.pacing.error_delay(), Transition::ForceEnd));
            }
        }
    }

    fn question_view(
        &mut self,
        session: &BattleSession,
        question: &Question,
    ) -> Result<QuestionView, BattleError> {
        let kind = question.kind.unwrap_or(session.difficulty.question_kind());
        let missing = |what: &str| {
            BattleError::MissingQuestionData(format!("{what} for '{}'", question.prompt))
        };

        let prompt = match kind {
            QuestionKind::ImageHotspot => {
                let image_url = question.image_url.clone().ok_or_else(|| missing("no image"))?;
                if question.hotspots.is_empty() {
                    return Err(missing("no hotspots"));
                }
                Prompt::Hotspot { image_url }
            }
            QuestionKind::Unknown => return Err(missing("unsupported question type")),
            _ if question.answers.is_empty() => return Err(missing("no answers")),
            QuestionKind::TrueFalse => Prompt::TrueFalse {
                options: true_false_options(),
            },
            QuestionKind::Written => Prompt::Written,
            QuestionKind::MultipleChoice => Prompt::Choice {
                options: multiple_choice_options(
                    question,
                    &session.answer_pool,
                    self.config.answer_options,
                    &mut self.rng,
                ),
            },
        };

        Ok(QuestionView {
            text: question.prompt.clone(),
            kind,
            prompt,
        })
    }

    /// The minion on screen is down.
    fn clear_group(&mut self, session: &mut BattleSession, out: &mut Vec<BattleEvent>) {
        out.push(BattleEvent::Log("Minion defeated!".to_string()));
        session.group_index += 1;
        session.queue.rewind();

        let groups_left = session.group_index < session.quest.group_count();
        if groups_left && !session.is_boss {
            debug!(group = session.group_index, "Group cleared");
            session.phase = Phase::GroupCleared;
            out.push(self.schedule(self.config.pacing.group_delay(), Transition::NextMinion));
        } else if !session.is_boss {
            debug!("All groups cleared, boss incoming");
            session.phase = Phase::BossIntro;
            out.push(self.schedule(self.config.pacing.group_delay(), Transition::BossIntro));
        } else {
            self.finish(session, BattleOutcome::Victory, out);
        }
    }

    fn start_boss(&mut self, session: &mut BattleSession, out: &mut Vec<BattleEvent>) {
        session.is_boss = true;
        session.minion_max = self.config.boss_health;
        session.minion_health = self.config.boss_health;
        session.enemy_image = session.quest.boss_image.clone();
        session.boss_pool = boss_pool(&session.quest, &mut self.rng);
        session.queue.clear();
        session.queue.rewind();

        info!(pool = session.boss_pool.len(), "Boss battle started");

        out.push(BattleEvent::EnemyImage(session.enemy_image.clone()));
        out.push(BattleEvent::Log(
            "The final boss appears! Prepare for the ultimate challenge!".to_string(),
        ));
    }

    fn finish(&mut self, session: &mut BattleSession, outcome: BattleOutcome, out: &mut Vec<BattleEvent>) {
        session.phase = Phase::Finished(outcome);
        info!(?outcome, quest_id = %session.quest.id, "Battle finished");
        out.push(BattleEvent::Finished(outcome));
    }

    fn pick_minion_image(&mut self, quest: &Quest) -> String {
        self.rng.choose(&quest.minion_images).cloned().unwrap_or_default()
    }

    fn schedule(&self, delay: Duration, transition: Transition) -> BattleEvent {
        BattleEvent::Schedule(Scheduled { delay, transition })
    }
}

/// Check an answer against a standard question.
fn judge(question: &Question, kind: QuestionKind, answer: &PlayerAnswer) -> Result<bool, BattleError> {
    match (kind, answer) {
        (QuestionKind::ImageHotspot, PlayerAnswer::Click(point)) => {
            Ok(locate(&question.hotspots, *point).is_some_and(|hotspot| {
                hotspot
                    .answers
                    .first()
                    .is_some_and(|first| AnswerSet::new(&hotspot.answers).accepts(first))
            }))
        }
        (QuestionKind::ImageHotspot, _) => Err(BattleError::AnswerMismatch {
            expected: "a click on the image",
        }),
        (_, PlayerAnswer::Text(text)) => Ok(AnswerSet::new(&question.answers).accepts(text)),
        _ => Err(BattleError::AnswerMismatch { expected: "a text answer" }),
    }
}

fn turn_banner(turn: Turn, is_boss: bool) -> &'static str {
    match (turn, is_boss) {
        (Turn::Player, _) => "Your turn to attack! Answer the question to deal damage.",
        (Turn::Enemy, false) => "The minion is attacking! Answer correctly to defend.",
        (Turn::Enemy, true) => "The boss is attacking! Answer correctly to defend.",
    }
}
