//! The game host.
//!
//! `Game` owns the hero, the content, the blacksmith, and at most one
//! battle. Input arrives as `Command`s; output is queued until `flush`
//! hands it to a `Presenter`. Scheduled transitions wait in a
//! `TimerQueue` until `advance` moves the clock past them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::presenter::Presenter;
use super::scheduler::TimerQueue;
use super::tavern::{default_rivals, leaderboard, LeaderboardEntry, Ranked};
use crate::battle::{
    BattleEngine, BattleEvent, BattleOutcome, BattleSession, Difficulty, Phase, PlayerAnswer,
    Transition,
};
use crate::character::{settle, ArmorItem, Blacksmith, Character, CharacterStore, RewardReport};
use crate::content::ContentLibrary;
use crate::core::{BattleConfig, BattleError, GameError, GameRng, ShopError};

/// Screens of the town and the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Village,
    NoticeBoard,
    Tavern,
    Blacksmith,
    Battle,
}

/// Player input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Navigate(Screen),
    SelectDifficulty(Difficulty),
    StartQuest { unit_id: String, quest_id: String },
    Answer(PlayerAnswer),
    /// Buy an armor piece by name.
    Purchase(String),
    /// Run a transition now instead of waiting for its timer.
    Fire(Transition),
}

/// Output waiting for the next `flush`.
#[derive(Clone, Debug, PartialEq)]
enum Output {
    Battle(BattleEvent),
    Screen(Screen),
    Message(String),
    Finished(BattleOutcome, RewardReport),
}

/// The whole game.
pub struct Game<S: CharacterStore> {
    config: BattleConfig,
    engine: BattleEngine,
    rng: GameRng,
    library: ContentLibrary,
    store: S,
    hero: Character,
    blacksmith: Blacksmith,
    rivals: Vec<LeaderboardEntry>,
    screen: Screen,
    difficulty: Difficulty,
    session: Option<BattleSession>,
    timers: TimerQueue,
    last_report: Option<RewardReport>,
    pending: Vec<Output>,
}

impl<S: CharacterStore> Game<S> {
    /// Create a game, loading the hero from `store`.
    ///
    /// A missing or unreadable save starts a new hero.
    pub fn new(config: BattleConfig, library: ContentLibrary, store: S, seed: u64) -> Self {
        let hero = match store.load() {
            Ok(Some(hero)) => {
                info!(level = hero.level, gold = hero.gold, "Hero loaded");
                hero
            }
            Ok(None) => Character::new(),
            Err(err) => {
                warn!(%err, "Could not load hero, starting fresh");
                Character::new()
            }
        };

        let mut rng = GameRng::new(seed);
        let engine = BattleEngine::new(config.clone(), rng.fork());

        Self {
            config,
            engine,
            rng,
            library,
            store,
            hero,
            blacksmith: Blacksmith::new(),
            rivals: default_rivals(),
            screen: Screen::Village,
            difficulty: Difficulty::default(),
            session: None,
            timers: TimerQueue::new(),
            last_report: None,
            pending: vec![Output::Screen(Screen::Village)],
        }
    }

    /// Handle one command.
    ///
    /// Errors are also reported to the presenter as a message. None of them
    /// change game state.
    pub fn dispatch(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Navigate(screen) => {
                self.navigate(screen);
                Ok(())
            }
            Command::SelectDifficulty(difficulty) => {
                self.difficulty = difficulty;
                Ok(())
            }
            Command::StartQuest { unit_id, quest_id } => self.on_quest_selected(&unit_id, &quest_id),
            Command::Answer(answer) => self.on_answer(answer),
            Command::Purchase(item) => self.purchase(&item),
            Command::Fire(transition) => {
                self.fire(transition);
                Ok(())
            }
        }
    }

    /// Start a quest from the notice board.
    pub fn on_quest_selected(&mut self, unit_id: &str, quest_id: &str) -> Result<(), GameError> {
        if self.session.is_some() {
            warn!(unit_id, quest_id, "Quest selected during a battle");
            return Err(BattleError::InputLocked.into());
        }

        let started = self
            .library
            .find_quest(unit_id, quest_id)
            .and_then(|quest| self.engine.start_quest(quest, self.hero.max_health(), self.difficulty));

        let (session, events) = match started {
            Ok(started) => started,
            Err(err) => {
                error!(%err, unit_id, quest_id, "Could not start quest");
                self.pending.push(Output::Message(err.to_string()));
                return Err(err.into());
            }
        };

        self.timers.clear();
        self.session = Some(session);
        self.set_screen(Screen::Battle);
        self.apply(events);
        Ok(())
    }

    /// Submit an answer for the current turn.
    pub fn on_answer(&mut self, answer: PlayerAnswer) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(BattleError::NoActiveBattle)?;
        let events = self.engine.submit(session, answer)?;
        self.apply(events);
        Ok(())
    }

    /// Run a transition.
    ///
    /// `ReturnToTown` only leaves a battle that is over; it also drops any
    /// timers the battle left behind.
    pub fn fire(&mut self, transition: Transition) {
        if transition == Transition::ReturnToTown {
            match self.session.as_ref() {
                Some(session) if battle_over(session) => {
                    self.session = None;
                    self.timers.clear();
                    self.set_screen(Screen::Village);
                }
                Some(session) => {
                    warn!(phase = ?session.phase(), "Cannot return to town mid-battle");
                }
                None => warn!("Return to town with no battle in progress"),
            }
            return;
        }

        match self.session.as_mut() {
            Some(session) => {
                let events = self.engine.fire(session, transition);
                self.apply(events);
            }
            None => warn!(?transition, "Transition with no battle in progress"),
        }
    }

    /// Move the clock forward, running every transition that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut step = elapsed;
        loop {
            let due = self.timers.advance(step);
            if due.is_empty() {
                break;
            }
            for transition in due {
                self.fire(transition);
            }
            step = Duration::ZERO;
        }
    }

    /// Advance to the next pending timer and run it.
    ///
    /// Returns false if nothing was scheduled.
    pub fn run_next_timer(&mut self) -> bool {
        match self.timers.next_due() {
            Some(wait) => {
                self.advance(wait);
                true
            }
            None => false,
        }
    }

    /// Hand every queued output to a presenter, in order.
    pub fn flush<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for output in self.pending.drain(..) {
            match output {
                Output::Screen(screen) => presenter.show_screen(screen),
                Output::Message(message) => presenter.log(&message),
                Output::Finished(outcome, report) => presenter.battle_finished(outcome, Some(&report)),
                Output::Battle(event) => match event {
                    BattleEvent::RenderQuestion(view) => presenter.render_question(&view),
                    BattleEvent::RenderMatching(board) => presenter.render_matching(&board),
                    BattleEvent::Health(health) => presenter.update_health_display(health),
                    BattleEvent::Log(line) => presenter.log(&line),
                    BattleEvent::EnemyImage(image) => presenter.enemy_image(&image),
                    BattleEvent::Feedback { correct, damage } => presenter.answer_feedback(correct, damage),
                    BattleEvent::Finished(outcome) => presenter.battle_finished(outcome, None),
                    BattleEvent::Schedule(_) => {}
                },
            }
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if self.session.is_some() {
            warn!(?screen, "Cannot leave a battle in progress");
            return;
        }
        if screen == Screen::Battle {
            warn!("Battles start from the notice board");
            return;
        }
        if screen == Screen::Blacksmith {
            self.blacksmith.stock(&mut self.rng);
        }
        self.set_screen(screen);
    }

    fn purchase(&mut self, item: &str) -> Result<(), GameError> {
        if self.screen != Screen::Blacksmith {
            warn!(item, screen = ?self.screen, "Purchase away from the blacksmith");
            return Err(ShopError::NotAtBlacksmith.into());
        }
        match self.blacksmith.purchase(&mut self.hero, item) {
            Ok(receipt) => {
                self.pending.push(Output::Message(format!(
                    "You purchased and equipped the {}!",
                    receipt.item.name
                )));
                self.save();
                Ok(())
            }
            Err(err) => {
                warn!(%err, "Purchase refused");
                self.pending.push(Output::Message(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Queue engine output, starting timers and settling finished battles.
    fn apply(&mut self, events: Vec<BattleEvent>) {
        for event in events {
            match event {
                BattleEvent::Schedule(scheduled) => {
                    self.timers.schedule(scheduled.delay, scheduled.transition);
                }
                BattleEvent::Finished(outcome) => self.finish_battle(outcome),
                event => self.pending.push(Output::Battle(event)),
            }
        }

        if self.session.as_ref().is_some_and(|s| s.phase() == Phase::Stalled) {
            warn!("Battle stalled, returning to town without rewards");
            self.pending.push(Output::Message(
                "The enemies have nothing left to ask. Returning to town.".to_string(),
            ));
            self.timers.schedule(self.config.pacing.town_delay(), Transition::ReturnToTown);
        }
    }

    fn finish_battle(&mut self, outcome: BattleOutcome) {
        let group_count = self.session.as_ref().map_or(0, |s| s.quest().group_count());
        let report = settle(
            &mut self.hero,
            self.config.rewards,
            outcome,
            group_count,
            self.config.base_health,
        );
        if outcome.is_victory() {
            self.blacksmith.clear();
        }
        for level in (report.level - report.levels_gained + 1)..=report.level {
            self.pending.push(Output::Message(format!("You have leveled up to level {level}!")));
        }
        self.save();

        info!(?outcome, exp = report.exp, gold = report.gold, "Rewards settled");

        self.pending.push(Output::Message(report.message()));
        self.pending.push(Output::Finished(outcome, report));
        self.last_report = Some(report);
        self.timers.schedule(self.config.pacing.town_delay(), Transition::ReturnToTown);
    }

    fn save(&mut self) {
        if let Err(err) = self.store.save(&self.hero) {
            error!(%err, "Failed to save hero");
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.pending.push(Output::Screen(screen));
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn hero(&self) -> &Character {
        &self.hero
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The battle in progress, if any.
    #[must_use]
    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Items currently on offer at the blacksmith.
    #[must_use]
    pub fn blacksmith_stock(&self) -> &[ArmorItem] {
        self.blacksmith.current_stock()
    }

    /// The tavern leaderboard.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<Ranked> {
        leaderboard(&self.hero, &self.rivals)
    }

    /// Rewards from the most recent battle.
    #[must_use]
    pub fn last_report(&self) -> Option<&RewardReport> {
        self.last_report.as_ref()
    }

    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }
}

/// A finished or stalled battle can be left.
fn battle_over(session: &BattleSession) -> bool {
    session.outcome().is_some() || session.phase() == Phase::Stalled
}
