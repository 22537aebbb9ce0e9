//! Battle and reward tuning.
//!
//! Games configure the engine with a `BattleConfig`:
//! - Damage values for each side of a turn
//! - How minion health is derived from a group
//! - Which reward formula applies when a battle ends
//! - Pacing delays the host uses between transitions
//!
//! Defaults reproduce the group-scaled rules; the flat-reward and
//! fixed-health variants are opt-in.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How a minion's max health is derived from its group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MinionHealth {
    /// `per_question` health for every question in the group.
    PerQuestion { per_question: u32 },
    /// The same health regardless of group size.
    Fixed { health: u32 },
}

impl MinionHealth {
    /// Max health of a minion guarding `question_count` questions.
    #[must_use]
    pub fn max_for(self, question_count: usize) -> u32 {
        match self {
            MinionHealth::PerQuestion { per_question } => {
                per_question.saturating_mul(question_count as u32)
            }
            MinionHealth::Fixed { health } => health,
        }
    }
}

impl Default for MinionHealth {
    fn default() -> Self {
        MinionHealth::PerQuestion { per_question: 10 }
    }
}

/// Reward formula applied when a battle ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RewardFormula {
    /// Rewards scale with the number of groups in the quest.
    /// A loss pays `loss_percent` of the win reward.
    GroupScaled {
        exp_per_group: u32,
        gold_per_group: u32,
        loss_percent: u32,
    },
    /// Fixed rewards regardless of quest size.
    Flat {
        win_exp: u32,
        win_gold: u32,
        loss_exp: u32,
        loss_gold: u32,
    },
}

impl Default for RewardFormula {
    fn default() -> Self {
        RewardFormula::GroupScaled {
            exp_per_group: 10,
            gold_per_group: 5,
            loss_percent: 20,
        }
    }
}

impl RewardFormula {
    /// The flat variant with its usual numbers.
    #[must_use]
    pub fn flat() -> Self {
        RewardFormula::Flat {
            win_exp: 50,
            win_gold: 20,
            loss_exp: 10,
            loss_gold: 0,
        }
    }
}

/// Delays between transitions, in milliseconds.
///
/// These are UI pacing only. The engine emits them; the host schedules them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Answer feedback before the next turn.
    pub answer_delay_ms: u64,
    /// Minion defeated before the next minion or the boss appears.
    pub group_delay_ms: u64,
    /// Battle summary before returning to the village.
    pub town_delay_ms: u64,
    /// Error message before a broken battle is force-ended.
    pub error_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            answer_delay_ms: 1000,
            group_delay_ms: 1500,
            town_delay_ms: 3000,
            error_delay_ms: 3000,
        }
    }
}

impl Pacing {
    #[must_use]
    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.answer_delay_ms)
    }

    #[must_use]
    pub fn group_delay(&self) -> Duration {
        Duration::from_millis(self.group_delay_ms)
    }

    #[must_use]
    pub fn town_delay(&self) -> Duration {
        Duration::from_millis(self.town_delay_ms)
    }

    #[must_use]
    pub fn error_delay(&self) -> Duration {
        Duration::from_millis(self.error_delay_ms)
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Character health before armor.
    pub base_health: u32,

    /// Damage dealt by a correct answer on the player's turn.
    pub player_hit_damage: u32,

    /// Damage taken from a wrong answer on the enemy's turn.
    pub enemy_hit_damage: u32,

    /// Multiplier on enemy damage during the boss fight.
    pub boss_damage_multiplier: u32,

    /// Damage per pair in a matching round (correct pairs on attack,
    /// incorrect pairs on defense).
    pub matching_pair_damage: u32,

    /// Boss max health.
    pub boss_health: u32,

    /// Minion max health rule.
    pub minion_health: MinionHealth,

    /// Target number of multiple-choice options.
    pub answer_options: usize,

    /// End-of-battle rewards.
    pub rewards: RewardFormula,

    /// Transition delays.
    pub pacing: Pacing,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            base_health: 100,
            player_hit_damage: 15,
            enemy_hit_damage: 10,
            boss_damage_multiplier: 2,
            matching_pair_damage: 10,
            boss_health: 150,
            minion_health: MinionHealth::default(),
            answer_options: 4,
            rewards: RewardFormula::default(),
            pacing: Pacing::default(),
        }
    }
}

impl BattleConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Use a different minion health rule.
    #[must_use]
    pub fn with_minion_health(mut self, rule: MinionHealth) -> Self {
        self.minion_health = rule;
        self
    }

    /// Use a different reward formula.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardFormula) -> Self {
        self.rewards = rewards;
        self
    }

    /// Use different pacing delays.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Use a different boss health.
    #[must_use]
    pub fn with_boss_health(mut self, health: u32) -> Self {
        self.boss_health = health;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minion_health_rules() {
        assert_eq!(MinionHealth::default().max_for(5), 50);
        assert_eq!(MinionHealth::default().max_for(0), 0);
        assert_eq!(MinionHealth::Fixed { health: 100 }.max_for(5), 100);
    }

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.base_health, 100);
        assert_eq!(config.player_hit_damage, 15);
        assert_eq!(config.enemy_hit_damage, 10);
        assert_eq!(config.boss_health, 150);
        assert_eq!(config.answer_options, 4);
        assert_eq!(config.pacing.answer_delay(), Duration::from_millis(1000));
        assert_eq!(config.pacing.group_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::default()
            .with_minion_health(MinionHealth::Fixed { health: 100 })
            .with_rewards(RewardFormula::flat())
            .with_boss_health(200);

        assert_eq!(config.minion_health, MinionHealth::Fixed { health: 100 });
        assert_eq!(config.boss_health, 200);
        assert!(matches!(config.rewards, RewardFormula::Flat { win_exp: 50, .. }));
    }

    #[test]
    fn test_from_json_partial() {
        let config = BattleConfig::from_json_str(
            r#"{ "boss_health": 90, "minion_health": { "mode": "fixed", "health": 100 } }"#,
        )
        .unwrap();

        assert_eq!(config.boss_health, 90);
        assert_eq!(config.minion_health.max_for(3), 100);
        assert_eq!(config.player_hit_damage, 15);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(BattleConfig::from_json_str("{ not json").is_err());
    }
}
