//! End-of-battle rewards and leveling.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::player::Character;
use crate::battle::BattleOutcome;
use crate::core::RewardFormula;

/// Exp needed to reach `level` from the level below it.
#[must_use]
pub fn exp_required_for_level(level: u32) -> u32 {
    50 * level * level
}

/// Exp and gold granted for an outcome.
#[must_use]
pub fn reward_for(formula: RewardFormula, outcome: BattleOutcome, group_count: usize) -> (u32, u32) {
    let groups = group_count as u32;
    match formula {
        RewardFormula::GroupScaled { exp_per_group, gold_per_group, loss_percent } => {
            let exp = exp_per_group * groups;
            let gold = gold_per_group * groups;
            if outcome.is_victory() {
                (exp, gold)
            } else {
                (exp * loss_percent / 100, gold * loss_percent / 100)
            }
        }
        RewardFormula::Flat { win_exp, win_gold, loss_exp, loss_gold } => {
            if outcome.is_victory() {
                (win_exp, win_gold)
            } else {
                (loss_exp, loss_gold)
            }
        }
    }
}

/// Summary of a settled battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardReport {
    pub outcome: BattleOutcome,
    pub exp: u32,
    pub gold: u32,
    pub levels_gained: u32,
    /// Level after any level-ups.
    pub level: u32,
}

impl RewardReport {
    /// Line for the battle log.
    #[must_use]
    pub fn message(&self) -> String {
        let opening = if self.outcome.is_victory() {
            "You have defeated all the enemies! Quest complete!"
        } else {
            "You have been defeated... returning to town."
        };
        format!("{opening} You gain {} EXP and {} Gold.", self.exp, self.gold)
    }
}

/// Apply a battle's rewards to the hero.
///
/// Health is restored to `base_health` whatever the outcome. Leftover exp
/// carries into the next level, and several levels can be gained at once.
pub fn settle(
    hero: &mut Character,
    formula: RewardFormula,
    outcome: BattleOutcome,
    group_count: usize,
    base_health: u32,
) -> RewardReport {
    let (exp, gold) = reward_for(formula, outcome, group_count);
    hero.exp += exp;
    hero.gold += gold;
    hero.health = base_health;

    let mut levels_gained = 0;
    loop {
        let required = exp_required_for_level(hero.level + 1);
        if hero.exp < required {
            break;
        }
        hero.exp -= required;
        hero.level += 1;
        levels_gained += 1;
        info!(level = hero.level, "Level up");
    }

    RewardReport {
        outcome,
        exp,
        gold,
        levels_gained,
        level: hero.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_curve() {
        assert_eq!(exp_required_for_level(2), 200);
        assert_eq!(exp_required_for_level(3), 450);
    }

    #[test]
    fn test_group_scaled_rewards() {
        let formula = RewardFormula::default();
        assert_eq!(reward_for(formula, BattleOutcome::Victory, 3), (30, 15));
        assert_eq!(reward_for(formula, BattleOutcome::Defeat, 3), (6, 3));
        assert_eq!(reward_for(formula, BattleOutcome::Aborted, 5), (10, 5));
    }

    #[test]
    fn test_flat_rewards() {
        let formula = RewardFormula::flat();
        assert_eq!(reward_for(formula, BattleOutcome::Victory, 7), (50, 20));
        assert_eq!(reward_for(formula, BattleOutcome::Defeat, 7), (10, 0));
    }

    #[test]
    fn test_settle_levels_up_with_carry_over() {
        let mut hero = Character::new();
        hero.exp = 220;
        hero.health = 40;

        let report = settle(&mut hero, RewardFormula::default(), BattleOutcome::Victory, 3, 100);
        assert_eq!(report.levels_gained, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.exp, 50);
        assert_eq!(hero.gold, 15);
        assert_eq!(hero.health, 100);
    }

    #[test]
    fn test_settle_multiple_levels() {
        let mut hero = Character::new();
        hero.exp = 640;

        let report = settle(&mut hero, RewardFormula::flat(), BattleOutcome::Victory, 1, 100);
        // 690 = 200 (to level 2) + 450 (to level 3) + 40
        assert_eq!(report.levels_gained, 2);
        assert_eq!(report.level, 3);
        assert_eq!(hero.exp, 40);
    }

    #[test]
    fn test_report_message() {
        let report = RewardReport {
            outcome: BattleOutcome::Victory,
            exp: 30,
            gold: 15,
            levels_gained: 0,
            level: 1,
        };
        assert!(report.message().ends_with("You gain 30 EXP and 15 Gold."));
    }
}
