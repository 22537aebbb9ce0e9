//! The tavern leaderboard.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Name shown for the player's own hero.
pub const HERO_NAME: &str = "Your Hero";

/// One adventurer on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub exp: u32,
    pub level: u32,
    pub helmet_armor: String,
    pub upper_armor: String,
    pub lower_armor: String,
    pub weapon: String,
}

impl LeaderboardEntry {
    /// The player's hero as a board entry.
    #[must_use]
    pub fn hero(hero: &Character) -> Self {
        Self {
            name: HERO_NAME.to_string(),
            exp: hero.exp,
            level: hero.level,
            helmet_armor: hero.armor.head.clone(),
            upper_armor: hero.armor.upper_body.clone(),
            lower_armor: hero.armor.lower_body.clone(),
            weapon: hero.weapon.clone(),
        }
    }

    fn rival(name: &str, exp: u32, level: u32, gear: [&str; 4]) -> Self {
        let [helmet, upper, lower, weapon] = gear;
        Self {
            name: name.to_string(),
            exp,
            level,
            helmet_armor: helmet.to_string(),
            upper_armor: upper.to_string(),
            lower_armor: lower.to_string(),
            weapon: weapon.to_string(),
        }
    }
}

/// The regulars the hero competes with.
#[must_use]
pub fn default_rivals() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::rival(
            "Kaelen the Wise",
            1250,
            12,
            ["Steel Helmet", "Leather Cuirass", "Leather Pants", "Elvish Bow"],
        ),
        LeaderboardEntry::rival(
            "Grom the Strong",
            250,
            3,
            ["Mail Hood", "Iron Chestplate", "Iron Legguards", "Steel Warhammer"],
        ),
        LeaderboardEntry::rival(
            "Lyra the Swift",
            980,
            9,
            ["Obsidian Helm", "Dragon Hide Tunic", "Dragon Hide Pants", "Steel Daggers"],
        ),
    ]
}

/// A ranked row. Ranks start at 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

/// Rank the hero among rivals by exp, highest first.
///
/// Ties keep the hero ahead of rivals.
#[must_use]
pub fn leaderboard(hero: &Character, rivals: &[LeaderboardEntry]) -> Vec<Ranked> {
    let mut entries = Vec::with_capacity(rivals.len() + 1);
    entries.push(LeaderboardEntry::hero(hero));
    entries.extend_from_slice(rivals);
    entries.sort_by(|a, b| b.exp.cmp(&a.exp));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Ranked { rank: i + 1, entry })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hero_ranks_last() {
        let board = leaderboard(&Character::new(), &default_rivals());
        let names: Vec<_> = board.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["Kaelen the Wise", "Lyra the Swift", "Grom the Strong", "Your Hero"]);
        assert_eq!(board[3].rank, 4);
    }

    #[test]
    fn test_hero_climbs() {
        let mut hero = Character::new();
        hero.exp = 1000;
        let board = leaderboard(&hero, &default_rivals());
        assert_eq!(board[1].entry.name, HERO_NAME);
        assert_eq!(board[1].rank, 2);
    }

    #[test]
    fn test_ties_keep_hero_first() {
        let mut hero = Character::new();
        hero.exp = 250;
        let board = leaderboard(&hero, &default_rivals());
        assert_eq!(board[2].entry.name, HERO_NAME);
        assert_eq!(board[3].entry.name, "Grom the Strong");
    }
}
