//! Error types.
//!
//! Every failure is contained to the current screen or battle; none of
//! these end the process.

use thiserror::Error;

/// Failure to load quest content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to load {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A unit or quest id that does not resolve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Game data has not been loaded yet")]
    NoContent,

    #[error("Quest not found: {quest_id} in unit {unit_id}")]
    QuestNotFound { unit_id: String, quest_id: String },

    #[error("Quest {0} has no question groups")]
    EmptyQuest(String),
}

/// Rejected battle input or broken battle data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Answer controls are locked")]
    InputLocked,

    #[error("Answer does not fit the current question: expected {expected}")]
    AnswerMismatch { expected: &'static str },

    #[error("Missing question data: {0}")]
    MissingQuestionData(String),

    #[error("No battle is in progress")]
    NoActiveBattle,
}

/// Blacksmith purchase failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShopError {
    #[error("Not enough gold: {item} costs {cost}, you have {available}")]
    InsufficientGold {
        item: String,
        cost: u32,
        available: u32,
    },

    #[error("{0} is already equipped")]
    AlreadyEquipped(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("The blacksmith only trades at the forge")]
    NotAtBlacksmith,
}

/// Character persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt save data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Invalid battle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid battle config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any error surfaced by the town host.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_message() {
        let err = LookupError::QuestNotFound {
            unit_id: "u2".into(),
            quest_id: "q9".into(),
        };
        assert_eq!(err.to_string(), "Quest not found: q9 in unit u2");
    }

    #[test]
    fn test_game_error_is_transparent() {
        let err: GameError = BattleError::InputLocked.into();
        assert_eq!(err.to_string(), "Answer controls are locked");
        assert!(matches!(err, GameError::Battle(BattleError::InputLocked)));
    }

    #[test]
    fn test_shop_message() {
        let err = ShopError::InsufficientGold {
            item: "Iron Helm".into(),
            cost: 50,
            available: 10,
        };
        assert_eq!(err.to_string(), "Not enough gold: Iron Helm costs 50, you have 10");
    }
}
