//! Error types for match setup and play.
//!
//! Formation and name errors are recoverable: the caller should re-prompt.
//! Everything else aborts the current match.

use thiserror::Error;

use super::player::Role;

/// Why a formation string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    #[error("formation must look like 3-5-2, got {0:?}")]
    Malformed(String),

    #[error("each line in the formation must be greater than 0")]
    NonPositiveLine,

    #[error("formation must total 10 outfield players (example: 4-4-2, 3-5-2), got {total}")]
    WrongTotal { total: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid formation: {0}")]
    InvalidFormation(#[from] FormationError),

    #[error("{0} needs a non-empty name")]
    EmptyPlayerName(Role),

    #[error("not enough cards: needed {needed}, {remaining} remaining")]
    InsufficientCards { needed: usize, remaining: usize },

    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("invalid substitution count {requested}: {available} available")]
    InvalidSubstitutionCount { requested: usize, available: usize },

    #[error("{role} has no lineup card for battle {battle}")]
    NoCardForBattle { role: Role, battle: usize },
}

impl MatchError {
    /// True for input errors the caller can fix and retry.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidFormation(_) | MatchError::EmptyPlayerName(_)
        )
    }
}
