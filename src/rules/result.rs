//! Match results.

use serde::{Deserialize, Serialize};

use super::shootout::ShootoutSummary;
use crate::core::{Role, RoleMap};

/// How the match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More battle points after all positions.
    Regulation(Role),
    /// More goals after the regulation shootout rounds.
    Penalties(Role),
    /// Only scorer in a sudden-death round.
    SuddenDeath(Role),
    /// Still level when the deck ran out of penalty cards.
    Drawn,
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: Outcome,
    /// Battle points at full time.
    pub score: RoleMap<u32>,
    /// Present only when regulation ended level.
    pub shootout: Option<ShootoutSummary>,
}

impl MatchResult {
    /// Winning role, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Role> {
        match self.outcome {
            Outcome::Regulation(r) | Outcome::Penalties(r) | Outcome::SuddenDeath(r) => Some(r),
            Outcome::Drawn => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, role: Role) -> bool {
        self.winner() == Some(role)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Drawn
    }
}
