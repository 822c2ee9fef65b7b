//! Narration events.
//!
//! Every observable step of a match is emitted as a `MatchEvent`, in the
//! order it happens. Events carry structured data only; turning them into
//! text (suit symbols, team names) is left to whoever listens.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Role, RoleMap};
use crate::lineup::Position;
use crate::rules::{MatchResult, PenaltyResult};

/// Which shootout round a penalty belongs to (1-based within its phase).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyRound {
    Regulation(u32),
    SuddenDeath(u32),
}

/// A single narrated step of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Cards dealt face down; battles are about to start.
    KickOff {
        formation: String,
        lineup_size: usize,
        substitutes: usize,
    },

    BattleStarted {
        battle: usize,
        total: usize,
        position: Position,
        attacker: Role,
    },

    /// A lineup card turned face up. For the attacker this is the
    /// provisional card, before the substitution window.
    CardRevealed { role: Role, battle: usize, card: Card },

    SubstitutionOffered {
        role: Role,
        battle: usize,
        max_allowed: usize,
    },

    /// A random substitute replaced the lineup card. The replaced card is
    /// out of the match.
    SubstitutionApplied {
        role: Role,
        battle: usize,
        substitute: Card,
        discarded: Card,
        remaining: usize,
    },

    /// The attacker's final card once the substitution window closes.
    CardLockedIn { role: Role, battle: usize, card: Card },

    BattleResolved {
        battle: usize,
        position: Position,
        attacker_card: Card,
        defender_card: Card,
        /// `None` on equal values.
        winner: Option<Role>,
    },

    ScoreUpdate { score: RoleMap<u32> },

    FullTime { score: RoleMap<u32> },

    ShootoutStarted { kicks: usize },

    PenaltyTaken {
        round: PenaltyRound,
        role: Role,
        card: Card,
        result: PenaltyResult,
    },

    /// Running goal count after a regulation shootout round.
    ShootoutTally { round: u32, goals: RoleMap<u32> },

    SuddenDeathStarted { goals: RoleMap<u32> },

    SuddenDeathRoundDrawn { round: u32 },

    /// Fewer than two cards left mid sudden death; the match stays drawn.
    DeckExhaustedDraw { remaining: usize },

    MatchFinished { result: MatchResult },
}

impl MatchEvent {
    /// Short name of the event kind, for logs and filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::KickOff { .. } => "kick_off",
            MatchEvent::BattleStarted { .. } => "battle_started",
            MatchEvent::CardRevealed { .. } => "card_revealed",
            MatchEvent::SubstitutionOffered { .. } => "substitution_offered",
            MatchEvent::SubstitutionApplied { .. } => "substitution_applied",
            MatchEvent::CardLockedIn { .. } => "card_locked_in",
            MatchEvent::BattleResolved { .. } => "battle_resolved",
            MatchEvent::ScoreUpdate { .. } => "score_update",
            MatchEvent::FullTime { .. } => "full_time",
            MatchEvent::ShootoutStarted { .. } => "shootout_started",
            MatchEvent::PenaltyTaken { .. } => "penalty_taken",
            MatchEvent::ShootoutTally { .. } => "shootout_tally",
            MatchEvent::SuddenDeathStarted { .. } => "sudden_death_started",
            MatchEvent::SuddenDeathRoundDrawn { .. } => "sudden_death_round_drawn",
            MatchEvent::DeckExhaustedDraw { .. } => "deck_exhausted_draw",
            MatchEvent::MatchFinished { .. } => "match_finished",
        }
    }

    /// True for events that belong to the penalty shootout.
    #[must_use]
    pub fn is_shootout(&self) -> bool {
        matches!(
            self,
            MatchEvent::ShootoutStarted { .. }
                | MatchEvent::PenaltyTaken { .. }
                | MatchEvent::ShootoutTally { .. }
                | MatchEvent::SuddenDeathStarted { .. }
                | MatchEvent::SuddenDeathRoundDrawn { .. }
                | MatchEvent::DeckExhaustedDraw { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_kind_and_shootout_flag() {
        let event = MatchEvent::PenaltyTaken {
            round: PenaltyRound::Regulation(1),
            role: Role::NonDealer,
            card: Card::new(Rank::Eight, Suit::Hearts),
            result: PenaltyResult::Goal,
        };
        assert_eq!(event.kind(), "penalty_taken");
        assert!(event.is_shootout());

        let event = MatchEvent::ScoreUpdate {
            score: RoleMap::new(1, 0),
        };
        assert!(!event.is_shootout());
    }

    #[test]
    fn test_event_serde() {
        let event = MatchEvent::CardRevealed {
            role: Role::Dealer,
            battle: 3,
            card: Card::new(Rank::Jack, Suit::Spades),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
