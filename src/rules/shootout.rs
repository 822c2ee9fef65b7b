//! Penalty shootout.
//!
//! Played only when regulation ends level, with whatever the deck still
//! holds. Each side is dealt five penalty cards (non-dealer first). Card
//! values decide each kick:
//!
//! | Value | Result   |
//! |-------|----------|
//! | 2-5   | Miss     |
//! | 6-7   | Woodwork |
//! | 8-14  | Goal     |
//!
//! After five rounds the side with more goals wins. Otherwise sudden death
//! draws one card per side from the deck until exactly one side scores in
//! a round, or fewer than two cards remain and the match stays drawn.
//!
//! ## State machine
//!
//! `RegularRounds` -> `Decided` | `SuddenDeath`
//! `SuddenDeath` -> `Decided` | `SuddenDeath` | `DrawnNoCards`

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::{MatchError, Role, RoleMap};
use crate::events::{MatchEvent, NarrationSink, PenaltyRound};

/// Default regulation kicks per side.
pub const DEFAULT_PENALTY_KICKS: usize = 5;

/// What a penalty card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyResult {
    Miss,
    Woodwork,
    Goal,
}

impl PenaltyResult {
    #[must_use]
    pub fn is_goal(self) -> bool {
        self == PenaltyResult::Goal
    }
}

impl std::fmt::Display for PenaltyResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyResult::Miss => f.write_str("MISS"),
            PenaltyResult::Woodwork => f.write_str("WOODWORK"),
            PenaltyResult::Goal => f.write_str("GOAL"),
        }
    }
}

/// Classify a penalty card by value.
#[must_use]
pub fn penalty_result(card: Card) -> PenaltyResult {
    match card.value() {
        0..=5 => PenaltyResult::Miss,
        6..=7 => PenaltyResult::Woodwork,
        _ => PenaltyResult::Goal,
    }
}

/// Where the shootout is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShootoutPhase {
    /// Next regulation round to play (1-based).
    RegularRounds { next_round: u32 },
    /// Next sudden-death round to play (1-based).
    SuddenDeath { next_round: u32 },
    Decided(Role),
    /// Level and fewer than two cards left.
    DrawnNoCards,
}

impl ShootoutPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ShootoutPhase::Decided(_) | ShootoutPhase::DrawnNoCards)
    }
}

/// Final shootout figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutSummary {
    pub winner: Option<Role>,
    /// Goals across regulation and sudden-death kicks.
    pub goals: RoleMap<u32>,
    /// Sudden-death rounds played; zero when decided in regulation.
    pub sudden_death_rounds: u32,
}

/// A shootout in progress.
#[derive(Clone, Debug)]
pub struct Shootout {
    kicks: RoleMap<Vec<Card>>,
    goals: RoleMap<u32>,
    phase: ShootoutPhase,
    sudden_death_rounds: u32,
}

impl Shootout {
    /// Deal `kicks` penalty cards to the non-dealer, then `kicks` to the dealer.
    ///
    /// Fails with `InsufficientCards` if the deck cannot cover both hands.
    /// With zero kicks the sides are level from the start and the
    /// shootout opens in sudden death.
    pub fn new(deck: &mut Deck, kicks: usize) -> Result<Self, MatchError> {
        let needed = kicks.saturating_mul(2);
        if deck.remaining() < needed {
            return Err(MatchError::InsufficientCards {
                needed,
                remaining: deck.remaining(),
            });
        }

        let non_dealer = deck.deal(kicks)?;
        let dealer = deck.deal(kicks)?;

        Ok(Self {
            kicks: RoleMap::new(non_dealer, dealer),
            goals: RoleMap::default(),
            phase: if kicks == 0 {
                ShootoutPhase::SuddenDeath { next_round: 1 }
            } else {
                ShootoutPhase::RegularRounds { next_round: 1 }
            },
            sudden_death_rounds: 0,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ShootoutPhase {
        self.phase
    }

    #[must_use]
    pub fn goals(&self) -> RoleMap<u32> {
        self.goals
    }

    /// Penalty hand dealt to a side.
    #[must_use]
    pub fn kicks(&self, role: Role) -> &[Card] {
        &self.kicks[role]
    }

    #[must_use]
    pub fn summary(&self) -> ShootoutSummary {
        ShootoutSummary {
            winner: match self.phase {
                ShootoutPhase::Decided(role) => Some(role),
                _ => None,
            },
            goals: self.goals,
            sudden_death_rounds: self.sudden_death_rounds,
        }
    }

    /// Play one round and return the new phase. A terminal phase is
    /// returned unchanged.
    pub fn step<S>(&mut self, deck: &mut Deck, sink: &mut S) -> Result<ShootoutPhase, MatchError>
    where
        S: NarrationSink + ?Sized,
    {
        let phase = self.phase;
        self.phase = match phase {
            ShootoutPhase::RegularRounds { next_round } => self.regular_round(next_round, sink),
            ShootoutPhase::SuddenDeath { next_round } => {
                self.sudden_death_round(next_round, deck, sink)?
            }
            terminal => terminal,
        };
        Ok(self.phase)
    }

    /// Play to a terminal phase.
    pub fn run<S>(&mut self, deck: &mut Deck, sink: &mut S) -> Result<ShootoutSummary, MatchError>
    where
        S: NarrationSink + ?Sized,
    {
        while !self.step(deck, sink)?.is_terminal() {}
        Ok(self.summary())
    }

    fn regular_round<S>(&mut self, round: u32, sink: &mut S) -> ShootoutPhase
    where
        S: NarrationSink + ?Sized,
    {
        let slot = round as usize - 1;
        for role in Role::BOTH {
            let card = self.kicks[role][slot];
            self.take_kick(PenaltyRound::Regulation(round), role, card, sink);
        }
        sink.emit(MatchEvent::ShootoutTally {
            round,
            goals: self.goals,
        });

        if slot + 1 < self.kicks.non_dealer.len() {
            return ShootoutPhase::RegularRounds {
                next_round: round + 1,
            };
        }

        match self.goals.non_dealer.cmp(&self.goals.dealer) {
            std::cmp::Ordering::Greater => ShootoutPhase::Decided(Role::NonDealer),
            std::cmp::Ordering::Less => ShootoutPhase::Decided(Role::Dealer),
            std::cmp::Ordering::Equal => {
                info!(
                    goals = self.goals.non_dealer,
                    "penalties level, sudden death begins"
                );
                sink.emit(MatchEvent::SuddenDeathStarted { goals: self.goals });
                ShootoutPhase::SuddenDeath { next_round: 1 }
            }
        }
    }

    fn sudden_death_round<S>(
        &mut self,
        round: u32,
        deck: &mut Deck,
        sink: &mut S,
    ) -> Result<ShootoutPhase, MatchError>
    where
        S: NarrationSink + ?Sized,
    {
        if deck.remaining() < 2 {
            info!(remaining = deck.remaining(), "no cards left for sudden death");
            sink.emit(MatchEvent::DeckExhaustedDraw {
                remaining: deck.remaining(),
            });
            return Ok(ShootoutPhase::DrawnNoCards);
        }

        let non_dealer_card = deck.pop()?;
        let dealer_card = deck.pop()?;
        self.sudden_death_rounds = round;

        let pr = PenaltyRound::SuddenDeath(round);
        let non_dealer_scored = self.take_kick(pr, Role::NonDealer, non_dealer_card, sink);
        let dealer_scored = self.take_kick(pr, Role::Dealer, dealer_card, sink);

        Ok(match (non_dealer_scored, dealer_scored) {
            (true, false) => ShootoutPhase::Decided(Role::NonDealer),
            (false, true) => ShootoutPhase::Decided(Role::Dealer),
            _ => {
                sink.emit(MatchEvent::SuddenDeathRoundDrawn { round });
                ShootoutPhase::SuddenDeath {
                    next_round: round + 1,
                }
            }
        })
    }

    fn take_kick<S>(&mut self, round: PenaltyRound, role: Role, card: Card, sink: &mut S) -> bool
    where
        S: NarrationSink + ?Sized,
    {
        let result = penalty_result(card);
        if result.is_goal() {
            self.goals[role] += 1;
        }
        debug!(?round, ?role, card = %card, %result, "penalty taken");
        sink.emit(MatchEvent::PenaltyTaken {
            round,
            role,
            card,
            result,
        });
        result.is_goal()
    }
}

/// Deal and play a full shootout from the remaining deck.
pub fn run_shootout<S>(
    deck: &mut Deck,
    kicks: usize,
    sink: &mut S,
) -> Result<ShootoutSummary, MatchError>
where
    S: NarrationSink + ?Sized,
{
    let mut shootout = Shootout::new(deck, kicks)?;
    info!(kicks, remaining = deck.remaining(), "penalty shootout");
    sink.emit(MatchEvent::ShootoutStarted { kicks });
    shootout.run(deck, sink)
}
