//! Battle resolution: one position, one card each.
//!
//! ## Sequence
//!
//! 1. The attacker reveals the lineup card for this position.
//! 2. The attacker may bring on substitutes before the defender reveals.
//!    Normally at most one; on the final battle, any number still held.
//! 3. The defender reveals the card in the same slot.
//! 4. Higher value scores one point. Equal values score nothing.

use tracing::debug;

use crate::cards::Card;
use crate::core::{GameRng, MatchError, Player, Role, RoleMap};
use crate::decisions::{DecisionProvider, Prompt};
use crate::events::{MatchEvent, NarrationSink};
use crate::lineup::Position;

/// Which role attacks in a 1-based battle.
///
/// The non-dealer attacks battles 1 and 2. From battle 3 on, odd battles
/// go to the dealer and even battles to the non-dealer.
#[must_use]
pub const fn attacker_for_battle(battle: usize) -> Role {
    if battle <= 2 || battle % 2 == 0 {
        Role::NonDealer
    } else {
        Role::Dealer
    }
}

/// Where a battle sits in the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleContext {
    /// 1-based battle index, also the lineup slot.
    pub battle: usize,
    pub total: usize,
    pub position: Position,
}

impl BattleContext {
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.battle == self.total
    }
}

/// What happened in one battle. Not stored; the score is what persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub attacker: Role,
    pub attacker_card: Card,
    pub defender_card: Card,
    pub winner: Option<Role>,
    pub substitutions: usize,
}

/// Resolve one battle between the two players and award the point.
pub fn resolve_battle<D, S>(
    ctx: BattleContext,
    players: &mut RoleMap<Player>,
    rng: &mut GameRng,
    decisions: &mut D,
    sink: &mut S,
) -> Result<BattleOutcome, MatchError>
where
    D: DecisionProvider + ?Sized,
    S: NarrationSink + ?Sized,
{
    let attacker_role = attacker_for_battle(ctx.battle);
    let defender_role = attacker_role.other();
    let (attacker, defender) = players.pair_mut(attacker_role);

    sink.emit(MatchEvent::BattleStarted {
        battle: ctx.battle,
        total: ctx.total,
        position: ctx.position,
        attacker: attacker_role,
    });

    let provisional = lineup_card(attacker, ctx.battle)?;
    sink.emit(MatchEvent::CardRevealed {
        role: attacker_role,
        battle: ctx.battle,
        card: provisional,
    });

    let substitutions = offer_substitutions(&ctx, attacker, rng, decisions, sink)?;

    let attacker_card = lineup_card(attacker, ctx.battle)?;
    sink.emit(MatchEvent::CardLockedIn {
        role: attacker_role,
        battle: ctx.battle,
        card: attacker_card,
    });

    let defender_card = lineup_card(defender, ctx.battle)?;
    sink.emit(MatchEvent::CardRevealed {
        role: defender_role,
        battle: ctx.battle,
        card: defender_card,
    });

    let winner = match attacker_card.value().cmp(&defender_card.value()) {
        std::cmp::Ordering::Greater => {
            attacker.points += 1;
            Some(attacker_role)
        }
        std::cmp::Ordering::Less => {
            defender.points += 1;
            Some(defender_role)
        }
        std::cmp::Ordering::Equal => None,
    };

    debug!(
        battle = ctx.battle,
        position = %ctx.position,
        attacker = ?attacker_role,
        attacker_card = %attacker_card,
        defender_card = %defender_card,
        winner = ?winner,
        "battle resolved"
    );

    sink.emit(MatchEvent::BattleResolved {
        battle: ctx.battle,
        position: ctx.position,
        attacker_card,
        defender_card,
        winner,
    });
    sink.emit(MatchEvent::ScoreUpdate {
        score: players.map(|p| p.points),
    });

    Ok(BattleOutcome {
        attacker: attacker_role,
        attacker_card,
        defender_card,
        winner,
        substitutions,
    })
}

/// Run the attacker's substitution window. Returns how many were used.
///
/// Each substitute is drawn uniformly from the pool and overwrites the
/// lineup slot for this battle. The replaced card leaves the match.
pub fn offer_substitutions<D, S>(
    ctx: &BattleContext,
    player: &mut Player,
    rng: &mut GameRng,
    decisions: &mut D,
    sink: &mut S,
) -> Result<usize, MatchError>
where
    D: DecisionProvider + ?Sized,
    S: NarrationSink + ?Sized,
{
    lineup_card(player, ctx.battle)?;
    let remaining = player.substitutes_remaining();
    if remaining == 0 {
        return Ok(0);
    }

    let max_allowed = if ctx.is_final() { remaining } else { 1 };
    sink.emit(MatchEvent::SubstitutionOffered {
        role: player.role,
        battle: ctx.battle,
        max_allowed,
    });

    let to_use = if max_allowed > 1 {
        let prompt = Prompt::FinalBattleSubstitutes {
            role: player.role,
            max_allowed,
        };
        if !decisions.ask_yes_no(&prompt) {
            return Ok(0);
        }
        let prompt = Prompt::SubstituteCount {
            role: player.role,
            min: 1,
            max: max_allowed,
        };
        let requested = decisions.ask_count(&prompt, 1, max_allowed);
        if requested == 0 || requested > max_allowed {
            return Err(MatchError::InvalidSubstitutionCount {
                requested,
                available: max_allowed,
            });
        }
        requested
    } else {
        let prompt = Prompt::UseSubstitute {
            role: player.role,
            battle: ctx.battle,
        };
        if !decisions.ask_yes_no(&prompt) {
            return Ok(0);
        }
        1
    };

    let slot = ctx.battle - 1;
    for _ in 0..to_use {
        let pick = rng.gen_range_usize(0..player.substitutes.len());
        let substitute = player.substitutes.remove(pick);
        let discarded = std::mem::replace(&mut player.lineup[slot], substitute);

        debug!(
            battle = ctx.battle,
            role = ?player.role,
            substitute = %substitute,
            discarded = %discarded,
            "substitute used"
        );
        sink.emit(MatchEvent::SubstitutionApplied {
            role: player.role,
            battle: ctx.battle,
            substitute,
            discarded,
            remaining: player.substitutes.len(),
        });
    }

    Ok(to_use)
}

fn lineup_card(player: &Player, battle: usize) -> Result<Card, MatchError> {
    player.card_at(battle).ok_or(MatchError::NoCardForBattle {
        role: player.role,
        battle,
    })
}
