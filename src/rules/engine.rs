//! Match orchestration.
//!
//! `Match` owns both players and the single shared deck. It deals, runs
//! every battle in position order, and on a level score hands the same
//! deck to the penalty shootout.
//!
//! ## Deal order
//!
//! Dealer lineup, non-dealer lineup, dealer substitutes, non-dealer
//! substitutes. All from the end of the shuffled deck.

use tracing::info;

use super::battle::{resolve_battle, BattleContext, BattleOutcome};
use super::result::{MatchResult, Outcome};
use super::shootout::run_shootout;
use crate::cards::Deck;
use crate::core::{
    GameRng, GameRngState, MatchConfig, MatchError, Player, Role, RoleMap, Substitutes,
    SHUFFLE_CONTEXT, SUBSTITUTE_CONTEXT,
};
use crate::decisions::DecisionProvider;
use crate::events::{MatchEvent, NarrationSink};
use crate::lineup::{build_positions, Formation, Position};

/// A match from deal to final whistle.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    formation: Formation,
    positions: Vec<Position>,
    players: RoleMap<Player>,
    deck: Deck,
    rng: GameRng,
    battles_played: usize,
    full_time: bool,
    /// Set at the final whistle. Later calls to `play` return it as is.
    result: Option<MatchResult>,
}

impl Match {
    /// Validate the config, shuffle a fresh deck from the seed, and deal.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        let root = GameRng::new(config.seed);
        let deck = Deck::shuffled(&mut root.for_context(SHUFFLE_CONTEXT));
        let rng = root.for_context(SUBSTITUTE_CONTEXT);
        Self::with_deck(config, deck, rng)
    }

    /// Deal from a supplied deck. `rng` picks substitutes.
    pub fn with_deck(
        config: MatchConfig,
        mut deck: Deck,
        rng: GameRng,
    ) -> Result<Self, MatchError> {
        let formation = config.validate()?;
        let positions = build_positions(&formation);

        let lineup_size = positions.len();
        let needed = config.cards_needed(lineup_size);
        if needed > deck.remaining() {
            return Err(MatchError::InsufficientCards {
                needed,
                remaining: deck.remaining(),
            });
        }

        let mut players = RoleMap::from_fn(|role| Player::new(config.name(role), role));
        players.dealer.lineup = deck.deal(lineup_size)?;
        players.non_dealer.lineup = deck.deal(lineup_size)?;
        players.dealer.substitutes = Substitutes::from_vec(deck.deal(config.substitutes)?);
        players.non_dealer.substitutes = Substitutes::from_vec(deck.deal(config.substitutes)?);

        info!(
            formation = %formation,
            lineup_size,
            remaining = deck.remaining(),
            "cards dealt"
        );

        Ok(Self {
            config,
            formation,
            positions,
            players,
            deck,
            rng,
            battles_played: 0,
            full_time: false,
            result: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn formation(&self) -> Formation {
        self.formation
    }

    /// Positions in battle order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn player(&self, role: Role) -> &Player {
        &self.players[role]
    }

    #[must_use]
    pub fn players(&self) -> &RoleMap<Player> {
        &self.players
    }

    /// The shared deck, as left after dealing and any shootout draws.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn score(&self) -> RoleMap<u32> {
        self.players.map(|p| p.points)
    }

    #[must_use]
    pub fn battles_played(&self) -> usize {
        self.battles_played
    }

    #[must_use]
    pub fn total_battles(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_regulation_over(&self) -> bool {
        self.battles_played >= self.positions.len()
    }

    /// The final result, once `play` has finished the match.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Checkpoint of the substitute stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play the next battle. Returns `None` once every position is played.
    pub fn play_battle<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<Option<BattleOutcome>, MatchError>
    where
        D: DecisionProvider + ?Sized,
        S: NarrationSink + ?Sized,
    {
        if self.is_regulation_over() {
            return Ok(None);
        }

        if self.battles_played == 0 {
            info!(formation = %self.formation, "kick-off");
            sink.emit(MatchEvent::KickOff {
                formation: self.formation.to_string(),
                lineup_size: self.positions.len(),
                substitutes: self.config.substitutes,
            });
        }

        let battle = self.battles_played + 1;
        let ctx = BattleContext {
            battle,
            total: self.positions.len(),
            position: self.positions[battle - 1],
        };
        let outcome = resolve_battle(ctx, &mut self.players, &mut self.rng, decisions, sink)?;
        self.battles_played = battle;

        Ok(Some(outcome))
    }

    /// Play all remaining battles. Returns the regulation winner, `None` if level.
    ///
    /// `FullTime` is emitted the first time regulation completes only.
    pub fn play_regulation<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<Option<Role>, MatchError>
    where
        D: DecisionProvider + ?Sized,
        S: NarrationSink + ?Sized,
    {
        while self.play_battle(decisions, sink)?.is_some() {}

        let score = self.score();
        if !self.full_time {
            self.full_time = true;
            info!(
                non_dealer = score.non_dealer,
                dealer = score.dealer,
                "full time"
            );
            sink.emit(MatchEvent::FullTime { score });
        }

        Ok(match score.non_dealer.cmp(&score.dealer) {
            std::cmp::Ordering::Greater => Some(Role::NonDealer),
            std::cmp::Ordering::Less => Some(Role::Dealer),
            std::cmp::Ordering::Equal => None,
        })
    }

    /// Play to a result, going to penalties if regulation ends level.
    ///
    /// A finished match is terminal: calling again returns the stored
    /// result without touching the deck or the sink.
    pub fn play<D, S>(&mut self, decisions: &mut D, sink: &mut S) -> Result<MatchResult, MatchError>
    where
        D: DecisionProvider + ?Sized,
        S: NarrationSink + ?Sized,
    {
        if let Some(result) = &self.result {
            return Ok(result.clone());
        }

        let regulation_winner = self.play_regulation(decisions, sink)?;
        let score = self.score();

        let result = match regulation_winner {
            Some(role) => MatchResult {
                outcome: Outcome::Regulation(role),
                score,
                shootout: None,
            },
            None => {
                let summary = run_shootout(&mut self.deck, self.config.penalty_kicks, sink)?;
                let outcome = match summary.winner {
                    Some(role) if summary.sudden_death_rounds > 0 => Outcome::SuddenDeath(role),
                    Some(role) => Outcome::Penalties(role),
                    None => Outcome::Drawn,
                };
                MatchResult {
                    outcome,
                    score,
                    shootout: Some(summary),
                }
            }
        };

        info!(outcome = ?result.outcome, "match finished");
        sink.emit(MatchEvent::MatchFinished {
            result: result.clone(),
        });
        self.result = Some(result.clone());
        Ok(result)
    }
}
