//! Match rules: battles, the penalty shootout, and the orchestrator.
//!
//! - `battle`: attacker assignment, substitution window, card comparison
//! - `shootout`: five-round shootout plus sudden death on the shared deck
//! - `engine`: `Match`, which deals and sequences everything
//! - `result`: how a finished match is reported

pub mod battle;
pub mod engine;
pub mod result;
pub mod shootout;

pub use battle::{
    attacker_for_battle, offer_substitutions, resolve_battle, BattleContext, BattleOutcome,
};
pub use engine::Match;
pub use result::{MatchResult, Outcome};
pub use shootout::{
    penalty_result, run_shootout, PenaltyResult, Shootout, ShootoutPhase, ShootoutSummary,
    DEFAULT_PENALTY_KICKS,
};
