//! # football-ccg
//!
//! A two-player football card game engine. Each side fields a lineup of
//! cards in a formation, positions are fought one battle at a time, and a
//! level score goes to a penalty shootout with sudden death.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the engine**: choices come from a `DecisionProvider`,
//!    everything observable goes to a `NarrationSink` as a `MatchEvent`.
//!
//! 2. **Deterministic**: shuffles and substitute picks come from seeded
//!    `GameRng` streams. Same seed and same decisions, same match.
//!
//! 3. **One deck**: the shootout plays with whatever the deal left behind.
//!
//! ## Modules
//!
//! - `core`: Roles, players, RNG, configuration, errors
//! - `cards`: Cards and the shared deck
//! - `lineup`: Formation parsing and battle order
//! - `decisions`: Decision provider trait and stock providers
//! - `events`: Narration events and sinks
//! - `rules`: Battles, shootout, and the `Match` orchestrator
//!
//! ## Example
//!
//! ```
//! use football_ccg::{AlwaysDecline, EventLog, Match, MatchConfig};
//!
//! let config = MatchConfig::default()
//!     .with_names("Rovers", "United")
//!     .with_formation("4-4-2")
//!     .with_seed(7);
//!
//! let mut game = Match::new(config).unwrap();
//! let mut log = EventLog::new();
//! let result = game.play(&mut AlwaysDecline, &mut log).unwrap();
//!
//! let score = result.score;
//! assert!(score.non_dealer + score.dealer <= 11);
//! ```

pub mod cards;
pub mod core;
pub mod decisions;
pub mod events;
pub mod lineup;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    FormationError, GameRng, GameRngState, MatchConfig, MatchError, Player, Role, RoleMap,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::lineup::{build_positions, parse_formation, Formation, Line, Position};

pub use crate::decisions::{
    AlwaysAccept, AlwaysDecline, DecisionProvider, Prompt, ScriptedDecisions,
};

pub use crate::events::{EventLog, MatchEvent, NarrationSink, NullSink, PenaltyRound};

pub use crate::rules::{
    attacker_for_battle, penalty_result, run_shootout, Match, MatchResult, Outcome, PenaltyResult,
    Shootout, ShootoutPhase, ShootoutSummary,
};
