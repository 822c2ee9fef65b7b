//! Core engine types: roles, players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the lineup, battle and
//! shootout rules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, DEFAULT_SUBSTITUTES};
pub use error::{FormationError, MatchError};
pub use player::{Player, Role, RoleMap, Substitutes};
pub use rng::{GameRng, GameRngState, SHUFFLE_CONTEXT, SUBSTITUTE_CONTEXT};
