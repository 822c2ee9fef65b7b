//! Match narration: structured events and the sinks that observe them.
//!
//! The engine emits a `MatchEvent` for every reveal, substitution, result
//! and score change. Sinks decide what to do with them: `EventLog` keeps
//! them for queries and JSON export, `NullSink` drops them.

pub mod event;
pub mod sink;

pub use event::{MatchEvent, PenaltyRound};
pub use sink::{BattleRecord, EventLog, NarrationSink, NullSink};
