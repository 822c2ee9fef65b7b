//! Formation and lineup building.
//!
//! A `Formation` is parsed from text like `4-4-2`, then expanded into the
//! ordered `Position`s that fix the battle order for the whole match.

pub mod formation;
pub mod position;

pub use formation::{parse_formation, Formation, OUTFIELD_PLAYERS};
pub use position::{build_positions, Line, Position};
