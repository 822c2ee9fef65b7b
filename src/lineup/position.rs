//! Lineup positions and the fixed battle order they define.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::formation::Formation;

/// A line of the team, goalkeeper first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Line {
    Goalkeeper,
    Defence,
    Midfield,
    Attack,
}

impl Line {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Line::Goalkeeper => "GK",
            Line::Defence => "DEF",
            Line::Midfield => "MID",
            Line::Attack => "FWD",
        }
    }
}

/// One lineup slot. `number` counts from 1 within its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: Line,
    pub number: u32,
}

impl Position {
    pub const GOALKEEPER: Position = Position {
        line: Line::Goalkeeper,
        number: 1,
    };

    #[must_use]
    pub const fn new(line: Line, number: u32) -> Self {
        Self { line, number }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Line::Goalkeeper => f.write_str(self.line.prefix()),
            line => write!(f, "{} {}", line.prefix(), self.number),
        }
    }
}

/// Expand a formation into battle order: GK, then defenders, midfielders,
/// forwards, each numbered from 1.
#[must_use]
pub fn build_positions(formation: &Formation) -> Vec<Position> {
    let mut positions = Vec::with_capacity(formation.lineup_size());
    positions.push(Position::GOALKEEPER);

    let lines = [
        (Line::Defence, formation.defenders()),
        (Line::Midfield, formation.midfielders()),
        (Line::Attack, formation.forwards()),
    ];
    for (line, count) in lines {
        positions.extend((1..=count).map(|number| Position::new(line, number)));
    }

    positions
}
