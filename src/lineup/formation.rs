//! Formation parsing.
//!
//! A formation names how the ten outfield players split into defence,
//! midfield and attack, written as `D-M-F` (e.g. `4-4-2`). En and em
//! dashes are accepted as hyphens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::FormationError;

/// Outfield players every formation must field.
pub const OUTFIELD_PLAYERS: u32 = 10;

const DASH_VARIANTS: [char; 6] = [
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2212}',
];

/// A validated formation: every line positive, lines summing to ten.
///
/// Deserialization goes through `Formation::new`, so the same rules apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FormationLines")]
pub struct Formation {
    defenders: u32,
    midfielders: u32,
    forwards: u32,
}

/// Unchecked wire form of a `Formation`.
#[derive(Deserialize)]
struct FormationLines {
    defenders: u32,
    midfielders: u32,
    forwards: u32,
}

impl TryFrom<FormationLines> for Formation {
    type Error = FormationError;

    fn try_from(lines: FormationLines) -> Result<Self, Self::Error> {
        Formation::new(lines.defenders, lines.midfielders, lines.forwards)
    }
}

impl Formation {
    /// Build from explicit line counts.
    pub fn new(defenders: u32, midfielders: u32, forwards: u32) -> Result<Self, FormationError> {
        if defenders == 0 || midfielders == 0 || forwards == 0 {
            return Err(FormationError::NonPositiveLine);
        }
        let total = defenders.saturating_add(midfielders).saturating_add(forwards);
        if total != OUTFIELD_PLAYERS {
            return Err(FormationError::WrongTotal { total });
        }
        Ok(Self {
            defenders,
            midfielders,
            forwards,
        })
    }

    /// Lenient parse accepting three or more lines, e.g. `4-2-3-1`.
    ///
    /// The first line is defence, the last is attack, and every line in
    /// between is folded into midfield.
    pub fn parse_lines(raw: &str) -> Result<Self, FormationError> {
        let lines = split_lines(raw)?;
        if lines.len() < 3 {
            return Err(FormationError::Malformed(raw.trim().to_string()));
        }
        if lines.contains(&0) {
            return Err(FormationError::NonPositiveLine);
        }

        let defenders = lines[0];
        let forwards = lines[lines.len() - 1];
        let midfielders = lines[1..lines.len() - 1]
            .iter()
            .fold(0u32, |acc, n| acc.saturating_add(*n));
        Self::new(defenders, midfielders, forwards)
    }

    #[must_use]
    pub fn defenders(&self) -> u32 {
        self.defenders
    }

    #[must_use]
    pub fn midfielders(&self) -> u32 {
        self.midfielders
    }

    #[must_use]
    pub fn forwards(&self) -> u32 {
        self.forwards
    }

    /// Outfield players, always ten.
    #[must_use]
    pub fn outfield(&self) -> u32 {
        self.defenders + self.midfielders + self.forwards
    }

    /// Lineup slots including the goalkeeper.
    #[must_use]
    pub fn lineup_size(&self) -> usize {
        self.outfield() as usize + 1
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

impl FromStr for Formation {
    type Err = FormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formation(s)
    }
}

/// Strict parse: exactly three hyphen-separated positive integers summing to ten.
pub fn parse_formation(raw: &str) -> Result<Formation, FormationError> {
    let lines = split_lines(raw)?;
    match lines.as_slice() {
        [defenders, midfielders, forwards] => Formation::new(*defenders, *midfielders, *forwards),
        _ => Err(FormationError::Malformed(raw.trim().to_string())),
    }
}

fn split_lines(raw: &str) -> Result<Vec<u32>, FormationError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    cleaned
        .split('-')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FormationError::Malformed(raw.trim().to_string()));
            }
            part.parse::<u32>()
                .map_err(|_| FormationError::Malformed(raw.trim().to_string()))
        })
        .collect()
}
