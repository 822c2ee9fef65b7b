//! Match configuration.
//!
//! Supplied once at kick-off: both team names, the formation text, and the
//! seed for the match's random streams. The deck is always a standard 52.

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::player::Role;
use crate::lineup::{parse_formation, Formation};
use crate::rules::DEFAULT_PENALTY_KICKS;

/// Substitutes dealt to each player by default.
pub const DEFAULT_SUBSTITUTES: usize = 3;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Home team (non-dealer) display name.
    pub home_name: String,

    /// Away team (dealer) display name.
    pub away_name: String,

    /// Formation text, e.g. `4-4-2`. Used by both teams.
    pub formation: String,

    /// Seed for shuffle and substitute streams.
    /// Same seed and same decisions reproduce the same match.
    pub seed: u64,

    /// Substitutes dealt to each player.
    pub substitutes: usize,

    /// Regulation penalty kicks per player before sudden death.
    pub penalty_kicks: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            home_name: "Home".to_string(),
            away_name: "Away".to_string(),
            formation: "4-4-2".to_string(),
            seed: 42,
            substitutes: DEFAULT_SUBSTITUTES,
            penalty_kicks: DEFAULT_PENALTY_KICKS,
        }
    }
}

impl MatchConfig {
    pub fn with_names(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_name = home.into();
        self.away_name = away.into();
        self
    }

    pub fn with_formation(mut self, formation: impl Into<String>) -> Self {
        self.formation = formation.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Name for a role, trimmed.
    #[must_use]
    pub fn name(&self, role: Role) -> &str {
        match role {
            Role::NonDealer => self.home_name.trim(),
            Role::Dealer => self.away_name.trim(),
        }
    }

    /// Check names and parse the formation.
    pub fn validate(&self) -> Result<Formation, MatchError> {
        for role in Role::BOTH {
            if self.name(role).is_empty() {
                return Err(MatchError::EmptyPlayerName(role));
            }
        }
        Ok(parse_formation(&self.formation)?)
    }

    /// Cards the deal consumes: two lineups plus both substitute pools.
    ///
    /// Saturates at `usize::MAX`, which no deck can cover.
    #[must_use]
    pub fn cards_needed(&self, lineup_size: usize) -> usize {
        lineup_size
            .saturating_add(self.substitutes)
            .saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormationError;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.substitutes, 3);
        assert_eq!(config.penalty_kicks, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_names("Rovers", "United")
            .with_formation("3-5-2")
            .with_seed(123);

        assert_eq!(config.name(Role::NonDealer), "Rovers");
        assert_eq!(config.name(Role::Dealer), "United");
        assert_eq!(config.seed, 123);
        assert_eq!(config.validate().unwrap().to_string(), "3-5-2");
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = MatchConfig::default().with_names("Rovers", "   ");
        assert_eq!(config.validate(), Err(MatchError::EmptyPlayerName(Role::Dealer)));
    }

    #[test]
    fn test_bad_formation_rejected() {
        let config = MatchConfig::default().with_formation("3-3-3");
        assert_eq!(
            config.validate(),
            Err(MatchError::InvalidFormation(FormationError::WrongTotal { total: 9 }))
        );
    }

    #[test]
    fn test_cards_needed() {
        assert_eq!(MatchConfig::default().cards_needed(11), 28);
    }

    #[test]
    fn test_cards_needed_saturates() {
        let config = MatchConfig {
            substitutes: usize::MAX / 2 + 1,
            ..MatchConfig::default()
        };
        assert_eq!(config.cards_needed(11), usize::MAX);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
