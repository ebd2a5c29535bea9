use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scoring rules for one championship run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipConfig {
    /// Number of leading tracks (rounds) counted so far.
    pub rounds_to_include: usize,
    /// Rank by total minus each entrant's worst weekend.
    #[serde(default)]
    pub drop_week: bool,
    /// How many drivers per team score each weekend.
    #[serde(default = "default_scoring_drivers")]
    pub num_scoring_drivers_in_team: usize,
}

fn default_scoring_drivers() -> usize {
    2
}

impl ChampionshipConfig {
    pub fn new(rounds_to_include: usize) -> Self {
        Self {
            rounds_to_include,
            drop_week: false,
            num_scoring_drivers_in_team: default_scoring_drivers(),
        }
    }

    pub fn with_drop_week(mut self, drop_week: bool) -> Self {
        self.drop_week = drop_week;
        self
    }

    pub fn with_scoring_drivers(mut self, n: usize) -> Self {
        self.num_scoring_drivers_in_team = n;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check both limits against the series size.
    pub fn validate(&self, num_tracks: usize, num_drivers: usize) -> Result<(), ConfigError> {
        validate_rounds(self.rounds_to_include, num_tracks)?;
        if self.num_scoring_drivers_in_team == 0 || self.num_scoring_drivers_in_team > num_drivers
        {
            return Err(ConfigError::ScoringDriversOutOfRange {
                scoring: self.num_scoring_drivers_in_team,
                drivers: num_drivers,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_rounds(rounds: usize, num_tracks: usize) -> Result<(), ConfigError> {
    if rounds == 0 || rounds > num_tracks {
        return Err(ConfigError::RoundsOutOfRange {
            rounds,
            tracks: num_tracks,
        });
    }
    Ok(())
}
