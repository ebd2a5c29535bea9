use crate::roster::DriverId;
use crate::series::TrackId;

/// Out-of-range championship settings. Reported before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RoundsOutOfRange { rounds: usize, tracks: usize },
    ScoringDriversOutOfRange { scoring: usize, drivers: usize },
    NoRaceSessions,
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundsOutOfRange { rounds, tracks } => {
                write!(
                    f,
                    "rounds_to_include must be between 1 and {tracks} (got {rounds})"
                )
            },
            Self::ScoringDriversOutOfRange { scoring, drivers } => {
                write!(
                    f,
                    "num_scoring_drivers_in_team must be between 1 and {drivers} (got {scoring})"
                )
            },
            Self::NoRaceSessions => write!(f, "session list contains no race sessions"),
            Self::Parse(e) => write!(f, "invalid championship config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result data that contradicts the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    UnknownDriver {
        driver: DriverId,
        track: TrackId,
        session: String,
    },
    DuplicateResult {
        driver: DriverId,
        track: TrackId,
        session: String,
    },
    DuplicateDriver(DriverId),
}

impl std::fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDriver {
                driver,
                track,
                session,
            } => write!(
                f,
                "{driver} in {track} / {session} is not in the drivers table"
            ),
            Self::DuplicateResult {
                driver,
                track,
                session,
            } => write!(f, "{driver} appears more than once in {track} / {session}"),
            Self::DuplicateDriver(driver) => {
                write!(f, "{driver} is registered more than once")
            },
        }
    }
}

impl std::error::Error for IntegrityError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    Configuration(ConfigError),
    DataIntegrity(IntegrityError),
}

impl std::fmt::Display for StandingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::DataIntegrity(e) => write!(f, "data integrity error: {e}"),
        }
    }
}

impl std::error::Error for StandingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::DataIntegrity(e) => Some(e),
        }
    }
}

impl From<ConfigError> for StandingsError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}

impl From<IntegrityError> for StandingsError {
    fn from(e: IntegrityError) -> Self {
        Self::DataIntegrity(e)
    }
}
