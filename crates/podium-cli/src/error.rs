use std::path::PathBuf;

use podium_core::error::StandingsError;

/// Anything that stops the CLI from producing tables.
#[derive(Debug)]
pub enum CliError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    /// The season file is well-formed TOML but inconsistent.
    Season(String),
    Usage(String),
    Standings(StandingsError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            },
            CliError::Parse(e) => write!(f, "invalid season file: {e}"),
            CliError::Season(msg) => write!(f, "season error: {msg}"),
            CliError::Usage(msg) => write!(f, "usage error: {msg}"),
            CliError::Standings(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "JSON encoding failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Parse(e) => Some(e),
            CliError::Standings(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Season(_) | CliError::Usage(_) => None,
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Parse(e)
    }
}

impl From<StandingsError> for CliError {
    fn from(e: StandingsError) -> Self {
        CliError::Standings(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
