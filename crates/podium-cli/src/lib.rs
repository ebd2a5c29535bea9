pub mod error;
pub mod render;
pub mod season;

use std::path::PathBuf;

use podium_core::observer::TracingObserver;

use error::CliError;
use render::OutputFormat;
use season::SeasonFile;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub season: PathBuf,
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            season: PathBuf::from("season.toml"),
            format: OutputFormat::Text,
        }
    }
}

impl Options {
    /// Parse `--season=<path>` and `--format=text|json`, program name excluded.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Options::default();
        for arg in args {
            if let Some(path) = arg.strip_prefix("--season=") {
                options.season = PathBuf::from(path);
            } else if let Some(format) = arg.strip_prefix("--format=") {
                options.format = format.parse()?;
            } else {
                return Err(CliError::Usage(format!(
                    "unexpected argument {arg}, expected --season=<path> or --format=text|json"
                )));
            }
        }
        Ok(options)
    }
}

/// Load the season file, apply environment overrides and render the tables.
pub fn run(options: &Options) -> Result<String, CliError> {
    let mut file = SeasonFile::load(&options.season)?;
    file.apply_env_overrides();
    let season = file.into_season()?;
    let standings = season
        .championship
        .compute_observed(&season.source, &TracingObserver)?;
    render::render(&standings, &season, options.format)
}
