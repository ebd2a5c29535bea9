use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use podium_core::championship::Championship;
use podium_core::config::ChampionshipConfig;
use podium_core::error::StandingsError;
use podium_core::roster::{Driver, DriverId, Roster};
use podium_core::scoring::PointsTable;
use podium_core::series::{Session, TrackId, grid_from_qualifying};
use podium_core::source::{InMemoryResultSource, RawResult};

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
pub struct TrackEntry {
    pub id: TrackId,
    #[serde(default)]
    pub name: String,
}

/// One line of a session sheet. Missing points are looked up in the
/// season's points table.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    pub track: TrackId,
    pub session: String,
    pub driver: DriverId,
    #[serde(default)]
    pub finish_pos: Option<u32>,
    #[serde(default)]
    pub grid_pos: Option<u32>,
    #[serde(default)]
    pub dnf: bool,
    #[serde(default)]
    pub race_points: Option<u32>,
    #[serde(default)]
    pub quali_points: Option<u32>,
}

/// A season file as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonFile {
    pub championship: ChampionshipConfig,
    pub tracks: Vec<TrackEntry>,
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub points: PointsTable,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

/// A validated season, ready to compute.
#[derive(Debug, Clone)]
pub struct Season {
    pub championship: Championship,
    pub source: InMemoryResultSource,
    track_names: HashMap<TrackId, String>,
}

impl Season {
    /// Display name of a track, falling back to its id.
    pub fn track_name<'a>(&'a self, track: &'a TrackId) -> &'a str {
        match self.track_names.get(track) {
            Some(name) if !name.is_empty() => name.as_str(),
            _ => track.as_str(),
        }
    }
}

impl SeasonFile {
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let season = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            tracks = season.tracks.len(),
            drivers = season.drivers.len(),
            results = season.results.len(),
            "Loaded season file"
        );
        Ok(season)
    }

    /// Apply `PODIUM_ROUNDS` and `PODIUM_DROP_WEEK` from the environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored
    /// with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PODIUM_ROUNDS")
            && !val.is_empty()
        {
            match val.parse::<usize>() {
                Ok(n) => self.championship.rounds_to_include = n,
                Err(e) => tracing::warn!("Ignoring PODIUM_ROUNDS={val}: {e}"),
            }
        }
        if let Some(val) = lookup("PODIUM_DROP_WEEK")
            && !val.is_empty()
        {
            match parse_flag(&val) {
                Some(flag) => self.championship.drop_week = flag,
                None => tracing::warn!("Ignoring PODIUM_DROP_WEEK={val}: expected true or false"),
            }
        }
    }

    /// Check cross references and turn the file into a computable season.
    pub fn into_season(self) -> Result<Season, CliError> {
        let mut track_names = HashMap::new();
        for track in &self.tracks {
            if track_names
                .insert(track.id.clone(), track.name.clone())
                .is_some()
            {
                return Err(CliError::Season(format!("track {} listed twice", track.id)));
            }
        }
        let mut session_names = HashSet::new();
        for session in &self.sessions {
            if !session_names.insert(session.name.as_str()) {
                return Err(CliError::Season(format!(
                    "session {} listed twice",
                    session.name
                )));
            }
        }
        for entry in &self.results {
            if !track_names.contains_key(&entry.track) {
                return Err(CliError::Season(format!(
                    "result for {} names unknown track {}",
                    entry.driver, entry.track
                )));
            }
            if !session_names.contains(entry.session.as_str()) {
                return Err(CliError::Season(format!(
                    "result for {} names unknown session {}",
                    entry.driver, entry.session
                )));
            }
        }

        let source = self.result_source();
        let roster = Roster::new(self.drivers).map_err(StandingsError::from)?;
        let tracks = self.tracks.into_iter().map(|t| t.id).collect();
        let championship = Championship::new(self.championship, roster, tracks, self.sessions)?;
        Ok(Season {
            championship,
            source,
            track_names,
        })
    }

    /// Build the in-memory source, filling points and grid positions the
    /// file leaves out.
    ///
    /// A race without an explicit grid takes it from the driver's finish in
    /// the session just before it. Qualifying points are only awarded when
    /// that session is a qualifying session.
    fn result_source(&self) -> InMemoryResultSource {
        let finishes: HashMap<(&TrackId, &str, &DriverId), u32> = self
            .results
            .iter()
            .filter_map(|r| {
                r.finish_pos
                    .map(|pos| ((&r.track, r.session.as_str(), &r.driver), pos))
            })
            .collect();

        let mut source = InMemoryResultSource::new();
        for entry in &self.results {
            let is_race = self
                .sessions
                .iter()
                .any(|s| s.name == entry.session && s.is_race());
            let previous = self.previous_session(&entry.session);
            let grid_pos = entry.grid_pos.or_else(|| {
                previous.and_then(|prev| {
                    finishes
                        .get(&(&entry.track, prev.name.as_str(), &entry.driver))
                        .copied()
                })
            });
            let from_qualifying = grid_from_qualifying(&self.sessions, &entry.session);
            let quali_points = match (entry.quali_points, grid_pos) {
                (Some(points), _) => points,
                (None, Some(grid)) if from_qualifying => self.points.quali_points(grid),
                (None, _) => 0,
            };
            let race_points = match (entry.race_points, entry.finish_pos) {
                (Some(points), _) => points,
                (None, Some(pos)) if is_race => self.points.race_points(pos),
                (None, _) => 0,
            };

            source.insert(
                entry.track.clone(),
                entry.session.clone(),
                RawResult {
                    driver: entry.driver.clone(),
                    finish_pos: entry.finish_pos,
                    race_points,
                    grid_pos,
                    quali_points,
                    dnf: entry.dnf,
                },
            );
        }
        source
    }

    fn previous_session(&self, name: &str) -> Option<&Session> {
        let idx = self.sessions.iter().position(|s| s.name == name)?;
        idx.checked_sub(1).map(|prev| &self.sessions[prev])
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
