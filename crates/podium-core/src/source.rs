use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::result::ResultRecord;
use crate::roster::DriverId;
use crate::series::TrackId;

/// One classified line of a session sheet, as delivered by a result source.
///
/// The `dnf` flag is taken as given; the engine never re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    pub driver: DriverId,
    #[serde(default)]
    pub finish_pos: Option<u32>,
    #[serde(default)]
    pub race_points: u32,
    #[serde(default)]
    pub grid_pos: Option<u32>,
    #[serde(default)]
    pub quali_points: u32,
    #[serde(default)]
    pub dnf: bool,
}

impl RawResult {
    /// A classified finish with its race points and no grid information.
    pub fn finished(driver: impl AsRef<str>, finish_pos: u32, race_points: u32) -> Self {
        Self {
            driver: DriverId::new(driver),
            finish_pos: Some(finish_pos),
            race_points,
            grid_pos: None,
            quali_points: 0,
            dnf: false,
        }
    }

    pub fn with_grid(mut self, grid_pos: u32, quali_points: u32) -> Self {
        self.grid_pos = Some(grid_pos);
        self.quali_points = quali_points;
        self
    }

    pub fn retired(mut self) -> Self {
        self.dnf = true;
        self
    }

    pub fn record(&self) -> ResultRecord {
        ResultRecord::new(
            self.finish_pos,
            self.race_points,
            self.grid_pos,
            self.quali_points,
            self.dnf,
        )
    }
}

/// Supplies parsed session sheets to the engine.
///
/// Implementations own all file handling, grid/qualifying linkage and DNF
/// detection. A `None` answer means no sheet exists for that session yet.
pub trait ResultSource {
    fn session_results(&self, track: &TrackId, session: &str) -> Option<&[RawResult]>;
}

/// Result source backed by a map of session sheets.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResultSource {
    sessions: HashMap<(TrackId, String), Vec<RawResult>>,
}

impl InMemoryResultSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        track: impl Into<TrackId>,
        session: impl Into<String>,
        result: RawResult,
    ) {
        self.sessions
            .entry((track.into(), session.into()))
            .or_default()
            .push(result);
    }

    /// Append a full sheet for one session.
    pub fn extend(
        &mut self,
        track: impl Into<TrackId>,
        session: impl Into<String>,
        results: impl IntoIterator<Item = RawResult>,
    ) {
        self.sessions
            .entry((track.into(), session.into()))
            .or_default()
            .extend(results);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl ResultSource for InMemoryResultSource {
    fn session_results(&self, track: &TrackId, session: &str) -> Option<&[RawResult]> {
        self.sessions
            .get(&(track.clone(), session.to_string()))
            .map(Vec::as_slice)
    }
}
