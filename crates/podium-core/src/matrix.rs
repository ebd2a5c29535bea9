use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::validate_rounds;
use crate::error::{ConfigError, IntegrityError, StandingsError};
use crate::result::ResultRecord;
use crate::roster::{DriverId, Roster};
use crate::series::{Session, TrackId, race_sessions};
use crate::source::ResultSource;

/// One (track, race session) column of the points matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub track: TrackId,
    pub session: String,
}

/// A driver's results across every retained column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub driver: DriverId,
    pub cells: Vec<ResultRecord>,
}

impl MatrixRow {
    pub fn participated_anywhere(&self) -> bool {
        self.cells.iter().any(ResultRecord::participated)
    }
}

/// Driver × (track, race session) grid of results.
///
/// Columns are ordered track-major: every race session of the first track,
/// then every race session of the second, and so on. Rows only exist for
/// drivers who took part in at least one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsMatrix {
    tracks: Vec<TrackId>,
    sessions: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl PointsMatrix {
    /// Retained tracks, one per weekend.
    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Race session names shared by every weekend.
    pub fn sessions(&self) -> &[String] {
        &self.sessions
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn num_columns(&self) -> usize {
        self.tracks.len() * self.sessions.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.tracks.iter().flat_map(move |track| {
            self.sessions.iter().map(move |session| Column {
                track: track.clone(),
                session: session.clone(),
            })
        })
    }

    pub fn row(&self, driver: &DriverId) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| &r.driver == driver)
    }

    pub fn cell(
        &self,
        driver: &DriverId,
        track: &TrackId,
        session: &str,
    ) -> Option<&ResultRecord> {
        let round = self.tracks.iter().position(|t| t == track)?;
        let offset = self.sessions.iter().position(|s| s == session)?;
        self.row(driver)?
            .cells
            .get(round * self.sessions.len() + offset)
    }

    /// The row's cells grouped by weekend, in track order.
    pub fn weekends<'a>(&self, row: &'a MatrixRow) -> impl Iterator<Item = &'a [ResultRecord]> {
        row.cells.chunks(self.sessions.len().max(1))
    }

    /// A copy with rows arranged in `order`. Drivers not in the matrix are skipped.
    pub fn reordered(&self, order: &[DriverId]) -> PointsMatrix {
        let by_driver: HashMap<&DriverId, &MatrixRow> =
            self.rows.iter().map(|r| (&r.driver, r)).collect();
        let rows = order
            .iter()
            .filter_map(|id| by_driver.get(id).map(|&r| r.clone()))
            .collect();
        PointsMatrix {
            tracks: self.tracks.clone(),
            sessions: self.sessions.clone(),
            rows,
        }
    }
}

/// Assembles the points matrix from a result source.
pub struct PointsMatrixBuilder<'a> {
    roster: &'a Roster,
    tracks: &'a [TrackId],
    sessions: &'a [Session],
    rounds_to_include: usize,
}

impl<'a> PointsMatrixBuilder<'a> {
    /// Starts out including every track.
    pub fn new(roster: &'a Roster, tracks: &'a [TrackId], sessions: &'a [Session]) -> Self {
        Self {
            roster,
            tracks,
            sessions,
            rounds_to_include: tracks.len(),
        }
    }

    pub fn rounds_to_include(mut self, rounds: usize) -> Self {
        self.rounds_to_include = rounds;
        self
    }

    pub fn build<S: ResultSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<PointsMatrix, StandingsError> {
        validate_rounds(self.rounds_to_include, self.tracks.len())?;
        let race_names = race_sessions(self.sessions);
        if race_names.is_empty() {
            return Err(ConfigError::NoRaceSessions.into());
        }

        let num_sessions = race_names.len();
        let mut found: HashMap<(&DriverId, usize), ResultRecord> = HashMap::new();

        // Every sheet is checked against the roster, qualifying and rounds past the
        // cut-off included. Only race sheets fill columns.
        for (round, track) in self.tracks.iter().enumerate() {
            for session in self.sessions {
                let session = session.name.as_str();
                let Some(sheet) = source.session_results(track, session) else {
                    continue;
                };
                let column = race_names
                    .iter()
                    .position(|&race| race == session)
                    .map(|offset| round * num_sessions + offset);
                let mut seen = HashSet::new();
                for raw in sheet {
                    if !self.roster.contains(&raw.driver) {
                        return Err(IntegrityError::UnknownDriver {
                            driver: raw.driver.clone(),
                            track: track.clone(),
                            session: session.to_string(),
                        }
                        .into());
                    }
                    if !seen.insert(&raw.driver) {
                        return Err(IntegrityError::DuplicateResult {
                            driver: raw.driver.clone(),
                            track: track.clone(),
                            session: session.to_string(),
                        }
                        .into());
                    }
                    if let Some(col) = column
                        && round < self.rounds_to_include
                    {
                        found.insert((&raw.driver, col), raw.record());
                    }
                }
            }
        }

        let num_columns = self.rounds_to_include * num_sessions;
        let rows = self
            .roster
            .iter()
            .map(|driver| MatrixRow {
                driver: driver.id.clone(),
                cells: (0..num_columns)
                    .map(|col| {
                        found
                            .get(&(&driver.id, col))
                            .copied()
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .filter(MatrixRow::participated_anywhere)
            .collect();

        Ok(PointsMatrix {
            tracks: self.tracks[..self.rounds_to_include].to_vec(),
            sessions: race_names.into_iter().map(String::from).collect(),
            rows,
        })
    }
}
