use serde::Serialize;

use crate::config::ChampionshipConfig;
use crate::error::{ConfigError, StandingsError};
use crate::matrix::{PointsMatrix, PointsMatrixBuilder};
use crate::observer::{NoopObserver, StandingsObserver};
use crate::participation::{
    ParticipationRecord, TeamParticipation, group_by_team, track_participation,
};
use crate::ranking::sort_standings;
use crate::roster::{DriverId, Roster};
use crate::series::{Session, TrackId, race_sessions};
use crate::source::ResultSource;
use crate::teams::{TeamTotals, calculate_team_totals};
use crate::totals::{DriverTotals, calculate_driver_totals};

/// A season definition ready to be scored.
#[derive(Debug, Clone)]
pub struct Championship {
    config: ChampionshipConfig,
    roster: Roster,
    tracks: Vec<TrackId>,
    sessions: Vec<Session>,
}

/// Every table produced by one run, in final standing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub drop_week: bool,
    pub drivers: Vec<DriverTotals>,
    /// Rows arranged in driver standing order.
    pub matrix: PointsMatrix,
    pub teams: Vec<TeamTotals>,
    /// In driver standing order.
    pub participation: Vec<ParticipationRecord>,
    pub team_participation: Vec<TeamParticipation>,
}

impl Standings {
    /// 1-based championship position of a driver.
    pub fn driver_position(&self, driver: &DriverId) -> Option<usize> {
        self.drivers
            .iter()
            .position(|d| &d.driver == driver)
            .map(|i| i + 1)
    }

    pub fn team_position(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.team == team).map(|i| i + 1)
    }

    pub fn driver(&self, driver: &DriverId) -> Option<&DriverTotals> {
        self.drivers.iter().find(|d| &d.driver == driver)
    }

    pub fn team(&self, team: &str) -> Option<&TeamTotals> {
        self.teams.iter().find(|t| t.team == team)
    }

    /// The score the ranking was decided on.
    pub fn ranking_points(&self, driver: &DriverId) -> Option<u32> {
        self.driver(driver).map(|d| {
            if self.drop_week {
                d.total_with_drop_week
            } else {
                d.total
            }
        })
    }
}

impl Championship {
    /// Validates the configuration against the series before anything runs.
    pub fn new(
        config: ChampionshipConfig,
        roster: Roster,
        tracks: Vec<TrackId>,
        sessions: Vec<Session>,
    ) -> Result<Self, StandingsError> {
        config.validate(tracks.len(), roster.len())?;
        if race_sessions(&sessions).is_empty() {
            return Err(ConfigError::NoRaceSessions.into());
        }
        Ok(Self {
            config,
            roster,
            tracks,
            sessions,
        })
    }

    pub fn config(&self) -> &ChampionshipConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn compute<S: ResultSource + ?Sized>(&self, source: &S) -> Result<Standings, StandingsError> {
        self.compute_observed(source, &NoopObserver)
    }

    /// Run every stage, reporting progress to `observer`.
    pub fn compute_observed<S: ResultSource + ?Sized>(
        &self,
        source: &S,
        observer: &dyn StandingsObserver,
    ) -> Result<Standings, StandingsError> {
        let matrix = PointsMatrixBuilder::new(&self.roster, &self.tracks, &self.sessions)
            .rounds_to_include(self.config.rounds_to_include)
            .build(source)?;
        observer.matrix_built(matrix.len(), matrix.num_columns());
        for driver in self.roster.iter() {
            if matrix.row(&driver.id).is_none() {
                observer.driver_excluded(&driver.id);
            }
        }

        let drop_week = self.config.drop_week;
        let mut drivers = calculate_driver_totals(&matrix, self.roster.len());
        sort_standings(&mut drivers, drop_week);
        observer.drivers_ranked(&drivers);

        let order: Vec<DriverId> = drivers.iter().map(|d| d.driver.clone()).collect();
        let matrix = matrix.reordered(&order);

        let mut teams = calculate_team_totals(
            &drivers,
            &self.roster,
            self.config.num_scoring_drivers_in_team,
        );
        sort_standings(&mut teams, drop_week);
        observer.teams_ranked(&teams);

        let participation = track_participation(&matrix);
        let team_participation = group_by_team(&participation, &teams, &self.roster);

        Ok(Standings {
            drop_week,
            drivers,
            matrix,
            teams,
            participation,
            team_participation,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::roster::Driver;
    use crate::source::{InMemoryResultSource, RawResult};

    fn season(config: ChampionshipConfig) -> Result<Championship, StandingsError> {
        let roster = Roster::new(vec![
            Driver::new("amy", "Red"),
            Driver::new("bob", "Blue"),
            Driver::independent("cat"),
        ])?;
        Championship::new(
            config,
            roster,
            vec![TrackId::new("t1"), TrackId::new("t2")],
            vec![Session::qualifying("Q"), Session::race("R")],
        )
    }

    #[test]
    fn rejects_bad_rounds_up_front() {
        let err = season(ChampionshipConfig::new(3)).unwrap_err();
        assert_eq!(
            err,
            StandingsError::from(ConfigError::RoundsOutOfRange {
                rounds: 3,
                tracks: 2
            })
        );
        assert!(season(ChampionshipConfig::new(0)).is_err());
    }

    #[test]
    fn rejects_bad_scoring_drivers() {
        let err = season(ChampionshipConfig::new(2).with_scoring_drivers(4)).unwrap_err();
        assert_eq!(
            err,
            StandingsError::from(ConfigError::ScoringDriversOutOfRange {
                scoring: 4,
                drivers: 3
            })
        );
        assert!(season(ChampionshipConfig::new(2).with_scoring_drivers(0)).is_err());
    }

    #[test]
    fn rejects_sessions_without_races() {
        let roster = Roster::new(vec![Driver::independent("amy")]).unwrap();
        let err = Championship::new(
            ChampionshipConfig::new(1).with_scoring_drivers(1),
            roster,
            vec![TrackId::new("t1")],
            vec![Session::qualifying("Q")],
        )
        .unwrap_err();
        assert_eq!(err, StandingsError::from(ConfigError::NoRaceSessions));
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl StandingsObserver for Recorder {
        fn matrix_built(&self, drivers: usize, columns: usize) {
            self.events
                .borrow_mut()
                .push(format!("matrix {drivers}x{columns}"));
        }

        fn driver_excluded(&self, driver: &DriverId) {
            self.events.borrow_mut().push(format!("excluded {driver}"));
        }

        fn drivers_ranked(&self, drivers: &[DriverTotals]) {
            self.events
                .borrow_mut()
                .push(format!("drivers {}", drivers.len()));
        }

        fn teams_ranked(&self, teams: &[TeamTotals]) {
            self.events.borrow_mut().push(format!("teams {}", teams.len()));
        }
    }

    #[test]
    fn observer_sees_every_stage() {
        let champ = season(ChampionshipConfig::new(2)).unwrap();
        let mut source = InMemoryResultSource::new();
        source.insert("t1", "R", RawResult::finished("amy", 1, 25));
        source.insert("t2", "R", RawResult::finished("bob", 1, 25));

        let recorder = Recorder::default();
        champ.compute_observed(&source, &recorder).unwrap();
        assert_eq!(
            recorder.events.into_inner(),
            vec!["matrix 2x2", "excluded cat", "drivers 2", "teams 2"]
        );
    }

    #[test]
    fn positions_and_ranking_points() {
        let champ = season(ChampionshipConfig::new(2).with_drop_week(true)).unwrap();
        let mut source = InMemoryResultSource::new();
        source.insert("t1", "R", RawResult::finished("amy", 1, 25));
        source.insert("t1", "R", RawResult::finished("bob", 2, 18));
        source.insert("t2", "R", RawResult::finished("bob", 1, 25));
        source.insert("t2", "R", RawResult::finished("cat", 2, 18));

        let standings = champ.compute(&source).unwrap();
        let bob = DriverId::new("bob");
        assert_eq!(standings.driver_position(&bob), Some(1));
        assert_eq!(standings.ranking_points(&bob), Some(25));
        assert_eq!(standings.driver_position(&DriverId::new("nobody")), None);
        assert_eq!(standings.team_position("Blue"), Some(1));
        assert_eq!(standings.team("Red").map(|t| t.total), Some(25));
    }
}
