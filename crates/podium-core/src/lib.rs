pub mod championship;
pub mod config;
pub mod countback;
pub mod error;
pub mod matrix;
pub mod observer;
pub mod participation;
pub mod ranking;
pub mod result;
pub mod roster;
pub mod scoring;
pub mod series;
pub mod source;
pub mod teams;
pub mod totals;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::roster::{Driver, Roster};
    use crate::scoring::PointsTable;
    use crate::series::{Session, TrackId};
    use crate::source::{InMemoryResultSource, RawResult};

    /// Build a roster from `(id, team)` pairs, in order.
    pub fn make_roster(entries: &[(&str, &str)]) -> Roster {
        let drivers = entries
            .iter()
            .map(|&(id, team)| Driver::new(id, team))
            .collect();
        Roster::new(drivers).expect("test roster has duplicate ids")
    }

    /// Tracks `t1..=tn`.
    pub fn make_tracks(n: usize) -> Vec<TrackId> {
        (1..=n).map(|i| TrackId::new(format!("t{i}"))).collect()
    }

    /// A qualifying session followed by two races.
    pub fn make_sessions() -> Vec<Session> {
        vec![
            Session::qualifying("Qualifying"),
            Session::race("Race 1"),
            Session::race("Race 2"),
        ]
    }

    /// Top-ten race points with three qualifying places.
    pub fn f1_points() -> PointsTable {
        PointsTable::new(vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1], vec![3, 2, 1])
    }

    /// Record a finishing order for one session, scoring it with `points`.
    /// Grid order is taken to equal the finishing order.
    pub fn record_finish(
        source: &mut InMemoryResultSource,
        track: &str,
        session: &str,
        order: &[&str],
        points: &PointsTable,
    ) {
        for (i, driver) in order.iter().enumerate() {
            let pos = i as u32 + 1;
            source.insert(
                track,
                session,
                RawResult::finished(driver, pos, points.race_points(pos)).with_grid(pos, 0),
            );
        }
    }
}
