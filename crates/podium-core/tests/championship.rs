//! End-to-end standings runs through `Championship::compute`.

#[allow(dead_code)]
mod common;

use podium_core::championship::Championship;
use podium_core::config::ChampionshipConfig;
use podium_core::error::{IntegrityError, StandingsError};
use podium_core::roster::{DriverId, NO_TEAM};
use podium_core::series::{Session, TrackId};
use podium_core::source::{InMemoryResultSource, RawResult};
use podium_core::test_helpers::{make_roster, make_sessions, make_tracks};

use common::{finish, single_race_championship};

fn driver_order(standings: &podium_core::championship::Standings) -> Vec<&str> {
    standings.drivers.iter().map(|d| d.driver.as_str()).collect()
}

#[test]
fn equal_points_more_wins_ranks_first() {
    let champ = single_race_championship(
        ChampionshipConfig::new(3),
        &[("bee", NO_TEAM), ("ace", NO_TEAM)],
        3,
    );
    let mut source = InMemoryResultSource::new();
    source.insert("t1", "Race", RawResult::finished("ace", 1, 10));
    source.insert("t1", "Race", RawResult::finished("bee", 2, 5));
    source.insert("t2", "Race", RawResult::finished("bee", 1, 10));
    source.insert("t2", "Race", RawResult::finished("ace", 2, 5));
    source.insert("t3", "Race", RawResult::finished("ace", 1, 10));
    source.insert("t3", "Race", RawResult::finished("bee", 2, 10));

    let standings = champ.compute(&source).unwrap();
    assert_eq!(standings.drivers[0].total, 25);
    assert_eq!(standings.drivers[1].total, 25);
    assert_eq!(driver_order(&standings), vec!["ace", "bee"]);
}

#[test]
fn full_ties_keep_registration_order() {
    let champ = single_race_championship(
        ChampionshipConfig::new(1),
        &[("zed", NO_TEAM), ("amy", NO_TEAM)],
        1,
    );
    let mut source = InMemoryResultSource::new();
    source.insert("t1", "Race", RawResult::finished("amy", 11, 0));
    source.insert("t1", "Race", RawResult::finished("zed", 12, 0));

    let standings = champ.compute(&source).unwrap();
    assert_eq!(driver_order(&standings), vec!["zed", "amy"]);
}

#[test]
fn absent_drivers_appear_nowhere() {
    let champ = single_race_championship(
        ChampionshipConfig::new(2),
        &[("ghost", "Red"), ("amy", "Red"), ("bob", "Blue")],
        2,
    );
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["amy", "bob"]);
    finish(&mut source, "t2", "Race", &["bob"]);

    let standings = champ.compute(&source).unwrap();
    let ghost = DriverId::new("ghost");
    assert!(standings.driver(&ghost).is_none());
    assert!(standings.matrix.row(&ghost).is_none());
    assert!(standings.participation.iter().all(|p| p.driver != ghost));
    assert!(standings.teams.iter().all(|t| !t.members.contains(&ghost)));
    assert!(
        standings
            .team_participation
            .iter()
            .flat_map(|g| &g.drivers)
            .all(|p| p.driver != ghost)
    );
}

#[test]
fn drop_week_reorders_the_table() {
    let entries = [("amy", NO_TEAM), ("bob", NO_TEAM), ("cat", NO_TEAM)];
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["amy", "bob"]);
    finish(&mut source, "t2", "Race", &["amy", "bob"]);
    finish(&mut source, "t3", "Race", &["cat", "bob"]);

    let plain = single_race_championship(ChampionshipConfig::new(3), &entries, 3)
        .compute(&source)
        .unwrap();
    assert_eq!(driver_order(&plain), vec!["bob", "amy", "cat"]);
    assert_eq!(plain.drivers[0].total, 54);

    let dropped = single_race_championship(
        ChampionshipConfig::new(3).with_drop_week(true),
        &entries,
        3,
    )
    .compute(&source)
    .unwrap();
    assert_eq!(driver_order(&dropped), vec!["amy", "bob", "cat"]);
    let amy = dropped.driver(&DriverId::new("amy")).unwrap();
    assert_eq!(amy.drop_week, TrackId::new("t3"));
    assert_eq!(amy.total_with_drop_week, 50);
    assert_eq!(dropped.ranking_points(&DriverId::new("bob")), Some(36));
}

#[test]
fn team_standings_and_grouped_participation() {
    let champ = single_race_championship(
        ChampionshipConfig::new(1),
        &[
            ("amy", "Red"),
            ("bob", "Red"),
            ("cat", "Red"),
            ("dan", "Blue"),
            ("eve", NO_TEAM),
        ],
        1,
    );
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["cat", "dan", "amy", "eve", "bob"]);

    let standings = champ.compute(&source).unwrap();
    let teams: Vec<(&str, u32)> = standings
        .teams
        .iter()
        .map(|t| (t.team.as_str(), t.total))
        .collect();
    assert_eq!(teams, vec![("Red", 40), ("Blue", 18)]);

    let red: Vec<&str> = standings.teams[0]
        .members
        .iter()
        .map(DriverId::as_str)
        .collect();
    assert_eq!(red, vec!["cat", "amy", "bob"]);

    let groups: Vec<(&str, usize)> = standings
        .team_participation
        .iter()
        .map(|g| (g.team.as_str(), g.drivers.len()))
        .collect();
    assert_eq!(groups, vec![("Red", 3), ("Blue", 1), (NO_TEAM, 1)]);
}

#[test]
fn rounds_past_the_cut_off_are_ignored() {
    let champ = single_race_championship(
        ChampionshipConfig::new(2),
        &[("amy", NO_TEAM), ("bob", NO_TEAM)],
        3,
    );
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["amy"]);
    finish(&mut source, "t2", "Race", &["amy"]);
    finish(&mut source, "t3", "Race", &["bob"]);

    let standings = champ.compute(&source).unwrap();
    assert_eq!(standings.matrix.tracks().len(), 2);
    assert_eq!(standings.matrix.num_columns(), 2);
    assert_eq!(driver_order(&standings), vec!["amy"]);
}

#[test]
fn unknown_driver_is_rejected() {
    let champ = single_race_championship(
        ChampionshipConfig::new(1).with_scoring_drivers(1),
        &[("amy", NO_TEAM)],
        1,
    );
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["amy", "stranger"]);

    let err = champ.compute(&source).unwrap_err();
    assert_eq!(
        err,
        StandingsError::DataIntegrity(IntegrityError::UnknownDriver {
            driver: DriverId::new("stranger"),
            track: TrackId::new("t1"),
            session: "Race".to_string(),
        })
    );
}

#[test]
fn unknown_qualifier_is_rejected() {
    let champ = Championship::new(
        ChampionshipConfig::new(1).with_scoring_drivers(1),
        make_roster(&[("amy", "Red")]),
        make_tracks(1),
        vec![Session::qualifying("Qualifying"), Session::race("Race")],
    )
    .unwrap();
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Qualifying", &["ghost", "amy"]);
    finish(&mut source, "t1", "Race", &["amy"]);

    let err = champ.compute(&source).unwrap_err();
    assert_eq!(
        err,
        StandingsError::DataIntegrity(IntegrityError::UnknownDriver {
            driver: DriverId::new("ghost"),
            track: TrackId::new("t1"),
            session: "Qualifying".to_string(),
        })
    );
}

#[test]
fn participation_needs_both_races() {
    let champ = Championship::new(
        ChampionshipConfig::new(4).with_scoring_drivers(1),
        make_roster(&[("amy", NO_TEAM)]),
        make_tracks(4),
        make_sessions(),
    )
    .unwrap();
    let mut source = InMemoryResultSource::new();
    for track in ["t1", "t2", "t4"] {
        finish(&mut source, track, "Race 1", &["amy"]);
        finish(&mut source, track, "Race 2", &["amy"]);
    }
    finish(&mut source, "t3", "Race 1", &["amy"]);

    let standings = champ.compute(&source).unwrap();
    assert_eq!(standings.participation[0].weekends, vec![true, true, false, true]);
    assert_eq!(standings.participation[0].rounds, "1-2, 4");
    assert_eq!(standings.drivers[0].total, 25 * 7);
}

#[test]
fn teams_level_on_points_split_by_countback() {
    let champ = single_race_championship(
        ChampionshipConfig::new(1),
        &[("amy", "Red"), ("bob", "Blue"), ("cat", "Red"), ("dan", "Blue")],
        1,
    );
    let mut source = InMemoryResultSource::new();
    source.insert("t1", "Race", RawResult::finished("amy", 1, 10));
    source.insert("t1", "Race", RawResult::finished("bob", 2, 10));
    source.insert("t1", "Race", RawResult::finished("cat", 3, 5));
    source.insert("t1", "Race", RawResult::finished("dan", 4, 5));

    let standings = champ.compute(&source).unwrap();
    let teams: Vec<(&str, u32)> = standings
        .teams
        .iter()
        .map(|t| (t.team.as_str(), t.total))
        .collect();
    // Blue sorts first by name, the win puts Red ahead
    assert_eq!(teams, vec![("Red", 15), ("Blue", 15)]);
    assert_eq!(standings.teams[0].countback.as_slice(), &[1, 0, 1, 0]);
    assert_eq!(standings.teams[1].countback.as_slice(), &[0, 1, 0, 1]);
}

#[test]
fn identical_inputs_give_identical_output() {
    let entries = [("amy", "Red"), ("bob", "Blue"), ("cat", "Red"), ("dan", "Blue")];
    let mut source = InMemoryResultSource::new();
    finish(&mut source, "t1", "Race", &["dan", "cat", "bob", "amy"]);
    finish(&mut source, "t2", "Race", &["amy", "bob", "cat", "dan"]);

    let champ = single_race_championship(ChampionshipConfig::new(2), &entries, 2);
    let first = champ.compute(&source).unwrap();
    let second = champ.compute(&source).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
