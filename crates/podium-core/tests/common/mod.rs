use podium_core::championship::Championship;
use podium_core::config::ChampionshipConfig;
use podium_core::series::Session;
use podium_core::source::InMemoryResultSource;
use podium_core::test_helpers::{f1_points, make_roster, make_tracks, record_finish};

/// One race per weekend, no qualifying.
pub fn single_race_championship(
    config: ChampionshipConfig,
    entries: &[(&str, &str)],
    num_tracks: usize,
) -> Championship {
    Championship::new(
        config,
        make_roster(entries),
        make_tracks(num_tracks),
        vec![Session::race("Race")],
    )
    .unwrap()
}

/// Insert a finishing order scored from the standard table.
pub fn finish(source: &mut InMemoryResultSource, track: &str, session: &str, order: &[&str]) {
    record_finish(source, track, session, order, &f1_points());
}
