use crate::roster::DriverId;
use crate::teams::TeamTotals;
use crate::totals::DriverTotals;

/// Progress hooks for a standings run. Every method defaults to doing nothing.
pub trait StandingsObserver {
    fn matrix_built(&self, _drivers: usize, _columns: usize) {}

    /// A roster driver with no participated session was left out.
    fn driver_excluded(&self, _driver: &DriverId) {}

    fn drivers_ranked(&self, _drivers: &[DriverTotals]) {}

    fn teams_ranked(&self, _teams: &[TeamTotals]) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StandingsObserver for NoopObserver {}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StandingsObserver for TracingObserver {
    fn matrix_built(&self, drivers: usize, columns: usize) {
        tracing::info!(drivers, columns, "Points matrix built");
    }

    fn driver_excluded(&self, driver: &DriverId) {
        tracing::debug!(%driver, "Driver excluded, no sessions attended");
    }

    fn drivers_ranked(&self, drivers: &[DriverTotals]) {
        if let Some(leader) = drivers.first() {
            tracing::info!(
                drivers = drivers.len(),
                leader = %leader.driver,
                points = leader.total,
                "Driver standings ranked"
            );
        }
    }

    fn teams_ranked(&self, teams: &[TeamTotals]) {
        match teams.first() {
            Some(leader) => tracing::info!(
                teams = teams.len(),
                leader = %leader.team,
                points = leader.total,
                "Team standings ranked"
            ),
            None => tracing::debug!("No teams to rank"),
        }
    }
}
