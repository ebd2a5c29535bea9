use serde::Serialize;

use crate::countback::Countback;
use crate::matrix::PointsMatrix;
use crate::ranking::Ranked;
use crate::result::ResultRecord;
use crate::roster::DriverId;
use crate::scoring::sum_points;
use crate::series::TrackId;

/// Championship totals for one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverTotals {
    pub driver: DriverId,
    /// Points per weekend, aligned with the matrix tracks.
    pub weekend_totals: Vec<u32>,
    /// Round index (0-based) of the lowest-scoring weekend.
    pub drop_round: usize,
    pub drop_week: TrackId,
    pub total: u32,
    pub total_with_drop_week: u32,
    pub countback: Countback,
}

impl DriverTotals {
    pub fn weekend_total(&self, round: usize) -> u32 {
        self.weekend_totals.get(round).copied().unwrap_or(0)
    }

    /// Points removed by the drop-week rule.
    pub fn dropped_points(&self) -> u32 {
        self.total.saturating_sub(self.total_with_drop_week)
    }

    /// Weekend scores with the drop week zeroed out.
    pub fn weekend_totals_with_drop_week(&self) -> Vec<u32> {
        let mut weekends = self.weekend_totals.clone();
        if let Some(dropped) = weekends.get_mut(self.drop_round) {
            *dropped = 0;
        }
        weekends
    }
}

impl Ranked for DriverTotals {
    fn total(&self) -> u32 {
        self.total
    }

    fn total_with_drop_week(&self) -> u32 {
        self.total_with_drop_week
    }

    fn countback(&self) -> &Countback {
        &self.countback
    }
}

/// Index of the first weekend holding the strictly smallest score.
pub fn lowest_weekend(weekend_totals: &[u32]) -> usize {
    let mut lowest = 0;
    for (round, &points) in weekend_totals.iter().enumerate().skip(1) {
        if points < weekend_totals[lowest] {
            lowest = round;
        }
    }
    lowest
}

/// Reduce every matrix row to weekend totals, drop week and countback.
///
/// `positions` is the countback length, normally the roster size. Rows come
/// back in matrix order.
pub fn calculate_driver_totals(matrix: &PointsMatrix, positions: usize) -> Vec<DriverTotals> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            let weekend_totals: Vec<u32> = matrix
                .weekends(row)
                .map(|weekend| sum_points(weekend.iter().map(ResultRecord::total_points)))
                .collect();
            let total = sum_points(weekend_totals.iter().copied());
            let drop_round = lowest_weekend(&weekend_totals);
            let dropped = weekend_totals.get(drop_round).copied().unwrap_or(0);
            DriverTotals {
                driver: row.driver.clone(),
                drop_round,
                drop_week: matrix.tracks()[drop_round].clone(),
                total,
                total_with_drop_week: total.saturating_sub(dropped),
                countback: Countback::from_records(&row.cells, positions),
                weekend_totals,
            }
        })
        .collect()
}
