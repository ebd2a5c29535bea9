use std::fmt;

use serde::{Deserialize, Serialize};

/// A single driver's outcome in one session.
///
/// The default value is the "no data" record: no finishing position, no grid
/// slot, zero points. Missing cells in the points matrix are filled with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Classified finishing position, 1-based.
    pub finish_pos: Option<u32>,
    pub race_points: u32,
    /// Starting position; `None` when the driver did not qualify.
    pub grid_pos: Option<u32>,
    pub quali_points: u32,
    pub dnf: bool,
}

impl ResultRecord {
    pub fn new(
        finish_pos: Option<u32>,
        race_points: u32,
        grid_pos: Option<u32>,
        quali_points: u32,
        dnf: bool,
    ) -> Self {
        Self {
            finish_pos,
            race_points,
            grid_pos,
            quali_points,
            dnf,
        }
    }

    /// The record used when the result source has nothing for a cell.
    pub fn not_participated() -> Self {
        Self::default()
    }

    /// A driver took part if they either started from the grid or were classified.
    pub fn participated(&self) -> bool {
        self.finish_pos.is_some() || self.grid_pos.is_some()
    }

    pub fn total_points(&self) -> u32 {
        self.race_points.saturating_add(self.quali_points)
    }

    pub fn finished_in(&self, pos: u32) -> bool {
        self.finish_pos == Some(pos)
    }
}

/// Short cell label used by table writers: `NP`, `DNF` or the points scored.
impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.participated() {
            f.pad("NP")
        } else if self.dnf {
            f.pad("DNF")
        } else {
            f.pad(&self.total_points().to_string())
        }
    }
}
