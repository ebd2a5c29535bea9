use serde::{Deserialize, Serialize};

/// Points awarded by classification position.
///
/// Index 0 is P1. Positions past the end of a list score nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsTable {
    pub race: Vec<u32>,
    pub qualifying: Vec<u32>,
}

impl PointsTable {
    pub fn new(race: Vec<u32>, qualifying: Vec<u32>) -> Self {
        Self { race, qualifying }
    }

    pub fn race_points(&self, pos: u32) -> u32 {
        lookup(&self.race, pos)
    }

    pub fn quali_points(&self, pos: u32) -> u32 {
        lookup(&self.qualifying, pos)
    }
}

/// Sum of points, capped at `u32::MAX` instead of overflowing.
pub fn sum_points(points: impl IntoIterator<Item = u32>) -> u32 {
    points.into_iter().fold(0, u32::saturating_add)
}

fn lookup(table: &[u32], pos: u32) -> u32 {
    if pos == 0 {
        return 0;
    }
    table.get(pos as usize - 1).copied().unwrap_or(0)
}
