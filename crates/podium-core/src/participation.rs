use serde::Serialize;

use crate::matrix::{MatrixRow, PointsMatrix};
use crate::result::ResultRecord;
use crate::roster::{DriverId, NO_TEAM, Roster};
use crate::teams::TeamTotals;

/// Which weekends a driver completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipationRecord {
    pub driver: DriverId,
    pub weekends: Vec<bool>,
    /// Contiguous 1-based round ranges, e.g. `"1-3, 5"`.
    pub rounds: String,
}

/// Drivers of one team in standing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamParticipation {
    pub team: String,
    pub drivers: Vec<ParticipationRecord>,
}

/// A weekend counts only when every race session of it was attended.
pub fn weekend_participation(matrix: &PointsMatrix, row: &MatrixRow) -> Vec<bool> {
    matrix
        .weekends(row)
        .map(|weekend| weekend.iter().all(ResultRecord::participated))
        .collect()
}

/// Collapse weekend flags into maximal round ranges.
///
/// `[true, true, false, true]` gives `"1-2, 4"`.
pub fn format_round_ranges(weekends: &[bool]) -> String {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;
    for (i, &attended) in weekends.iter().enumerate() {
        match (attended, start) {
            (true, None) => start = Some(i + 1),
            (false, Some(first)) => {
                ranges.push(range_label(first, i));
                start = None;
            },
            _ => {},
        }
    }
    if let Some(first) = start {
        ranges.push(range_label(first, weekends.len()));
    }
    ranges.join(", ")
}

fn range_label(first: usize, last: usize) -> String {
    if first == last {
        first.to_string()
    } else {
        format!("{first}-{last}")
    }
}

/// Participation for every matrix row, in matrix order.
pub fn track_participation(matrix: &PointsMatrix) -> Vec<ParticipationRecord> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            let weekends = weekend_participation(matrix, row);
            ParticipationRecord {
                driver: row.driver.clone(),
                rounds: format_round_ranges(&weekends),
                weekends,
            }
        })
        .collect()
}

/// Group participation by team.
///
/// Teams follow `teams` (standing order), drivers keep the order of
/// `records`. Drivers on the no-team marker form a trailing group when
/// there are any.
pub fn group_by_team(
    records: &[ParticipationRecord],
    teams: &[TeamTotals],
    roster: &Roster,
) -> Vec<TeamParticipation> {
    let members_of = |team: &str| -> Vec<ParticipationRecord> {
        records
            .iter()
            .filter(|r| roster.team_of(&r.driver) == Some(team))
            .cloned()
            .collect()
    };

    let mut groups: Vec<TeamParticipation> = teams
        .iter()
        .map(|t| TeamParticipation {
            team: t.team.clone(),
            drivers: members_of(&t.team),
        })
        .collect();

    let independents = members_of(NO_TEAM);
    if !independents.is_empty() {
        groups.push(TeamParticipation {
            team: NO_TEAM.to_string(),
            drivers: independents,
        });
    }
    groups
}
