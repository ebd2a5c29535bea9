use std::collections::BTreeMap;

use serde::Serialize;

use crate::countback::Countback;
use crate::ranking::Ranked;
use crate::roster::{DriverId, NO_TEAM, Roster};
use crate::scoring::sum_points;
use crate::totals::DriverTotals;

/// Championship totals for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    pub team: String,
    /// Members in driver standing order.
    pub members: Vec<DriverId>,
    /// Team score per weekend: the best N member scores that weekend.
    pub weekend_totals: Vec<u32>,
    /// As above with every member's own drop week zeroed first.
    pub weekend_totals_with_drop_week: Vec<u32>,
    pub total: u32,
    pub total_with_drop_week: u32,
    pub countback: Countback,
}

impl Ranked for TeamTotals {
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

/// Sum of the `n` best scores. Ties keep input order, so with scores given
/// in driver standing order the better-placed driver is the one counted.
pub fn best_n_sum(scores: &[u32], n: usize) -> u32 {
    let mut ranked: Vec<u32> = scores.to_vec();
    ranked.sort_by(|a, b| b.cmp(a));
    sum_points(ranked.into_iter().take(n))
}

/// Per-weekend team scores from member weekend scores.
///
/// `members` holds one weekend vector per driver, in standing order.
fn weekend_team_scores(members: &[Vec<u32>], scoring_drivers: usize) -> Vec<u32> {
    let weekends = members.iter().map(Vec::len).max().unwrap_or(0);
    (0..weekends)
        .map(|round| {
            let scores: Vec<u32> = members
                .iter()
                .map(|weekends| weekends.get(round).copied().unwrap_or(0))
                .collect();
            best_n_sum(&scores, scoring_drivers)
        })
        .collect()
}

/// Aggregate ranked driver totals into team totals.
///
/// `drivers` must already be in standing order; member lists and countback
/// merging follow it. Drivers on the no-team marker are skipped. Teams come
/// back in name order, unsorted by score.
pub fn calculate_team_totals(
    drivers: &[DriverTotals],
    roster: &Roster,
    scoring_drivers: usize,
) -> Vec<TeamTotals> {
    let mut by_team: BTreeMap<&str, Vec<&DriverTotals>> = BTreeMap::new();
    for totals in drivers {
        match roster.team_of(&totals.driver) {
            Some(team) if team != NO_TEAM => by_team.entry(team).or_default().push(totals),
            _ => {},
        }
    }

    by_team
        .into_iter()
        .map(|(team, members)| {
            let plain: Vec<Vec<u32>> = members.iter().map(|d| d.weekend_totals.clone()).collect();
            let dropped: Vec<Vec<u32>> = members
                .iter()
                .map(|d| d.weekend_totals_with_drop_week())
                .collect();
            let weekend_totals = weekend_team_scores(&plain, scoring_drivers);
            let weekend_totals_with_drop_week = weekend_team_scores(&dropped, scoring_drivers);
            TeamTotals {
                team: team.to_string(),
                members: members.iter().map(|d| d.driver.clone()).collect(),
                total: sum_points(weekend_totals.iter().copied()),
                total_with_drop_week: sum_points(weekend_totals_with_drop_week.iter().copied()),
                countback: Countback::merged(members.iter().map(|d| &d.countback)),
                weekend_totals,
                weekend_totals_with_drop_week,
            }
        })
        .collect()
}
