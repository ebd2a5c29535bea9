use std::str::FromStr;

use podium_core::championship::Standings;
use podium_core::roster::{DriverId, Roster};

use crate::error::CliError;
use crate::season::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Usage(format!(
                "unknown format {other}, expected text or json"
            ))),
        }
    }
}

pub fn render(
    standings: &Standings,
    season: &Season,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(standings, season)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(standings)?),
    }
}

/// Driver, team and participation tables as plain text.
pub fn render_text(standings: &Standings, season: &Season) -> String {
    let mut out = Vec::new();
    out.extend(round_legend(standings, season));
    out.push(String::new());
    out.extend(driver_table(standings, season.championship.roster()));
    if !standings.teams.is_empty() {
        out.push(String::new());
        out.extend(team_table(standings, season.championship.roster()));
    }
    out.push(String::new());
    out.extend(participation_table(standings, season.championship.roster()));
    out.join("\n") + "\n"
}

fn display_name<'a>(roster: &'a Roster, driver: &'a DriverId) -> &'a str {
    roster
        .get(driver)
        .map_or(driver.as_str(), |d| d.display_name())
}

fn round_legend(standings: &Standings, season: &Season) -> Vec<String> {
    let mut lines = vec!["Rounds".to_string()];
    for (round, track) in standings.matrix.tracks().iter().enumerate() {
        lines.push(format!("  {:>2}  {}", round + 1, season.track_name(track)));
    }
    lines
}

fn driver_table(standings: &Standings, roster: &Roster) -> Vec<String> {
    let names: Vec<&str> = standings
        .drivers
        .iter()
        .map(|d| display_name(roster, &d.driver))
        .collect();
    let name_width = names.iter().map(|n| n.len()).max().unwrap_or(0).max(6);
    let sessions = standings.matrix.sessions().len();

    let mut header = format!("{:>3}  {:<name_width$}", "Pos", "Driver");
    for round in 1..=standings.matrix.tracks().len() {
        for race in 1..=sessions {
            header.push_str(&format!(" {:>5}", format!("{round}.{race}")));
        }
    }
    header.push_str(&format!(" {:>6}", "Total"));
    if standings.drop_week {
        header.push_str(&format!(" {:>6} {:>4}", "Drop", "Week"));
    }

    let mut lines = vec!["Drivers".to_string(), header];
    for (i, (totals, name)) in standings.drivers.iter().zip(&names).enumerate() {
        let mut line = format!("{:>3}  {:<name_width$}", i + 1, name);
        if let Some(row) = standings.matrix.row(&totals.driver) {
            for cell in &row.cells {
                line.push_str(&format!(" {cell:>5}"));
            }
        }
        line.push_str(&format!(" {:>6}", totals.total));
        if standings.drop_week {
            line.push_str(&format!(
                " {:>6} {:>4}",
                totals.total_with_drop_week,
                totals.drop_round + 1
            ));
        }
        lines.push(line);
    }
    lines
}

fn team_table(standings: &Standings, roster: &Roster) -> Vec<String> {
    let width = standings
        .teams
        .iter()
        .map(|t| t.team.len())
        .max()
        .unwrap_or(0)
        .max(4);
    let mut header = format!("{:>3}  {:<width$} {:>6}", "Pos", "Team", "Total");
    if standings.drop_week {
        header.push_str(&format!(" {:>6}", "Drop"));
    }
    header.push_str("  Drivers");

    let mut lines = vec!["Teams".to_string(), header];
    for (i, team) in standings.teams.iter().enumerate() {
        let mut line = format!("{:>3}  {:<width$} {:>6}", i + 1, team.team, team.total);
        if standings.drop_week {
            line.push_str(&format!(" {:>6}", team.total_with_drop_week));
        }
        let members: Vec<&str> = team
            .members
            .iter()
            .map(|m| display_name(roster, m))
            .collect();
        line.push_str(&format!("  {}", members.join(", ")));
        lines.push(line);
    }
    lines
}

fn participation_table(standings: &Standings, roster: &Roster) -> Vec<String> {
    let mut lines = vec!["Participation".to_string()];
    for group in &standings.team_participation {
        lines.push(format!("  {}", group.team));
        for record in &group.drivers {
            let rounds = if record.rounds.is_empty() {
                "-"
            } else {
                record.rounds.as_str()
            };
            lines.push(format!(
                "    {:<24} {}",
                display_name(roster, &record.driver),
                rounds
            ));
        }
    }
    lines
}
