use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a track (one championship round).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Qualifying,
    Race,
}

/// A named session of a race weekend, e.g. `"Qualify result"` or `"Race 2 result"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub kind: SessionKind,
}

impl Session {
    pub fn race(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SessionKind::Race,
        }
    }

    pub fn qualifying(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SessionKind::Qualifying,
        }
    }

    pub fn is_race(&self) -> bool {
        self.kind == SessionKind::Race
    }
}

/// Race session names in weekend order. Only these become points-matrix columns.
pub fn race_sessions(sessions: &[Session]) -> Vec<&str> {
    sessions
        .iter()
        .filter(|s| s.is_race())
        .map(|s| s.name.as_str())
        .collect()
}

/// Whether the grid of `race` is set by a qualifying session, which is the
/// case when the session immediately before it in the weekend is qualifying.
/// Otherwise the grid comes from the previous race and carries no points.
pub fn grid_from_qualifying(sessions: &[Session], race: &str) -> bool {
    let Some(idx) = sessions.iter().position(|s| s.name == race) else {
        return false;
    };
    idx > 0 && sessions[idx - 1].kind == SessionKind::Qualifying
}
