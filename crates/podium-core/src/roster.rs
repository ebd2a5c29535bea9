use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IntegrityError;

/// Team name reserved for drivers without a team. Never scored as a team.
pub const NO_TEAM: &str = "Independent";

/// Driver identifier as it appears on result sheets (the in-game name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub String);

impl DriverId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DriverId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A registered driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    /// Display name; falls back to the id when empty.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default = "default_team")]
    pub team: String,
}

fn default_team() -> String {
    NO_TEAM.to_string()
}

impl Driver {
    pub fn new(id: impl AsRef<str>, team: impl Into<String>) -> Self {
        Self {
            id: DriverId::new(id),
            name: String::new(),
            number: None,
            flag: None,
            team: team.into(),
        }
    }

    pub fn independent(id: impl AsRef<str>) -> Self {
        Self::new(id, NO_TEAM)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }

    pub fn has_team(&self) -> bool {
        self.team != NO_TEAM
    }
}

/// Ordered driver registry. Registration order is the order standings fall
/// back to when neither points nor countback separate two drivers.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    drivers: Vec<Driver>,
    index: HashMap<DriverId, usize>,
}

impl Roster {
    pub fn new(drivers: Vec<Driver>) -> Result<Self, IntegrityError> {
        let mut index = HashMap::with_capacity(drivers.len());
        for (i, driver) in drivers.iter().enumerate() {
            if index.insert(driver.id.clone(), i).is_some() {
                return Err(IntegrityError::DuplicateDriver(driver.id.clone()));
            }
        }
        Ok(Self { drivers, index })
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter()
    }

    pub fn get(&self, id: &DriverId) -> Option<&Driver> {
        self.index.get(id).map(|&i| &self.drivers[i])
    }

    pub fn contains(&self, id: &DriverId) -> bool {
        self.index.contains_key(id)
    }

    pub fn team_of(&self, id: &DriverId) -> Option<&str> {
        self.get(id).map(|d| d.team.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_preserves_registration_order() {
        let roster = Roster::new(vec![
            Driver::new("zed", "Red"),
            Driver::new("amy", "Blue"),
            Driver::independent("bob"),
        ])
        .unwrap();
        let ids: Vec<&str> = roster.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["zed", "amy", "bob"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn roster_rejects_duplicate_ids() {
        let err = Roster::new(vec![Driver::new("amy", "Red"), Driver::new("amy", "Blue")])
            .unwrap_err();
        assert_eq!(err, IntegrityError::DuplicateDriver(DriverId::new("amy")));
    }

    #[test]
    fn team_lookup() {
        let roster = Roster::new(vec![Driver::new("amy", "Red"), Driver::independent("bob")])
            .unwrap();
        assert_eq!(roster.team_of(&DriverId::new("amy")), Some("Red"));
        assert_eq!(roster.team_of(&DriverId::new("bob")), Some(NO_TEAM));
        assert_eq!(roster.team_of(&DriverId::new("cat")), None);
        assert!(!roster.get(&DriverId::new("bob")).unwrap().has_team());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut driver = Driver::new("fast_amy", "Red");
        assert_eq!(driver.display_name(), "fast_amy");
        driver.name = "Amy Fast".to_string();
        assert_eq!(driver.display_name(), "Amy Fast");
    }

    #[test]
    fn driver_missing_team_defaults_to_independent() {
        let driver: Driver = serde_json::from_str(r#"{"id":"bob"}"#).unwrap();
        assert_eq!(driver.team, NO_TEAM);
        assert!(driver.number.is_none());
    }
}
