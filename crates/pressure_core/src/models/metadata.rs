//! Match metadata file: team names and rosters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{PressureError, Result};

/// Raw id value. Feeds are not consistent about encoding ids as strings or
/// integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Stable player identifier shared by metadata and tracking records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "TextOrNumber")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TextOrNumber> for PlayerId {
    fn from(value: TextOrNumber) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shirt number, kept as text for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TextOrNumber")]
pub struct JerseyNumber(String);

impl JerseyNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TextOrNumber> for JerseyNumber {
    fn from(value: TextOrNumber) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Roster entry as it appears in the metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub opta_id: PlayerId,
    pub name: String,
    pub number: JerseyNumber,
}

/// Parsed metadata file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    /// e.g. "NSH - ATL : 2020-09-12"
    pub description: String,
    pub home_players: Vec<RosterEntry>,
    pub away_players: Vec<RosterEntry>,
}

/// Team names pulled out of the metadata description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTeams {
    pub home: String,
    pub away: String,
    pub date: Option<String>,
}

impl MatchMetadata {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| PressureError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PressureError::MalformedMetadata(e.to_string()))
    }

    /// Split the description into team names and date.
    ///
    /// Token 0 is the home team, token 2 the away team and token 4 (if
    /// present) the match date.
    pub fn teams(&self) -> Result<MatchTeams> {
        let tokens: Vec<&str> = self.description.split_whitespace().collect();

        if tokens.len() < 3 {
            return Err(PressureError::MalformedMetadata(format!(
                "description '{}' does not name both teams",
                self.description
            )));
        }

        Ok(MatchTeams {
            home: tokens[0].to_string(),
            away: tokens[2].to_string(),
            date: tokens.get(4).map(|d| d.to_string()),
        })
    }
}

/// Display data for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub team: String,
    pub name: String,
    pub number: JerseyNumber,
}

/// Player lookup by id, built once from metadata.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    players: FxHashMap<PlayerId, PlayerIdentity>,
}

impl IdentityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from both rosters. A later entry with the same id
    /// replaces the earlier one (away after home).
    pub fn from_metadata(metadata: &MatchMetadata, teams: &MatchTeams) -> Self {
        let mut index = Self::new();

        for entry in &metadata.home_players {
            index.insert_entry(entry, &teams.home);
        }
        for entry in &metadata.away_players {
            index.insert_entry(entry, &teams.away);
        }

        index
    }

    fn insert_entry(&mut self, entry: &RosterEntry, team: &str) {
        let identity = PlayerIdentity {
            team: team.to_string(),
            name: entry.name.clone(),
            number: entry.number.clone(),
        };
        if self.insert(entry.opta_id.clone(), identity).is_some() {
            tracing::debug!("duplicate roster id {} in metadata", entry.opta_id);
        }
    }

    pub fn insert(&mut self, id: PlayerId, identity: PlayerIdentity) -> Option<PlayerIdentity> {
        self.players.insert(id, identity)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerIdentity> {
        self.players.get(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = r#"{
        "description": "NSH - ATL : 2020-09-12",
        "homePlayers": [
            {"optaId": "101", "name": "Dax McCarty", "number": 6, "position": "CM"},
            {"optaId": "102", "name": "Walker Zimmerman", "number": 25}
        ],
        "awayPlayers": [
            {"optaId": 201, "name": "Jeff Larentowicz", "number": "5"}
        ]
    }"#;

    #[test]
    fn test_teams_from_description() {
        let metadata = MatchMetadata::from_json(METADATA).unwrap();
        let teams = metadata.teams().unwrap();

        assert_eq!(teams.home, "NSH");
        assert_eq!(teams.away, "ATL");
        assert_eq!(teams.date.as_deref(), Some("2020-09-12"));
    }

    #[test]
    fn test_description_without_date() {
        let mut metadata = MatchMetadata::from_json(METADATA).unwrap();
        metadata.description = "NSH vs ATL".to_string();

        let teams = metadata.teams().unwrap();
        assert_eq!(teams.away, "ATL");
        assert_eq!(teams.date, None);
    }

    #[test]
    fn test_short_description_is_error() {
        let mut metadata = MatchMetadata::from_json(METADATA).unwrap();
        metadata.description = "NSH".to_string();

        let err = metadata.teams().unwrap_err();
        assert!(matches!(err, PressureError::MalformedMetadata(_)));
    }

    #[test]
    fn test_identity_index() {
        let metadata = MatchMetadata::from_json(METADATA).unwrap();
        let teams = metadata.teams().unwrap();
        let index = IdentityIndex::from_metadata(&metadata, &teams);

        assert_eq!(index.len(), 3);

        let home = index.get(&PlayerId::new("101")).unwrap();
        assert_eq!(home.team, "NSH");
        assert_eq!(home.name, "Dax McCarty");
        assert_eq!(home.number.as_str(), "6");

        // Integer opta id and string shirt number both normalize to text
        let away = index.get(&PlayerId::new("201")).unwrap();
        assert_eq!(away.team, "ATL");
        assert_eq!(away.number.as_str(), "5");

        assert!(index.get(&PlayerId::new("999")).is_none());
    }

    #[test]
    fn test_missing_roster_is_malformed() {
        let err = MatchMetadata::from_json(r#"{"description": "A - B"}"#).unwrap_err();
        assert!(matches!(err, PressureError::MalformedMetadata(_)));
    }
}
