//! Match context - team names, player identities and the pressure radius.
//!
//! Built once before the tracking stream is read and shared read-only by
//! every frame evaluation.

use crate::config::PressureConfig;
use crate::error::Result;
use crate::models::{IdentityIndex, MatchMetadata, PlayerId, PlayerIdentity, Side};

#[derive(Debug, Clone)]
pub struct MatchContext {
    home_team: String,
    away_team: String,
    match_date: Option<String>,
    identities: IdentityIndex,
    radius: f64,
}

impl MatchContext {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        identities: IdentityIndex,
        config: &PressureConfig,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            match_date: None,
            identities,
            radius: config.radius(),
        }
    }

    pub fn from_metadata(metadata: &MatchMetadata, config: &PressureConfig) -> Result<Self> {
        let teams = metadata.teams()?;
        let identities = IdentityIndex::from_metadata(metadata, &teams);

        tracing::debug!(
            home = %teams.home,
            away = %teams.away,
            players = identities.len(),
            "match context loaded"
        );

        Ok(Self {
            home_team: teams.home,
            away_team: teams.away,
            match_date: teams.date,
            identities,
            radius: config.radius(),
        })
    }

    /// Team name for a roster side. Metadata may assign either club to
    /// either side, so this is the only place the two are linked.
    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn match_date(&self) -> Option<&str> {
        self.match_date.as_deref()
    }

    pub fn identity(&self, id: &PlayerId) -> Option<&PlayerIdentity> {
        self.identities.get(id)
    }

    pub fn identities(&self) -> &IdentityIndex {
        &self.identities
    }

    /// Pressure radius in tracking units.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_per_side() {
        let metadata = MatchMetadata::from_json(
            r#"{"description": "NSH - ATL : 2020-09-12", "homePlayers": [], "awayPlayers": []}"#,
        )
        .unwrap();
        let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default()).unwrap();

        assert_eq!(ctx.team_name(Side::Home), "NSH");
        assert_eq!(ctx.team_name(Side::Away), "ATL");
        assert_eq!(ctx.match_date(), Some("2020-09-12"));
        assert!(ctx.identities().is_empty());
        assert!((ctx.radius() - 4.572).abs() < 1e-3);
    }
}
