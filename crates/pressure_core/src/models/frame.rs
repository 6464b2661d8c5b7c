//! Tracking frame records (one JSON object per line in the tracking feed).

use serde::{Deserialize, Serialize};

use super::metadata::PlayerId;
use crate::geometry::{Located, Position};

/// Which roster a player belongs to in the tracking feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Raw `lastTouch` value. Dead frames may carry anything here (e.g.
/// `"none"`), so only live frames hold it to `home`/`away`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastTouch {
    Side(Side),
    Other(serde_json::Value),
}

impl LastTouch {
    pub fn side(&self) -> Option<Side> {
        match self {
            LastTouch::Side(side) => Some(*side),
            LastTouch::Other(_) => None,
        }
    }
}

impl From<Side> for LastTouch {
    fn from(side: Side) -> Self {
        LastTouch::Side(side)
    }
}

/// A player's position within a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerObservation {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub xyz: Position,
}

impl Located for PlayerObservation {
    fn position(&self) -> Position {
        self.xyz
    }
}

/// Ball state. `xyz` is null while the ball is out of play or untracked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallObservation {
    #[serde(default)]
    pub xyz: Option<Position>,
}

/// One sample of the match state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub frame_idx: u64,
    /// Unix time (ms)
    pub wall_clock: i64,
    pub period: u32,
    /// Seconds since period start
    pub game_clock: f64,
    pub live: bool,
    /// Only checked on live frames; the processor enforces it there.
    #[serde(default)]
    pub last_touch: Option<LastTouch>,
    pub ball: BallObservation,
    pub home_players: Vec<PlayerObservation>,
    pub away_players: Vec<PlayerObservation>,
}

impl Frame {
    pub fn roster(&self, side: Side) -> &[PlayerObservation] {
        match side {
            Side::Home => &self.home_players,
            Side::Away => &self.away_players,
        }
    }

    /// Ball position if the frame is live and the ball is tracked.
    pub fn live_ball(&self) -> Option<Position> {
        if self.live {
            self.ball.xyz
        } else {
            None
        }
    }
}
