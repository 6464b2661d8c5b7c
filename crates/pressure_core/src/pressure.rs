//! On-ball pressure detection for a single frame.
//!
//! ## Algorithm
//! 1. Every defender whose distance to the ball is strictly below the radius
//!    pressures the ball.
//! 2. The player on the ball is the possessing side's player closest to it.
//! 3. One row per pressuring defender, in defending roster order.

use serde::Serialize;

use crate::context::MatchContext;
use crate::error::{PressureError, Result};
use crate::geometry::{closest_to_ball, distance, Position};
use crate::models::{Frame, JerseyNumber, PlayerId, PlayerObservation, Side};

/// Player columns of a report row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerBlock {
    /// Team the row attributes the player to
    pub team: String,
    pub name: String,
    pub number: JerseyNumber,
    pub player_id: PlayerId,
}

/// One defender pressuring the ball in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureEventRow {
    pub frame_idx: u64,
    pub wall_clock: i64,
    pub period: u32,
    pub game_clock: f64,
    /// `None` when the possessing roster was empty
    pub possessor: Option<PlayerBlock>,
    pub defender: PlayerBlock,
    /// Defender to ball, tracking units
    pub distance_to_ball: f64,
}

fn player_block(
    ctx: &MatchContext,
    frame: &Frame,
    player: &PlayerObservation,
    side: Side,
) -> Result<PlayerBlock> {
    let identity = ctx
        .identity(&player.player_id)
        .ok_or_else(|| PressureError::UnknownPlayer {
            player_id: player.player_id.clone(),
            frame_idx: frame.frame_idx,
        })?;

    Ok(PlayerBlock {
        team: ctx.team_name(side).to_string(),
        name: identity.name.clone(),
        number: identity.number.clone(),
        player_id: player.player_id.clone(),
    })
}

fn possessor_block(
    ctx: &MatchContext,
    frame: &Frame,
    ball: Position,
    possessing: Side,
) -> Result<Option<PlayerBlock>> {
    match closest_to_ball(frame.roster(possessing), ball) {
        Some(closest) => player_block(ctx, frame, closest.item, possessing).map(Some),
        None => {
            tracing::warn!(
                frame_idx = frame.frame_idx,
                side = possessing.as_str(),
                "possessing roster is empty; emitting rows without a possessor"
            );
            Ok(None)
        }
    }
}

/// Rows for every defender pressuring the ball in `frame`.
///
/// `ball` is the frame's ball position and `possessing` the side credited
/// with the last touch. The possessor is looked up once, on the first
/// qualifying defender.
pub fn detect_pressure(
    ctx: &MatchContext,
    frame: &Frame,
    ball: Position,
    possessing: Side,
) -> Result<Vec<PressureEventRow>> {
    let defending = possessing.opponent();
    let radius = ctx.radius();

    let mut rows = Vec::new();
    let mut possessor: Option<Option<PlayerBlock>> = None;

    for defender in frame.roster(defending) {
        let dist = distance(defender.xyz, ball);
        if dist >= radius || dist.is_nan() {
            continue;
        }

        if possessor.is_none() {
            possessor = Some(possessor_block(ctx, frame, ball, possessing)?);
        }

        rows.push(PressureEventRow {
            frame_idx: frame.frame_idx,
            wall_clock: frame.wall_clock,
            period: frame.period,
            game_clock: frame.game_clock,
            possessor: possessor.clone().flatten(),
            defender: player_block(ctx, frame, defender, defending)?,
            distance_to_ball: dist,
        });
    }

    Ok(rows)
}
