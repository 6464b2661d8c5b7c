//! Input records: tracking frames and match metadata.

pub mod frame;
pub mod metadata;

pub use frame::{BallObservation, Frame, LastTouch, PlayerObservation, Side};
pub use metadata::{
    IdentityIndex, JerseyNumber, MatchMetadata, MatchTeams, PlayerId, PlayerIdentity,
    RosterEntry, TextOrNumber,
};
