use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum PressureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("Malformed tracking record at line {line}: {source}")]
    MalformedFrame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Frame {frame_idx} is missing required field `{field}`")]
    MissingField { frame_idx: u64, field: &'static str },

    #[error("Frame {frame_idx} has invalid `{field}`: {value}")]
    InvalidField {
        frame_idx: u64,
        field: &'static str,
        value: String,
    },

    #[error("Unknown player id {player_id} in frame {frame_idx}")]
    UnknownPlayer { player_id: PlayerId, frame_idx: u64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PressureError {
    /// True when the input files themselves are at fault (as opposed to the
    /// filesystem or the output sink).
    pub fn is_data_error(&self) -> bool {
        match self {
            PressureError::MalformedMetadata(_) => true,
            PressureError::MalformedFrame { .. } => true,
            PressureError::MissingField { .. } => true,
            PressureError::InvalidField { .. } => true,
            PressureError::UnknownPlayer { .. } => true,
            PressureError::Io(_) | PressureError::Open { .. } => false,
            PressureError::Csv(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PressureError>;
