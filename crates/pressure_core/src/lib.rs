//! # pressure_core - On-ball pressure detection
//!
//! Reads a match's positional tracking feed (one JSON frame per line) with
//! its metadata file and finds every moment a defender was within a fixed
//! radius of the ball while the other team had possession.
//!
//! ## Pipeline
//! - `models` - tracking frame and metadata records
//! - `context` - team names, player identities, radius
//! - `tracking` - lazy JSONL frame reader
//! - `processor` / `pressure` - per-frame evaluation and accumulation
//! - `report` - CSV sink
//!
//! ## Usage
//! ```ignore
//! let metadata = MatchMetadata::load(meta_path)?;
//! let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default())?;
//! let session = process_stream(&ctx, TrackingReader::open(tracking_path)?)?;
//!
//! let mut report = ReportWriter::create(out_path)?;
//! report.write_rows(&session.rows)?;
//! report.finish()?;
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod models;
pub mod pressure;
pub mod processor;
pub mod report;
pub mod tracking;

pub use config::{PressureConfig, DEFAULT_PRESSURE_RADIUS_M, METERS_TO_YARDS_DIVISOR};
pub use context::MatchContext;
pub use error::{PressureError, Result};
pub use geometry::{closest_to_ball, distance, Closest, Located, Position};
pub use models::{Frame, LastTouch, MatchMetadata, PlayerId, PlayerObservation, Side};
pub use pressure::{detect_pressure, PlayerBlock, PressureEventRow};
pub use processor::{
    evaluate_frame, process_stream, process_stream_parallel, FrameOutcome, PressureSession,
};
pub use report::ReportWriter;
pub use tracking::TrackingReader;
