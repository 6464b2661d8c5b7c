//! Frame processor - drives the tracking stream through pressure detection.
//!
//! Per-frame evaluation is a pure function of the match context and the
//! frame. All accumulation happens in an explicit [`PressureSession`], so
//! batches can be evaluated in parallel and recorded back in stream order.

use rayon::prelude::*;

use crate::context::MatchContext;
use crate::error::{PressureError, Result};
use crate::models::{Frame, LastTouch};
use crate::pressure::{detect_pressure, PressureEventRow};

/// Result of evaluating one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Dead ball or untracked ball
    Skipped,
    /// Live frame; may hold zero rows
    Evaluated(Vec<PressureEventRow>),
}

/// Evaluate a single frame without touching any shared state.
pub fn evaluate_frame(ctx: &MatchContext, frame: &Frame) -> Result<FrameOutcome> {
    let ball = match frame.live_ball() {
        Some(ball) => ball,
        None => return Ok(FrameOutcome::Skipped),
    };

    let possessing = match &frame.last_touch {
        Some(LastTouch::Side(side)) => *side,
        Some(LastTouch::Other(value)) => {
            return Err(PressureError::InvalidField {
                frame_idx: frame.frame_idx,
                field: "lastTouch",
                value: value.to_string(),
            })
        }
        None => {
            return Err(PressureError::MissingField {
                frame_idx: frame.frame_idx,
                field: "lastTouch",
            })
        }
    };

    detect_pressure(ctx, frame, ball, possessing).map(FrameOutcome::Evaluated)
}

/// Rows and counters accumulated over one pass of the tracking stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureSession {
    pub rows: Vec<PressureEventRow>,
    pub total_frames: u64,
    pub live_frames: u64,
}

impl PressureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an already evaluated frame.
    pub fn record(&mut self, outcome: FrameOutcome) {
        self.total_frames += 1;
        if let FrameOutcome::Evaluated(rows) = outcome {
            self.live_frames += 1;
            self.rows.extend(rows);
        }
    }

    pub fn process_frame(&mut self, ctx: &MatchContext, frame: &Frame) -> Result<()> {
        let outcome = evaluate_frame(ctx, frame)?;
        self.record(outcome);
        Ok(())
    }

    /// Append a session covering later frames.
    pub fn merge(&mut self, other: PressureSession) {
        self.total_frames += other.total_frames;
        self.live_frames += other.live_frames;
        self.rows.extend(other.rows);
    }

    pub fn emitted_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<PressureEventRow> {
        self.rows
    }
}

/// Process the whole stream sequentially. Stops at the first error.
pub fn process_stream<I>(ctx: &MatchContext, frames: I) -> Result<PressureSession>
where
    I: IntoIterator<Item = Result<Frame>>,
{
    let mut session = PressureSession::new();

    for frame in frames {
        session.process_frame(ctx, &frame?)?;
    }

    log_session(&session);
    Ok(session)
}

/// Process the stream in batches of `batch_size` frames, evaluating each
/// batch on the rayon pool. Rows and counters match [`process_stream`].
pub fn process_stream_parallel<I>(
    ctx: &MatchContext,
    frames: I,
    batch_size: usize,
) -> Result<PressureSession>
where
    I: IntoIterator<Item = Result<Frame>>,
{
    let batch_size = batch_size.max(1);
    let mut frames = frames.into_iter();
    let mut session = PressureSession::new();
    let mut batch: Vec<Frame> = Vec::with_capacity(batch_size);

    loop {
        batch.clear();
        let mut read_error = None;
        for frame in frames.by_ref().take(batch_size) {
            match frame {
                Ok(frame) => batch.push(frame),
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            }
        }

        if !batch.is_empty() {
            // Per-frame results, so the earliest failure in stream order wins
            let outcomes: Vec<Result<FrameOutcome>> = batch
                .par_iter()
                .map(|frame| evaluate_frame(ctx, frame))
                .collect();

            tracing::debug!(
                first_frame = batch[0].frame_idx,
                frames = batch.len(),
                "batch evaluated"
            );

            for outcome in outcomes {
                session.record(outcome?);
            }
        }

        if let Some(e) = read_error {
            return Err(e);
        }
        if batch.is_empty() {
            break;
        }
    }

    log_session(&session);
    Ok(session)
}

fn log_session(session: &PressureSession) {
    tracing::info!(
        total_frames = session.total_frames,
        live_frames = session.live_frames,
        rows = session.emitted_rows(),
        "tracking stream processed"
    );
}
