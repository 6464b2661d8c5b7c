//! Tracking feed reader (JSON Lines).
//!
//! Frames are decoded one line at a time so a full match never has to sit
//! in memory.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{PressureError, Result};
use crate::models::Frame;

pub struct TrackingReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl TrackingReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PressureError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TrackingReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// 1-based number of the last line read.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TrackingReader<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(PressureError::Io(e))),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let line_no = self.line_no;
            return Some(
                serde_json::from_str::<Frame>(&line)
                    .map_err(|source| PressureError::MalformedFrame { line: line_no, source }),
            );
        }
    }
}
