//! CSV report sink.
//!
//! Layout: a group header row, a column header row, then one row per
//! pressure event. 13 columns throughout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PressureError, Result};
use crate::pressure::{PlayerBlock, PressureEventRow};

pub const GROUP_HEADER: [&str; 13] = [
    "Timestamps",
    "",
    "",
    "",
    "Player in Possession",
    "",
    "",
    "",
    "Pressuring Player",
    "",
    "",
    "",
    "",
];

pub const COLUMN_HEADER: [&str; 13] = [
    "Frame Index",
    "Actual Time (UNIX)",
    "Period",
    "Time Since Period Start (s)",
    "Affiliated Team",
    "Player Name",
    "Player Number",
    "Player ID",
    "Affiliated Team",
    "Player Name",
    "Player Number",
    "Player ID",
    "Distance to Ball (yards)",
];

/// Shortest round-trip form, keeping `.0` on integral values.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn push_player(record: &mut Vec<String>, block: Option<&PlayerBlock>) {
    match block {
        Some(player) => {
            record.push(player.team.clone());
            record.push(player.name.clone());
            record.push(player.number.to_string());
            record.push(player.player_id.to_string());
        }
        None => record.extend(std::iter::repeat(String::new()).take(4)),
    }
}

/// Report cells for one row.
pub fn to_record(row: &PressureEventRow) -> Vec<String> {
    let mut record = Vec::with_capacity(COLUMN_HEADER.len());
    record.push(row.frame_idx.to_string());
    record.push(row.wall_clock.to_string());
    record.push(row.period.to_string());
    record.push(format_float(row.game_clock));
    push_player(&mut record, row.possessor.as_ref());
    push_player(&mut record, Some(&row.defender));
    record.push(format_float(row.distance_to_ball));
    record
}

pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl ReportWriter<File> {
    /// Create (or truncate) the report file and write the header.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| PressureError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(GROUP_HEADER)?;
        writer.write_record(COLUMN_HEADER)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &PressureEventRow) -> Result<()> {
        self.writer.write_record(to_record(row))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PressureEventRow>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the number of event rows written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PressureError::Io(e.into_error()))
    }
}
