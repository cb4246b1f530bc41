//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Missing handles and previous states are written as empty fields.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 19] = [
    "tick", "day", "hour", "agent_id", "name", "profession", "state", "previous_state",
    "x", "z", "heading", "hunger", "energy", "happiness", "health",
    "home", "workplace", "experience", "hidden",
];

pub const SUMMARY_HEADER: [&str; 3] = ["tick", "elapsed_secs", "transitions"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { snapshots, summaries, finished: false })
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.day.to_string(),
                format!("{:.2}", row.hour),
                row.agent_id.to_string(),
                row.name.clone(),
                row.profession.to_owned(),
                row.state.to_owned(),
                row.previous.unwrap_or_default().to_owned(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.z),
                format!("{:.3}", row.heading),
                format!("{:.2}", row.hunger),
                format!("{:.2}", row.energy),
                format!("{:.2}", row.happiness),
                format!("{:.2}", row.health),
                opt(row.home),
                opt(row.workplace),
                row.experience.to_string(),
                (row.hidden as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.transitions.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
