//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for snapshot and tick-summary rows.
///
/// The observer swallows errors into [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error],
/// so a failing sink never aborts the simulation.
pub trait OutputWriter {
    /// Write a batch of settler snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
