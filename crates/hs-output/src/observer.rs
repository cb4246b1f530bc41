//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use hs_agent::{AgentStore, NeedKind};
use hs_behavior::StateMachine;
use hs_core::{SimClock, SimConfig, Tick};
use hs_sim::SimObserver;
use tracing::warn;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes settler snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    delta_secs: f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// ticks into simulated seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            delta_secs: config.delta_secs() as f64,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further rows may be lost");
                self.last_error = Some(e);
            }
        }
    }
}

/// Flatten every settler into a snapshot row.
pub fn snapshot_rows(
    tick:     Tick,
    clock:    &SimClock,
    agents:   &AgentStore,
    machines: &[StateMachine],
) -> Vec<AgentSnapshotRow> {
    agents
        .iter()
        .zip(machines)
        .map(|(a, m)| AgentSnapshotRow {
            tick:       tick.0,
            day:        clock.day(),
            hour:       clock.hour_of_day(),
            agent_id:   a.id.0,
            name:       a.name.clone(),
            profession: a.profession.kind.as_str(),
            state:      m.current_name(),
            previous:   m.previous_name(),
            x:          a.position.x,
            z:          a.position.z,
            heading:    a.heading,
            hunger:     a.need(NeedKind::Hunger),
            energy:     a.need(NeedKind::Energy),
            happiness:  a.need(NeedKind::Happiness),
            health:     a.need(NeedKind::Health),
            home:       a.home.map(|b| b.0),
            workplace:  a.workplace.map(|b| b.0),
            experience: a.experience,
            hidden:     a.hidden,
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, transitions: usize) {
        let row = TickSummaryRow {
            tick:         tick.0,
            // End of tick, the same instant snapshot rows are stamped with.
            elapsed_secs: (tick.0 + 1) as f64 * self.delta_secs,
            transitions:  transitions as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        tick:     Tick,
        clock:    &SimClock,
        agents:   &AgentStore,
        machines: &[StateMachine],
    ) {
        let rows = snapshot_rows(tick, clock, agents, machines);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
