//! Simulation observer trait for progress reporting and data collection.

use hs_agent::AgentStore;
use hs_behavior::{StateMachine, Transition};
use hs_core::{SimClock, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: transition counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_transition(&mut self, _t: &Transition) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per state change, in settler creation order, after the
    /// tick's update phase.
    fn on_transition(&mut self, _transition: &Transition) {}

    /// Called at the end of each tick with the number of transitions.
    fn on_tick_end(&mut self, _tick: Tick, _transitions: usize) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to every settler and its state machine.  `machines[i]` belongs
    /// to the settler with id `i`.  `clock` has already advanced past `tick`,
    /// so its time is the end of the tick, matching the settler state.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _clock:    &SimClock,
        _agents:   &AgentStore,
        _machines: &[StateMachine],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
