//! Simulation time model.
//!
//! # Design
//!
//! The scheduler counts frames with a monotonically increasing `Tick`.  Each
//! tick advances simulated time by a variable number of seconds:
//!
//!   delta_secs = tick_secs * game_speed
//!
//! Every rate in the simulation (need decay, eating, walking) is expressed
//! per simulated second and multiplied by `delta_secs`, so speeding the game
//! up changes step size, not behavior.  Large steps can overshoot thresholds;
//! consumers clamp rather than assume small deltas.
//!
//! A colony day is `day_length_secs` simulated seconds long.  `WorkHours`
//! maps the clock onto the "work time" flag settlers consult when idle.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── WorkHours ────────────────────────────────────────────────────────────────

/// The span of the colony day during which employed settlers head to work.
///
/// Hours are on a 24-hour dial.  `start_hour > end_hour` describes a night
/// shift that wraps past midnight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkHours {
    pub start_hour: f32,
    pub end_hour:   f32,
}

impl WorkHours {
    /// `true` if `hour` (in `[0, 24)`) falls inside the shift.
    pub fn contains(self, hour: f32) -> bool {
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self { start_hour: 8.0, end_hour: 17.0 }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the frame counter, accumulated simulated seconds, and time of day.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current frame, advanced once per scheduler step.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0.  `f64` so long runs do not
    /// lose sub-second resolution.
    pub elapsed_secs: f64,
    /// Length of one colony day in simulated seconds.
    pub day_length_secs: f32,
    /// Hour of day at tick 0.
    pub start_hour: f32,
}

impl SimClock {
    pub fn new(day_length_secs: f32, start_hour: f32) -> Self {
        Self {
            current_tick: Tick::ZERO,
            elapsed_secs: 0.0,
            day_length_secs,
            start_hour,
        }
    }

    /// Advance by one tick covering `delta_secs` of simulated time.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += delta_secs.max(0.0) as f64;
    }

    /// Whole colony days completed since tick 0.
    pub fn day(&self) -> u64 {
        if self.day_length_secs <= 0.0 {
            return 0;
        }
        let hours = self.start_hour as f64 + self.elapsed_secs * 24.0 / self.day_length_secs as f64;
        (hours / 24.0).floor() as u64
    }

    /// Hour of the current colony day, in `[0, 24)`.
    pub fn hour_of_day(&self) -> f32 {
        if self.day_length_secs <= 0.0 {
            return self.start_hour.rem_euclid(24.0);
        }
        let hours = self.start_hour as f64 + self.elapsed_secs * 24.0 / self.day_length_secs as f64;
        hours.rem_euclid(24.0) as f32
    }

    /// The "work time" flag for the current tick.
    #[inline]
    pub fn is_work_time(&self, hours: WorkHours) -> bool {
        hours.contains(self.hour_of_day())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour_of_day();
        let minutes = ((hour.fract()) * 60.0) as u32;
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, self.day(), hour as u32, minutes)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
///
/// Loaded from the `[sim]` table of a settings file by `hs-sim`; every field
/// has a default, so partial tables are fine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Simulated seconds per tick at game speed 1.0.
    pub tick_secs: f32,

    /// Global game-speed multiplier applied to every tick's delta.
    pub game_speed: f32,

    /// Total ticks for `Sim::run` to simulate.
    pub total_ticks: u64,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Simulated seconds in one colony day.
    pub day_length_secs: f32,

    /// Hour of day at tick 0.
    pub start_hour: f32,

    /// When employed settlers go to work.
    pub work_hours: WorkHours,
}

impl SimConfig {
    /// Simulated seconds covered by one tick, after the game-speed multiplier.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.tick_secs * self.game_speed
    }

    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.day_length_secs, self.start_hour)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            tick_secs:             0.1,
            game_speed:            1.0,
            total_ticks:           36_000,
            output_interval_ticks: 600,
            day_length_secs:       600.0,
            start_hour:            6.0,
            work_hours:            WorkHours::default(),
        }
    }
}
