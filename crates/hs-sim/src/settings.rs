//! TOML settings: one file configures the scheduler, needs, behavior
//! constants, and profession overrides.
//!
//! Every table is optional and missing keys take their defaults, so an empty
//! file is a valid stock colony:
//!
//! ```toml
//! [sim]
//! seed        = 7
//! game_speed  = 2.0
//! total_ticks = 12000
//!
//! [needs.hunger]
//! max           = 100.0
//! decay_per_sec = 0.8
//! critical      = 20.0
//!
//! [behavior]
//! wander_speed_factor = 0.4
//!
//! [[professions]]
//! kind       = "farmer"
//! move_speed = 3.5
//! ```

use std::path::Path;

use hs_agent::{NeedKind, NeedsConfig, Profession, ProfessionTable};
use hs_behavior::BehaviorTuning;
use hs_core::SimConfig;
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sim:         SimConfig,
    pub needs:       NeedsConfig,
    pub behavior:    BehaviorTuning,
    /// Replacements for the built-in profession descriptors.
    pub professions: Vec<Profession>,
}

impl Settings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Built-in professions with this file's overrides applied.
    pub fn profession_table(&self) -> ProfessionTable {
        ProfessionTable::with_overrides(self.professions.iter().cloned())
    }

    /// Reject values the scheduler cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        validate(&self.sim, &self.needs, &self.behavior)
    }
}

fn invalid(msg: String) -> SimError {
    SimError::Config(msg)
}

/// Shared by [`Settings::validate`] and [`SimBuilder::build`][crate::SimBuilder::build].
pub(crate) fn validate(
    sim:    &SimConfig,
    needs:  &NeedsConfig,
    tuning: &BehaviorTuning,
) -> SimResult<()> {
    if !(sim.tick_secs.is_finite() && sim.tick_secs > 0.0) {
        return Err(invalid(format!("tick_secs must be positive, got {}", sim.tick_secs)));
    }
    if !(sim.game_speed.is_finite() && sim.game_speed >= 0.0) {
        return Err(invalid(format!("game_speed must be non-negative, got {}", sim.game_speed)));
    }
    if !(sim.day_length_secs.is_finite() && sim.day_length_secs > 0.0) {
        return Err(invalid(format!(
            "day_length_secs must be positive, got {}",
            sim.day_length_secs
        )));
    }
    for kind in NeedKind::ALL {
        let def = needs.def(kind);
        if !(def.max.is_finite() && def.max > 0.0) {
            return Err(invalid(format!("need {kind}: max must be positive, got {}", def.max)));
        }
        if !(def.decay_per_sec.is_finite() && def.decay_per_sec >= 0.0) {
            return Err(invalid(format!(
                "need {kind}: decay_per_sec must be non-negative, got {}",
                def.decay_per_sec
            )));
        }
    }
    let ranges = [
        ("idle_decision", tuning.idle_decision_min, tuning.idle_decision_max),
        ("work_duration", tuning.work_duration_min, tuning.work_duration_max),
        ("wander_distance", tuning.wander_distance_min, tuning.wander_distance_max),
    ];
    for (name, lo, hi) in ranges {
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
            return Err(invalid(format!("{name}: need 0 <= min <= max, got {lo}..{hi}")));
        }
    }
    if !(tuning.production_interval.is_finite() && tuning.production_interval > 0.0) {
        return Err(invalid(format!(
            "production_interval must be positive, got {}",
            tuning.production_interval
        )));
    }
    Ok(())
}
