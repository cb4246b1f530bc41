//! The needs model: decaying physiological scalars.
//!
//! Need *definitions* (maximum, decay rate, critical threshold) are shared by
//! every settler and come from [`NeedsConfig`].  Only the current value is
//! per-agent state, held in [`Needs`].
//!
//! # Invariant
//!
//! Every current value stays in `[0, max]`.  Each mutator clamps, so a large
//! tick delta (high game speed) can drive a need to zero but never below it.
//! Needs never rise on their own; only behavior states raise them (eating,
//! resting, sleeping).

/// The four needs every settler tracks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NeedKind {
    Hunger,
    Energy,
    Happiness,
    Health,
}

impl NeedKind {
    /// Every need in storage order.
    pub const ALL: [NeedKind; 4] = [
        NeedKind::Hunger,
        NeedKind::Energy,
        NeedKind::Happiness,
        NeedKind::Health,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NeedKind::Hunger    => "hunger",
            NeedKind::Energy    => "energy",
            NeedKind::Happiness => "happiness",
            NeedKind::Health    => "health",
        }
    }
}

impl std::fmt::Display for NeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Definitions ───────────────────────────────────────────────────────────────

/// Static description of one need.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedDef {
    /// Upper bound; settlers are created with every need at this value.
    pub max: f32,
    /// Units lost per simulated second.
    pub decay_per_sec: f32,
    /// Below this value the need is reported as critical.
    pub critical: f32,
}

impl NeedDef {
    pub const fn new(max: f32, decay_per_sec: f32, critical: f32) -> Self {
        Self { max, decay_per_sec, critical }
    }
}

/// Colony-wide need definitions, one per [`NeedKind`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeedsConfig {
    pub hunger:    NeedDef,
    pub energy:    NeedDef,
    pub happiness: NeedDef,
    pub health:    NeedDef,
}

impl NeedsConfig {
    pub fn def(&self, kind: NeedKind) -> &NeedDef {
        match kind {
            NeedKind::Hunger    => &self.hunger,
            NeedKind::Energy    => &self.energy,
            NeedKind::Happiness => &self.happiness,
            NeedKind::Health    => &self.health,
        }
    }
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self {
            hunger:    NeedDef::new(100.0, 0.5, 20.0),
            energy:    NeedDef::new(100.0, 0.3, 20.0),
            happiness: NeedDef::new(100.0, 0.1, 25.0),
            health:    NeedDef::new(100.0, 0.02, 30.0),
        }
    }
}

// ── Per-agent values ──────────────────────────────────────────────────────────

/// One settler's current need values.
///
/// The maxima are copied from the config at creation so that raising a need
/// can clamp without a config lookup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Needs {
    current: [f32; 4],
    max:     [f32; 4],
}

impl Needs {
    /// Every need at its configured maximum.
    pub fn full(config: &NeedsConfig) -> Self {
        let max = NeedKind::ALL.map(|k| config.def(k).max.max(0.0));
        Self { current: max, max }
    }

    #[inline]
    pub fn get(&self, kind: NeedKind) -> f32 {
        self.current[kind.index()]
    }

    #[inline]
    pub fn max(&self, kind: NeedKind) -> f32 {
        self.max[kind.index()]
    }

    /// Overwrite a value, clamped into `[0, max]`.
    pub fn set(&mut self, kind: NeedKind, value: f32) {
        let i = kind.index();
        self.current[i] = clamp_need(value, self.max[i]);
    }

    /// Add `amount` (non-negative) and clamp at the maximum.
    #[inline]
    pub fn raise(&mut self, kind: NeedKind, amount: f32) {
        self.set(kind, self.get(kind) + amount.max(0.0));
    }

    /// Subtract `amount` (non-negative) and clamp at zero.
    #[inline]
    pub fn lower(&mut self, kind: NeedKind, amount: f32) {
        self.set(kind, self.get(kind) - amount.max(0.0));
    }

    /// Advance every need by `delta_secs` of decay.  Never fails.
    pub fn decay(&mut self, config: &NeedsConfig, delta_secs: f32) {
        let dt = delta_secs.max(0.0);
        for kind in NeedKind::ALL {
            self.lower(kind, config.def(kind).decay_per_sec * dt);
        }
    }

    /// `true` if `kind` has fallen strictly below its critical threshold.
    #[inline]
    pub fn is_critical(&self, kind: NeedKind, config: &NeedsConfig) -> bool {
        self.get(kind) < config.def(kind).critical
    }

    /// The needs currently below their critical threshold.
    pub fn critical<'a>(&'a self, config: &'a NeedsConfig) -> impl Iterator<Item = NeedKind> + 'a {
        NeedKind::ALL.into_iter().filter(move |&k| self.is_critical(k, config))
    }

    /// `(kind, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (NeedKind, f32)> + '_ {
        NeedKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

#[inline]
fn clamp_need(value: f32, max: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}
