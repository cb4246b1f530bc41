//! Professions: immutable capability descriptors shared by settlers.

use std::str::FromStr;
use std::sync::Arc;

/// What a settler does for a living.  `None` means unemployed: the settler
/// never looks for work.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfessionKind {
    #[default]
    None,
    Farmer,
    Lumberjack,
    Miner,
    Fisher,
    Blacksmith,
    Baker,
}

impl ProfessionKind {
    pub const ALL: [ProfessionKind; 7] = [
        ProfessionKind::None,
        ProfessionKind::Farmer,
        ProfessionKind::Lumberjack,
        ProfessionKind::Miner,
        ProfessionKind::Fisher,
        ProfessionKind::Blacksmith,
        ProfessionKind::Baker,
    ];

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, ProfessionKind::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfessionKind::None       => "none",
            ProfessionKind::Farmer     => "farmer",
            ProfessionKind::Lumberjack => "lumberjack",
            ProfessionKind::Miner      => "miner",
            ProfessionKind::Fisher     => "fisher",
            ProfessionKind::Blacksmith => "blacksmith",
            ProfessionKind::Baker      => "baker",
        }
    }
}

impl std::fmt::Display for ProfessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfessionKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown profession `{s}`"))
    }
}

// ── Profession ────────────────────────────────────────────────────────────────

/// Capability descriptor: how fast a settler walks and works, which tasks the
/// profession covers, and the tint the renderer uses for it.
///
/// Settlers hold an `Arc<Profession>`; the descriptor is never mutated after
/// the table is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profession {
    pub kind: ProfessionKind,
    /// Walking speed in units per second.  `None` uses the mobility default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub move_speed: Option<f32>,
    /// Work-rate multiplier reported to the work handler.
    #[cfg_attr(feature = "serde", serde(default = "default_work_speed"))]
    pub work_speed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tasks: Vec<String>,
    /// `0xRRGGBB`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: u32,
}

#[cfg(feature = "serde")]
fn default_work_speed() -> f32 {
    1.0
}

impl Profession {
    /// Built-in descriptor for `kind`.
    pub fn builtin(kind: ProfessionKind) -> Self {
        let (move_speed, work_speed, color) = match kind {
            ProfessionKind::None       => (None,      1.0, 0x9e9e9e),
            ProfessionKind::Farmer     => (Some(3.0), 1.0, 0x8bc34a),
            ProfessionKind::Lumberjack => (Some(3.2), 1.2, 0x795548),
            ProfessionKind::Miner      => (Some(2.6), 0.9, 0x607d8b),
            ProfessionKind::Fisher     => (Some(3.0), 1.0, 0x03a9f4),
            ProfessionKind::Blacksmith => (Some(2.8), 0.8, 0x424242),
            ProfessionKind::Baker      => (Some(3.0), 1.1, 0xffc107),
        };
        Self {
            kind,
            move_speed,
            work_speed,
            tasks: builtin_tasks(kind).iter().map(|t| t.to_string()).collect(),
            color,
        }
    }
}

fn builtin_tasks(kind: ProfessionKind) -> &'static [&'static str] {
    match kind {
        ProfessionKind::None       => &[],
        ProfessionKind::Farmer     => &["plant", "harvest"],
        ProfessionKind::Lumberjack => &["chop", "haul"],
        ProfessionKind::Miner      => &["dig", "haul"],
        ProfessionKind::Fisher     => &["cast", "gut"],
        ProfessionKind::Blacksmith => &["smelt", "forge"],
        ProfessionKind::Baker      => &["knead", "bake"],
    }
}

// ── ProfessionTable ───────────────────────────────────────────────────────────

/// Shared descriptors, one per [`ProfessionKind`].
///
/// Indexed by discriminant; `ProfessionKind::ALL` is in declaration order.
/// Kinds missing from a custom table keep the built-in descriptor, so lookups
/// never fail.
#[derive(Clone, Debug)]
pub struct ProfessionTable {
    entries: Vec<Arc<Profession>>,
}

impl ProfessionTable {
    /// Built-in descriptors overridden by `custom` (later entries win).
    pub fn with_overrides(custom: impl IntoIterator<Item = Profession>) -> Self {
        let mut entries: Vec<Arc<Profession>> = ProfessionKind::ALL
            .into_iter()
            .map(|k| Arc::new(Profession::builtin(k)))
            .collect();
        for p in custom {
            let slot = p.kind as usize;
            entries[slot] = Arc::new(p);
        }
        Self { entries }
    }

    /// Shared descriptor for `kind`.
    pub fn get(&self, kind: ProfessionKind) -> Arc<Profession> {
        Arc::clone(&self.entries[kind as usize])
    }
}

impl Default for ProfessionTable {
    fn default() -> Self {
        Self::with_overrides(std::iter::empty())
    }
}
