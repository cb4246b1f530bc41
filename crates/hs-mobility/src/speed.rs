//! Walking-speed resolution.

use hs_agent::Profession;

/// Units per second for professions that do not configure a speed.
pub const DEFAULT_MOVE_SPEED: f32 = 3.0;

/// Effective speed for `profession` scaled by `multiplier` (Wander walks at
/// half speed, everything else at `1.0`).
///
/// Non-finite or negative configured speeds fall back to the default, and the
/// result is never negative.
#[inline]
pub fn move_speed(profession: &Profession, multiplier: f32) -> f32 {
    let base = profession
        .move_speed
        .filter(|s| s.is_finite() && *s >= 0.0)
        .unwrap_or(DEFAULT_MOVE_SPEED);
    (base * multiplier).max(0.0)
}
