//! Fill level of the strip as a whole-unit count plus a partial brightness.

/// How far the strip is filled.
///
/// `unit` counts fully lit units (pixels, or segments in segmented mode) and
/// `level` is the brightness of the next unit. The pair is only meaningful
/// together with the animator's maximum brightness; `level` is always below it.
///
/// Ordering compares `unit` first and `level` second, which matches the order
/// of the raw encoding `unit * max_brightness + level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Number of fully lit units.
    pub unit: u16,
    /// Brightness of the unit currently in flight.
    pub level: u8,
}

impl Position {
    /// Empty strip.
    pub const ZERO: Self = Self { unit: 0, level: 0 };

    /// Decodes a raw position. `max_brightness` must be non-zero.
    #[inline]
    pub fn from_raw(raw: u32, max_brightness: u8) -> Self {
        let scale = u32::from(max_brightness);
        Self {
            unit: (raw / scale) as u16,
            level: (raw % scale) as u8,
        }
    }

    /// Encodes as `unit * max_brightness + level`.
    #[inline]
    pub fn to_raw(self, max_brightness: u8) -> u32 {
        u32::from(self.unit) * u32::from(max_brightness) + u32::from(self.level)
    }

    /// Moves at most `step` raw units toward `target` without passing it.
    pub fn step_toward(self, target: Self, step: u16, max_brightness: u8) -> Self {
        let current = self.to_raw(max_brightness);
        let goal = target.to_raw(max_brightness);
        let step = u32::from(step);

        let next = if goal > current {
            current.saturating_add(step).min(goal)
        } else {
            current.saturating_sub(step).max(goal)
        };
        Self::from_raw(next, max_brightness)
    }
}
