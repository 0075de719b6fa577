//! Hue gradient across the units of a strip.

/// Maps a unit index onto a hue between `start` and `end`.
///
/// The first `lower_clip` units are pinned to `start` and the last
/// `upper_clip` units to `end`. Units in between are interpolated linearly,
/// so with no clipping unit `0` gets `start` and the last unit gets `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HueGradient {
    pub start: u16,
    pub end: u16,
    pub lower_clip: u16,
    pub upper_clip: u16,
    pub units: u16,
}

impl HueGradient {
    /// Returns the hue for `unit`.
    pub fn hue_at(&self, unit: u16) -> u16 {
        let unit = i64::from(unit);
        let low = i64::from(self.lower_clip);
        let high = i64::from(self.units) - 1 - i64::from(self.upper_clip);

        if unit < low {
            return self.start;
        }
        if unit > high {
            return self.end;
        }
        if high == low {
            return self.start;
        }

        let start = i64::from(self.start);
        let end = i64::from(self.end);
        // Truncates toward zero; the result always lies between start and end.
        ((unit - low) * (end - start) / (high - low) + start) as u16
    }
}
