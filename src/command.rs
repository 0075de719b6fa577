//! Command-based control for animators.

use crate::types::AnimatorConfig;

/// Actions for controlling an animator, e.g. sent over a channel from an
/// input task to the task that owns the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorAction {
    /// Reconfigure and blank.
    Begin(AnimatorConfig),
    /// Set target fill level (0.0-1.0).
    SetTarget(f32),
    /// Set brightness of a fully lit unit.
    SetBrightness(u8),
    /// Set end-cap clipping.
    AdjustClipping { lower: u16, upper: u16 },
    /// Turn off immediately.
    Clear,
}
