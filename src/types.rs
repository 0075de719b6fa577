//! Configuration, status and error types.

/// Hue used by the default configuration for both gradient ends.
pub const DEFAULT_HUE: u16 = 32768;

/// Animator configuration.
///
/// `Default` matches a plain brightness fade over the whole strip: one unit
/// per pixel, 240 Hz refresh, step size 10, full brightness and no clipping.
///
/// ```
/// use smooth_strip::AnimatorConfig;
///
/// let config = AnimatorConfig::default()
///     .hues(0, 21845)
///     .segments(7)
///     .step_size(20);
/// assert_eq!(config.segments, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimatorConfig {
    /// Hue of the first unit.
    pub start_hue: u16,

    /// Hue of the last unit.
    pub end_hue: u16,

    /// Number of segments, or `None` to animate pixel by pixel.
    pub segments: Option<u16>,

    /// Largest position change per tick.
    pub step_size: u16,

    /// Ticks per second.
    pub refresh_rate_hz: u16,

    /// Brightness of a fully lit unit.
    pub max_brightness: u8,

    /// Units at the start pinned to `start_hue`.
    pub lower_clip: u16,

    /// Units at the end pinned to `end_hue`.
    pub upper_clip: u16,

    /// How long the strip stays blank after a brightness or clipping change.
    pub settle_time_ms: u32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            start_hue: DEFAULT_HUE,
            end_hue: DEFAULT_HUE,
            segments: None,
            step_size: 10,
            refresh_rate_hz: 240,
            max_brightness: 255,
            lower_clip: 0,
            upper_clip: 0,
            settle_time_ms: 450,
        }
    }
}

impl AnimatorConfig {
    /// Sets the gradient endpoints.
    #[inline]
    pub const fn hues(mut self, start: u16, end: u16) -> Self {
        self.start_hue = start;
        self.end_hue = end;
        self
    }

    /// Groups the strip into `count` equally sized segments.
    ///
    /// Pixels left over by the integer division are never lit.
    #[inline]
    pub const fn segments(mut self, count: u16) -> Self {
        self.segments = Some(count);
        self
    }

    /// Animates pixel by pixel.
    #[inline]
    pub const fn per_pixel(mut self) -> Self {
        self.segments = None;
        self
    }

    #[inline]
    pub const fn step_size(mut self, step_size: u16) -> Self {
        self.step_size = step_size;
        self
    }

    #[inline]
    pub const fn refresh_rate(mut self, hz: u16) -> Self {
        self.refresh_rate_hz = hz;
        self
    }

    #[inline]
    pub const fn max_brightness(mut self, brightness: u8) -> Self {
        self.max_brightness = brightness;
        self
    }

    #[inline]
    pub const fn clipping(mut self, lower: u16, upper: u16) -> Self {
        self.lower_clip = lower;
        self.upper_clip = upper;
        self
    }

    #[inline]
    pub const fn settle_time(mut self, millis: u32) -> Self {
        self.settle_time_ms = millis;
        self
    }
}

/// Current state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorState {
    /// Position equals target. The strip is at rest.
    Idle,
    /// Moving toward the target.
    Animating,
    /// Blank after a brightness or clipping change, waiting to repaint.
    Settling,
}

/// What a call to [`Animator::update`](crate::Animator::update) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Refresh interval has not elapsed. Nothing changed.
    Throttled,
    /// Already at the target. Nothing was written.
    Idle,
    /// Position moved and a frame was presented.
    Advanced,
    /// Still blank after a brightness or clipping change.
    Settling,
    /// Settle finished and the strip was repainted.
    Settled,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Maximum brightness of zero.
    ZeroBrightness,

    /// Refresh rate of zero.
    ZeroRefreshRate,

    /// Step size of zero.
    ZeroStepSize,

    /// Segmented mode with zero segments.
    ZeroSegments,

    /// Strip reports no pixels.
    EmptyStrip,

    /// Strip has more pixels than a unit index can address.
    StripTooLong { pixels: usize },

    /// More segments than pixels.
    TooManySegments { segments: u16, pixels: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroBrightness => write!(f, "maximum brightness must be at least 1"),
            ConfigError::ZeroRefreshRate => write!(f, "refresh rate must be at least 1 Hz"),
            ConfigError::ZeroStepSize => write!(f, "step size must be at least 1"),
            ConfigError::ZeroSegments => write!(f, "segmented mode needs at least one segment"),
            ConfigError::EmptyStrip => write!(f, "strip has no pixels"),
            ConfigError::StripTooLong { pixels } => {
                write!(f, "strip has {} pixels, at most {} are supported", pixels, u16::MAX)
            }
            ConfigError::TooManySegments { segments, pixels } => {
                write!(
                    f,
                    "{} segments cannot be laid out over {} pixels",
                    segments, pixels
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
