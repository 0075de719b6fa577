//! Fill-level animator with throttled ticks and settle handling.
//!
//! Provides [`Animator`], which moves a strip from its current fill level to a
//! target fill level a little at a time, painting a hue gradient as it goes.

use crate::command::AnimatorAction;
use crate::driver::StripDriver;
use crate::hue::HueGradient;
use crate::position::Position;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{AnimatorConfig, AnimatorState, ConfigError, Tick};

/// Saturation used for every painted unit.
const FULL_SATURATION: u8 = 255;

/// Unit sizing derived from a configuration and the strip length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    units: u16,
    /// Pixels per segment, `None` when animating pixel by pixel.
    segment_pixels: Option<usize>,
}

impl Layout {
    fn new(config: &AnimatorConfig, pixels: usize) -> Result<Self, ConfigError> {
        if config.max_brightness == 0 {
            return Err(ConfigError::ZeroBrightness);
        }
        if config.refresh_rate_hz == 0 {
            return Err(ConfigError::ZeroRefreshRate);
        }
        if config.step_size == 0 {
            return Err(ConfigError::ZeroStepSize);
        }
        if pixels == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        let pixel_units =
            u16::try_from(pixels).map_err(|_| ConfigError::StripTooLong { pixels })?;

        match config.segments {
            None => Ok(Self {
                units: pixel_units,
                segment_pixels: None,
            }),
            Some(0) => Err(ConfigError::ZeroSegments),
            Some(segments) if usize::from(segments) > pixels => {
                Err(ConfigError::TooManySegments { segments, pixels })
            }
            Some(segments) => Ok(Self {
                units: segments,
                segment_pixels: Some(pixels / usize::from(segments)),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase<I> {
    Running,
    Settling { since: I },
}

/// Animates the fill level of a single LED strip.
///
/// The animator owns its strip and borrows a time source. Call
/// [`update`](Animator::update) from the control loop as often as you like;
/// it only does work once per refresh interval.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Strip driver type
/// * `T` - Time source implementation type
pub struct Animator<'t, I: TimeInstant, S: StripDriver, T: TimeSource<I>> {
    strip: S,
    time_source: &'t T,
    config: AnimatorConfig,
    layout: Layout,
    max_position: u32,
    position: Position,
    target: Position,
    last_update: Option<I>,
    has_started: bool,
    /// How the in-flight segment was resolved when the target snapped to it:
    /// `Some(true)` full, `Some(false)` off, `None` still at `position.level`.
    snapped_lit: Option<bool>,
    phase: Phase<I>,
}

impl<'t, I: TimeInstant, S: StripDriver, T: TimeSource<I>> Animator<'t, I, S, T> {
    /// Creates an animator with the default configuration and blanks the strip.
    ///
    /// The first [`update`](Animator::update) is eligible immediately.
    pub fn new(strip: S, time_source: &'t T) -> Result<Self, ConfigError> {
        let config = AnimatorConfig::default();
        let layout = Layout::new(&config, strip.pixel_count())?;

        let mut animator = Self {
            strip,
            time_source,
            config,
            layout,
            max_position: 0,
            position: Position::ZERO,
            target: Position::ZERO,
            last_update: None,
            has_started: false,
            snapped_lit: None,
            phase: Phase::Running,
        };
        animator.reset(config, layout);
        Ok(animator)
    }

    /// Creates an animator with `config`, blanks the strip and sets the target to zero.
    pub fn with_config(
        strip: S,
        time_source: &'t T,
        config: AnimatorConfig,
    ) -> Result<Self, ConfigError> {
        let mut animator = Self::new(strip, time_source)?;
        animator.begin_with(config)?;
        Ok(animator)
    }

    /// Restores the default configuration and blanks the strip.
    pub fn begin(&mut self) -> Result<(), ConfigError> {
        let config = AnimatorConfig::default();
        let layout = self.validate(&config)?;
        self.reset(config, layout);
        Ok(())
    }

    /// Applies `config`, blanks the strip and clears position and target.
    ///
    /// A rejected configuration leaves the animator untouched.
    pub fn begin_with(&mut self, config: AnimatorConfig) -> Result<(), ConfigError> {
        let layout = self.validate(&config)?;
        self.reset(config, layout);
        self.clear();
        Ok(())
    }

    fn validate(&self, config: &AnimatorConfig) -> Result<Layout, ConfigError> {
        Layout::new(config, self.strip.pixel_count()).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::debug!("animator: rejected configuration: {}", _err);
        })
    }

    fn reset(&mut self, config: AnimatorConfig, layout: Layout) {
        self.config = config;
        self.layout = layout;
        self.max_position = u32::from(config.max_brightness) * u32::from(layout.units);
        self.position = Position::ZERO;
        self.target = Position::ZERO;
        self.last_update = None;
        self.has_started = false;
        self.snapped_lit = None;
        self.phase = Phase::Running;

        self.strip.clear();
        self.strip.present();
    }

    /// Handles an animator action by dispatching to the appropriate method.
    pub fn handle_action(&mut self, action: AnimatorAction) -> Result<(), ConfigError> {
        match action {
            AnimatorAction::Begin(config) => self.begin_with(config),
            AnimatorAction::SetTarget(percent) => {
                self.set_target(percent);
                Ok(())
            }
            AnimatorAction::SetBrightness(brightness) => self.set_brightness(brightness),
            AnimatorAction::AdjustClipping { lower, upper } => {
                self.adjust_clipping(lower, upper);
                Ok(())
            }
            AnimatorAction::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Advances the animation by one tick if the refresh interval has elapsed.
    ///
    /// Moves the position at most one step toward the target, paints the unit
    /// in flight plus the neighbor it just left behind, and presents the frame.
    pub fn update(&mut self) -> Tick {
        let now = self.time_source.now();

        if let Phase::Settling { since } = self.phase {
            if now.duration_since(since).as_millis() < u64::from(self.config.settle_time_ms) {
                return Tick::Settling;
            }
            self.finish_settle(now);
            return Tick::Settled;
        }

        if let Some(last) = self.last_update {
            if now.duration_since(last).as_millis() < self.refresh_interval_ms() {
                return Tick::Throttled;
            }
        }

        self.has_started = true;
        if self.position == self.target {
            return Tick::Idle;
        }

        let max_brightness = self.config.max_brightness;
        let previous = self.position;
        let rising = self.target > previous;

        self.position = previous.step_toward(self.target, self.config.step_size, max_brightness);
        let Position { unit, level } = self.position;

        if self.layout.segment_pixels.is_some() && unit == self.target.unit {
            // Segments rest fully on or fully off: stop here instead of
            // lighting part of the target's segment.
            self.target = self.position;
            self.snapped_lit = Some(!rising);
            self.paint_unit(unit, if rising { 0 } else { max_brightness });
        } else {
            self.snapped_lit = None;
            self.paint_unit(unit, level);
        }

        // Integer division leaves the unit next to the one in flight a step
        // behind; commit it (and any unit skipped by a large step).
        if rising {
            if unit != 0 {
                for passed in previous.unit.min(unit - 1)..unit {
                    self.paint_unit(passed, max_brightness);
                }
            }
        } else {
            let above = unit.saturating_add(1);
            for passed in above..=previous.unit.max(above) {
                self.paint_unit(passed, 0);
            }
        }

        self.strip.present();
        self.last_update = Some(now);
        Tick::Advanced
    }

    /// Sets the fill level to approach, from `0.0` (off) to `1.0` (full strip).
    ///
    /// Values outside the range are clamped; NaN is treated as `0.0`.
    pub fn set_target(&mut self, percent: f32) {
        self.target = self.position_at(percent);
    }

    /// Turns the strip off immediately, without fading.
    ///
    /// Sets target and position to zero, blanks the strip and restarts the
    /// refresh interval. Cancels a pending settle.
    pub fn clear(&mut self) {
        self.target = Position::ZERO;
        self.position = Position::ZERO;
        self.snapped_lit = None;
        self.phase = Phase::Running;

        self.strip.clear();
        self.strip.present();
        self.last_update = Some(self.time_source.now());
    }

    /// Changes the brightness of a fully lit unit.
    ///
    /// The raw position value is kept as is (clamped to the new maximum), so the
    /// fill level it describes changes with the new scale. The target is reset
    /// to zero, the strip goes blank for the settle time, and is then repainted
    /// with the new brightness before fading out from there.
    pub fn set_brightness(&mut self, max_brightness: u8) -> Result<(), ConfigError> {
        if max_brightness == 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("animator: rejected zero brightness");
            return Err(ConfigError::ZeroBrightness);
        }

        let saved = self.position.to_raw(self.config.max_brightness);

        self.config.max_brightness = max_brightness;
        self.max_position = u32::from(max_brightness) * u32::from(self.layout.units);
        self.position = Position::from_raw(saved.min(self.max_position), max_brightness);
        // The restored value lands on a different unit; any snap no longer applies.
        self.snapped_lit = None;

        self.begin_settle();
        Ok(())
    }

    /// Changes how many units at each end are pinned to the start and end hue.
    ///
    /// Once the strip has shown output, painted colors are stale, so the target
    /// is reset to zero, the strip goes blank for the settle time and is then
    /// repainted with the new hues.
    pub fn adjust_clipping(&mut self, lower: u16, upper: u16) {
        self.config.lower_clip = lower;
        self.config.upper_clip = upper;

        if self.has_started {
            self.begin_settle();
        }
    }

    /// Returns true once the position has reached the target.
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.position == self.target
    }

    /// Returns the current state of the animator.
    pub fn state(&self) -> AnimatorState {
        match self.phase {
            Phase::Settling { .. } => AnimatorState::Settling,
            Phase::Running if self.has_arrived() => AnimatorState::Idle,
            Phase::Running => AnimatorState::Animating,
        }
    }

    /// Current position as `unit * max_brightness + level`.
    pub fn position(&self) -> u32 {
        self.position.to_raw(self.config.max_brightness)
    }

    /// Target position as `unit * max_brightness + level`.
    pub fn target(&self) -> u32 {
        self.target.to_raw(self.config.max_brightness)
    }

    /// Position of a fully lit strip.
    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    /// Current position as whole units plus partial brightness.
    pub fn fill_level(&self) -> Position {
        self.position
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Number of animated units: segments when segmented, otherwise pixels.
    pub fn units(&self) -> u16 {
        self.layout.units
    }

    /// Pixels per segment, or `None` when animating pixel by pixel.
    pub fn pixels_per_segment(&self) -> Option<usize> {
        self.layout.segment_pixels
    }

    /// Hue painted on `unit` with the current gradient and clipping.
    pub fn effective_hue(&self, unit: u16) -> u16 {
        self.gradient().hue_at(unit)
    }

    /// Strip driven by this animator.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Mutable access to the strip, e.g. for driver-specific settings.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consumes the animator and returns the strip.
    pub fn release(self) -> S {
        self.strip
    }

    fn refresh_interval_ms(&self) -> u64 {
        1000 / u64::from(self.config.refresh_rate_hz)
    }

    fn gradient(&self) -> HueGradient {
        HueGradient {
            start: self.config.start_hue,
            end: self.config.end_hue,
            lower_clip: self.config.lower_clip,
            upper_clip: self.config.upper_clip,
            units: self.layout.units,
        }
    }

    fn position_at(&self, percent: f32) -> Position {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };
        let raw = libm::roundf(self.max_position as f32 * percent) as u32;
        Position::from_raw(raw.min(self.max_position), self.config.max_brightness)
    }

    fn paint_unit(&mut self, unit: u16, brightness: u8) {
        if unit >= self.layout.units {
            return;
        }
        let hue = self.gradient().hue_at(unit);
        let color = self
            .strip
            .color_from_hue_brightness(hue, FULL_SATURATION, brightness);

        match self.layout.segment_pixels {
            Some(pixels) => self.strip.fill(color, usize::from(unit) * pixels, pixels),
            None => self.strip.set_pixel(usize::from(unit), color),
        }
    }

    fn begin_settle(&mut self) {
        let now = self.time_source.now();

        self.target = Position::ZERO;
        self.strip.clear();
        self.strip.present();
        self.phase = Phase::Settling { since: now };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "animator: settling for {} ms at position {}",
            self.config.settle_time_ms,
            self.position()
        );
    }

    fn finish_settle(&mut self, now: I) {
        self.phase = Phase::Running;
        self.repaint();
        self.strip.present();
        self.last_update = Some(now);

        #[cfg(feature = "defmt")]
        defmt::debug!("animator: settled, repainted up to unit {}", self.position.unit);
    }

    /// Redraws the frame the stored position last produced.
    fn repaint(&mut self) {
        let max_brightness = self.config.max_brightness;
        let Position { unit, level } = self.position;

        self.strip.clear();
        for lit in 0..unit {
            self.paint_unit(lit, max_brightness);
        }

        let in_flight = match self.snapped_lit {
            Some(true) => max_brightness,
            Some(false) => 0,
            None => level,
        };
        self.paint_unit(unit, in_flight);
    }
}
