//! Shared test infrastructure for smooth-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use smooth_strip::{Animator, StripDriver, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// What the mock strip stores per pixel: the hue and brightness it was given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lit {
    pub hue: u16,
    pub brightness: u8,
}

/// Mock strip that keeps hue/brightness per pixel and counts driver calls
pub struct MockStrip {
    pixels: heapless::Vec<Lit, 64>,
    presented: heapless::Vec<Lit, 64>,
    pub writes: u32,
    pub clears: u32,
    pub presents: u32,
}

impl MockStrip {
    pub fn new(pixel_count: usize) -> Self {
        let mut pixels = heapless::Vec::new();
        pixels
            .resize(pixel_count, Lit::default())
            .expect("mock strip holds at most 64 pixels");
        Self {
            presented: pixels.clone(),
            pixels,
            writes: 0,
            clears: 0,
            presents: 0,
        }
    }

    /// Pixels as last presented to the "hardware"
    pub fn shown(&self) -> &[Lit] {
        &self.presented
    }

    /// Brightness of every presented pixel
    pub fn brightness(&self) -> heapless::Vec<u8, 64> {
        self.presented.iter().map(|pixel| pixel.brightness).collect()
    }
}

impl StripDriver for MockStrip {
    type Color = Lit;

    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Lit) {
        self.writes += 1;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Lit, start: usize, count: usize) {
        self.writes += 1;
        for pixel in self.pixels.iter_mut().skip(start).take(count) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.clears += 1;
        for pixel in self.pixels.iter_mut() {
            *pixel = Lit::default();
        }
    }

    fn present(&mut self) {
        self.presents += 1;
        self.presented = self.pixels.clone();
    }

    fn color_from_hue_brightness(&self, hue: u16, _saturation: u8, brightness: u8) -> Lit {
        Lit { hue, brightness }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestAnimator<'t> = Animator<'t, TestInstant, MockStrip, MockTimeSource>;

/// Ticks once per refresh interval until the animator arrives, returning the tick count
pub fn run_until_arrived(animator: &mut TestAnimator<'_>, timer: &MockTimeSource) -> u32 {
    let mut ticks = 0;
    while !animator.has_arrived() {
        timer.advance(5);
        animator.update();
        ticks += 1;
        assert!(ticks < 10_000, "animator never arrived");
    }
    ticks
}

/// Advances past the refresh interval and ticks `count` times
pub fn tick(animator: &mut TestAnimator<'_>, timer: &MockTimeSource, count: u32) {
    for _ in 0..count {
        timer.advance(5);
        animator.update();
    }
}
