//! [`StripDriver`] backed by a `smart-leds` writer.
//!
//! Keeps an `N`-pixel frame buffer in RAM and hands it to any
//! [`SmartLedsWrite`] implementation (WS2812 over SPI, RMT, PIO, ...) when the
//! frame is presented.

use core::iter;

use palette::{FromColor, Hsv, Srgb};
use smart_leds::{RGB8, SmartLedsWrite, gamma};

use crate::driver::StripDriver;

/// Frame-buffered LED strip presented through a `smart-leds` writer.
pub struct SmartLedStrip<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    write_errors: u32,
}

impl<W, const N: usize> SmartLedStrip<W, N>
where
    W: SmartLedsWrite,
    RGB8: Into<W::Color>,
{
    /// Wraps `writer` with an all-black frame.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
            write_errors: 0,
        }
    }

    /// Current frame buffer.
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.frame
    }

    /// Number of presents the writer rejected.
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Writer the frame is presented through.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the strip and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripDriver for SmartLedStrip<W, N>
where
    W: SmartLedsWrite,
    RGB8: Into<W::Color>,
{
    type Color = RGB8;

    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: RGB8, start: usize, count: usize) {
        let end = start.saturating_add(count).min(N);
        if let Some(pixels) = self.frame.get_mut(start..end) {
            pixels.fill(color);
        }
    }

    fn clear(&mut self) {
        self.frame = [RGB8::default(); N];
    }

    fn present(&mut self) {
        if self.writer.write(self.frame.iter().copied()).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);
        }
    }

    fn color_from_hue_brightness(&self, hue: u16, saturation: u8, brightness: u8) -> RGB8 {
        let hsv = Hsv::new(
            f32::from(hue) * 360.0 / 65536.0,
            f32::from(saturation) / 255.0,
            f32::from(brightness) / 255.0,
        );
        let rgb: Srgb = Srgb::from_color(hsv);
        let rgb: Srgb<u8> = rgb.into_format();
        let linear = RGB8::new(rgb.red, rgb.green, rgb.blue);

        gamma(iter::once(linear)).next().unwrap_or(linear)
    }
}
