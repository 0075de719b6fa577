//! Hardware abstraction for addressable LED strips.

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip hardware to let an
/// [`Animator`](crate::Animator) drive it. Writes only touch the pixel buffer;
/// nothing reaches the LEDs until [`present`](StripDriver::present) is called.
/// Handle any hardware errors internally - these methods cannot fail.
pub trait StripDriver {
    /// Native color value of the strip.
    type Color: Copy;

    /// Number of pixels on the strip.
    fn pixel_count(&self) -> usize;

    /// Sets a single pixel. Out-of-range indices must be ignored.
    fn set_pixel(&mut self, index: usize, color: Self::Color);

    /// Sets `count` pixels starting at `start`. Pixels past the end must be ignored.
    fn fill(&mut self, color: Self::Color, start: usize, count: usize);

    /// Zeroes the pixel buffer without presenting it.
    fn clear(&mut self);

    /// Pushes the pixel buffer to the hardware.
    fn present(&mut self);

    /// Converts a 16-bit hue, saturation and brightness to a gamma-corrected color.
    fn color_from_hue_brightness(&self, hue: u16, saturation: u8, brightness: u8) -> Self::Color;
}
