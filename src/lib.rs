#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Animator`**: Moves one strip toward a target fill level, a step per tick
//! - **`AnimatorConfig`**: Gradient, segmentation, speed, brightness and clipping
//! - **`StripDriver`**: Trait to implement for your LED strip hardware
//! - **`SmartLedStrip`**: Ready-made `StripDriver` over any `smart-leds` writer
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Position`**: Fill level as whole units plus partial brightness
//! - **`AnimatorAction`**: Commands that can be sent to control an animator
//!
//! A unit is one pixel, or one segment of contiguous pixels when the animator
//! is segmented. The fill level is encoded as `unit * max_brightness + level`,
//! so `max_position = max_brightness * units` means a fully lit strip.

pub mod animator;
pub mod command;
pub mod driver;
pub mod hue;
pub mod position;
pub mod smart_strip;
pub mod time;
pub mod types;

pub use animator::Animator;
pub use command::AnimatorAction;
pub use driver::StripDriver;
pub use hue::HueGradient;
pub use position::Position;
pub use smart_strip::SmartLedStrip;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{AnimatorConfig, AnimatorState, ConfigError, DEFAULT_HUE, Tick};

#[cfg(feature = "std")]
pub use time::SystemClock;
