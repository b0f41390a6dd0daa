//! Color palette constants (RGB565).
//!
//! Defined once as `const` so styles and drawing code share the exact same
//! values. RGB565 is the native pixel format of small SPI watch displays.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Plain phrase words.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Emphasized phrase words (tint stands in for bold on a mono font).
pub const AMBER: Rgb565 = Rgb565::new(31, 42, 5);

/// Connection-lost alert text.
pub const RED: Rgb565 = Rgb565::new(31, 12, 6);

/// Event-log overlay text.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
