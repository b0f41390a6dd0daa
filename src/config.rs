//! Application configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout values like the screen center are computed at compile time as `const`,
//! avoiding per-frame arithmetic. These constants are used throughout the rendering
//! code instead of recalculating positions every frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (square watch display, 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Horizontal inset on each side of the text area. Keeps phrases away from
/// the rounded bezel of a watch display.
pub const X_PADDING: u32 = 16;

/// Maximum width available to a wrapped phrase line.
pub const TEXT_WIDTH: u32 = SCREEN_WIDTH - X_PADDING * 2;

/// Screen center X coordinate. Used for centering phrase lines.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for vertically centering phrase blocks.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between periodic render ticks. The displayed phrase only changes
/// on 5-minute boundaries, so one tick per minute is plenty.
pub const UPDATE_INTERVAL_MS: i64 = 60_000;

/// How long the date view stays up after a tap before reverting to the clock.
pub const REVERT_DELAY: Duration = Duration::from_secs(3);

// =============================================================================
// Phrase Markup Configuration
// =============================================================================

/// Marker character prefixing a template word that should be emphasized.
/// The marker is stripped during parsing; it never reaches the display.
pub const EMPHASIS_MARKER: char = '*';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_fits_screen() {
        assert!(TEXT_WIDTH < SCREEN_WIDTH, "Text area must leave padding on both sides");
        assert_eq!(TEXT_WIDTH, SCREEN_WIDTH - 2 * X_PADDING);
    }

    #[test]
    fn test_update_interval_is_one_minute() {
        assert_eq!(UPDATE_INTERVAL_MS, 60_000, "Tick interval should be one minute");
    }

    #[test]
    fn test_revert_delay() {
        assert_eq!(REVERT_DELAY, Duration::from_secs(3), "Date view should revert after 3 seconds");
    }
}
