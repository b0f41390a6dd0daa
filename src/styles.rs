//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but pointless to
//! repeat every frame; `MonoTextStyle::new` and the builders are const fn in
//! embedded-graphics 0.8, so every style the face uses is computed at
//! compile time and stored in the binary's read-only data.
//!
//! Each view draws its phrase with a plain style and an emphasis style of
//! the same font; the renderer picks per word based on the emphasis flag.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{AMBER, GRAY, RED, WHITE};

// =============================================================================
// Text Placement (const - zero runtime cost)
// =============================================================================

/// Left-aligned, top-baseline placement. The phrase renderer positions every
/// word by its top-left corner, so word x/y math stays in one place.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Large font for the fuzzy-time phrase.
pub const CLOCK_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for the date phrase and the alert text.
pub const DATE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Small font for the event-log overlay.
pub const LOG_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Phrase Styles (plain / emphasized pairs)
// =============================================================================

/// Plain fuzzy-time words.
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Emphasized fuzzy-time words (the hour name).
pub const CLOCK_STYLE_EMPHASIS: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, AMBER);

/// Plain date words.
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Emphasized date words (the day number).
pub const DATE_STYLE_EMPHASIS: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, AMBER);

/// Plain alert words.
pub const ALERT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, RED);

/// Emphasized alert words.
pub const ALERT_STYLE_EMPHASIS: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

// =============================================================================
// Overlay Styles
// =============================================================================

/// Event-log lines.
pub const LOG_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Event-log title and counters.
pub const LOG_TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
