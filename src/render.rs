//! Phrase rendering and redraw tracking.
//!
//! Draws an [`EmphasizedPhrase`] as a centered block of words: greedy wrap
//! over the text area, each line centered horizontally, the whole block
//! centered vertically. Emphasized words use the view's accent style, plain
//! words the base style; everything else about a word is identical, so
//! emphasis never changes the layout.
//!
//! # Redraw Skipping
//!
//! A fuzzy phrase changes at most every 5 minutes, so redrawing every frame
//! is pure waste. [`RenderState`] remembers the last (view, phrase) pair
//! that was drawn and the main loop skips the clear + draw when nothing
//! changed. Toggling the overlay invalidates the tracking so the face is
//! repainted when the overlay closes.
//!
//! # Width Math
//!
//! All fonts here are monospaced, so a word's pixel width is
//! `chars * (glyph width + spacing) - spacing` and an inter-word space is
//! one glyph advance. No per-glyph measuring is needed.

use core::fmt::Write;
use std::ops::Range;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::BLACK;
use crate::config::{CENTER_X, CENTER_Y, TEXT_WIDTH, X_PADDING};
use crate::log::EventLog;
use crate::phrase::{EmphasizedPhrase, Word};
use crate::styles::{
    ALERT_STYLE, ALERT_STYLE_EMPHASIS, CLOCK_FONT, CLOCK_STYLE, CLOCK_STYLE_EMPHASIS, DATE_FONT, DATE_STYLE,
    DATE_STYLE_EMPHASIS, LEFT_TOP, LOG_FONT, LOG_STYLE, LOG_TITLE_STYLE,
};
use crate::view::View;

/// Vertical gap between wrapped phrase lines, in pixels.
const LINE_SPACING: u32 = 6;

/// Vertical step between event-log overlay lines.
const LOG_LINE_STEP: i32 = (LOG_FONT.character_size.height + 2) as i32;

// =============================================================================
// Width Math
// =============================================================================

/// Horizontal advance of one glyph (including inter-glyph spacing).
const fn char_advance(font: &MonoFont) -> u32 { font.character_size.width + font.character_spacing }

/// Pixel width of a single word in `font`.
fn word_width(text: &str, font: &MonoFont) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 { 0 } else { chars * char_advance(font) - font.character_spacing }
}

/// Pixel width of a full line of words, including inter-word spaces.
fn line_width(words: &[Word], font: &MonoFont) -> u32 {
    let mut width = 0;
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            width += char_advance(font);
        }
        width += word_width(&word.text, font);
    }
    width
}

/// Greedy word wrap: pack words into lines no wider than `max_width`.
///
/// Returns index ranges into `words`. A word wider than `max_width` gets a
/// line of its own rather than being split.
fn wrap_lines(words: &[Word], font: &MonoFont, max_width: u32) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (i, word) in words.iter().enumerate() {
        let ww = word_width(&word.text, font);
        if i == start {
            // First word of a line always stays, however wide.
            width = ww;
            continue;
        }
        let extended = width + char_advance(font) + ww;
        if extended > max_width {
            lines.push(start..i);
            start = i;
            width = ww;
        } else {
            width = extended;
        }
    }
    if start < words.len() {
        lines.push(start..words.len());
    }
    lines
}

// =============================================================================
// Redraw Tracking
// =============================================================================

/// Remembers the last drawn (view, phrase) pair so unchanged frames skip
/// the clear + redraw entirely.
pub struct RenderState {
    last: Option<(View, EmphasizedPhrase)>,
}

impl RenderState {
    pub const fn new() -> Self { Self { last: None } }

    /// Returns `true` (and records the new pair) when the face must be
    /// repainted; `false` when the previous frame is still correct.
    pub fn needs_redraw(&mut self, view: View, phrase: &EmphasizedPhrase) -> bool {
        let changed = match &self.last {
            Some((last_view, last_phrase)) => *last_view != view || last_phrase != phrase,
            None => true,
        };
        if changed {
            self.last = Some((view, phrase.clone()));
        }
        changed
    }

    /// Forget the tracked frame; the next check always redraws.
    /// Used when the overlay has painted over the face.
    pub fn invalidate(&mut self) { self.last = None; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Drawing
// =============================================================================

/// Font and (plain, emphasis) styles for a view.
const fn view_styles(
    view: View,
) -> (
    &'static MonoFont<'static>,
    MonoTextStyle<'static, Rgb565>,
    MonoTextStyle<'static, Rgb565>,
) {
    match view {
        View::Clock => (CLOCK_FONT, CLOCK_STYLE, CLOCK_STYLE_EMPHASIS),
        View::Date => (DATE_FONT, DATE_STYLE, DATE_STYLE_EMPHASIS),
        View::Alert => (DATE_FONT, ALERT_STYLE, ALERT_STYLE_EMPHASIS),
    }
}

/// Clear the display and draw `phrase` centered, styled for `view`.
pub fn draw_face(display: &mut SimulatorDisplay<Rgb565>, view: View, phrase: &EmphasizedPhrase) {
    display.clear(BLACK).ok();

    let (font, plain, emphasis) = view_styles(view);
    let words = phrase.words();
    let lines = wrap_lines(words, font, TEXT_WIDTH);
    if lines.is_empty() {
        return;
    }

    let line_height = font.character_size.height + LINE_SPACING;
    let block_height = lines.len() as u32 * line_height - LINE_SPACING;
    let mut y = CENTER_Y - (block_height / 2) as i32;

    for range in lines {
        let line = &words[range];
        let mut x = CENTER_X - (line_width(line, font) / 2) as i32;
        for word in line {
            let style = if word.emphasized { emphasis } else { plain };
            Text::with_text_style(&word.text, Point::new(x, y), style, LEFT_TOP)
                .draw(display)
                .ok();
            x += (word_width(&word.text, font) + char_advance(font)) as i32;
        }
        y += line_height as i32;
    }
}

/// Clear the display and draw the event-log overlay page.
pub fn draw_log_overlay(display: &mut SimulatorDisplay<Rgb565>, log: &EventLog, haptic_pulses: u32) {
    display.clear(BLACK).ok();

    let x = X_PADDING as i32;
    Text::with_text_style("EVENT LOG", Point::new(x, 12), LOG_TITLE_STYLE, LEFT_TOP)
        .draw(display)
        .ok();

    let mut counter: String<32> = String::new();
    let _ = write!(counter, "haptic pulses: {haptic_pulses}");
    Text::with_text_style(&counter, Point::new(x, 12 + LOG_LINE_STEP), LOG_TITLE_STYLE, LEFT_TOP)
        .draw(display)
        .ok();

    let mut y = 12 + 2 * LOG_LINE_STEP + 4;
    for line in log.iter() {
        Text::with_text_style(line, Point::new(x, y), LOG_STYLE, LEFT_TOP).draw(display).ok();
        y += LOG_LINE_STEP;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
