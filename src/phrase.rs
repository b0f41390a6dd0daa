//! Fuzzy-time and date phrase generation.
//!
//! Converts a wall-clock time into a natural-language phrase rounded to the
//! nearest 5-minute mark ("five past ten", "quarter to noon") and a date into
//! its spoken form, both with per-word emphasis markup for the renderer.
//!
//! # Rounding
//!
//! Rounding is done entirely in integer arithmetic so phrase selection is
//! deterministic at minute boundaries:
//!
//! - `half_minutes = 2*minute + second/30` counts which half-minute of the
//!   hour we are in (0..119).
//! - `rel_index = ((half_minutes + 5) / 10) % 12` rounds to the nearest
//!   5-minute mark and selects one of the twelve relation templates.
//! - When rounding wraps past the hour (`rel_index == 0` with `minute > 30`),
//!   the *next* hour's name is used: 10:58 reads "eleven o'clock".
//!
//! # Emphasis Markup
//!
//! Formatted template text is split on whitespace; a word prefixed with the
//! [`EMPHASIS_MARKER`] is flagged emphasized and the marker stripped. The
//! markup lives in the locale data (see [`crate::locale`]); this module only
//! recognizes the single marker character.
//!
//! Both entry points are pure functions of their arguments: the same
//! timestamp and tables always produce the identical phrase.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::config::EMPHASIS_MARKER;
use crate::locale::{HOUR_COUNT, REL_COUNT, WordTables};

// =============================================================================
// Phrase Types
// =============================================================================

/// One displayed word with its emphasis flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    /// The word text, marker already stripped.
    pub text: String,
    /// Whether the renderer should draw this word in the accent style.
    pub emphasized: bool,
}

/// An ordered sequence of words with per-word emphasis.
///
/// Built fresh on every render request; `PartialEq` lets the renderer skip
/// frames whose phrase did not change.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EmphasizedPhrase {
    words: Vec<Word>,
}

impl EmphasizedPhrase {
    /// Parse marked-up text into a phrase.
    ///
    /// Splits on whitespace; a leading [`EMPHASIS_MARKER`] on a word sets its
    /// emphasis flag and is stripped. A bare marker with no word following it
    /// is dropped entirely.
    pub fn parse(text: &str) -> Self {
        let words = text
            .split_whitespace()
            .filter_map(|raw| {
                let (text, emphasized) = match raw.strip_prefix(EMPHASIS_MARKER) {
                    Some(stripped) => (stripped, true),
                    None => (raw, false),
                };
                if text.is_empty() {
                    None
                } else {
                    Some(Word {
                        text: text.to_owned(),
                        emphasized,
                    })
                }
            })
            .collect();
        Self { words }
    }

    /// The words in display order.
    pub fn words(&self) -> &[Word] { &self.words }

    /// Join the words back into plain text (for the event log).
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for word in &self.words {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&word.text);
        }
        out
    }
}

// =============================================================================
// Template Substitution
// =============================================================================

/// Substitute positional placeholders `%1`..`%n` with `args`.
///
/// A template may use any placeholder zero or more times; placeholders
/// beyond `args.len()` are left untouched (a validated locale never
/// references one).
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = template.to_owned();
    for (i, arg) in args.iter().enumerate() {
        let placeholder = format!("%{}", i + 1);
        out = out.replace(&placeholder, arg);
    }
    out
}

// =============================================================================
// Phrase Generation
// =============================================================================

/// The 5-minute relation and hour-name indices for a time of day.
///
/// Exposed separately from [`fuzzy_time`] so the rounding arithmetic can be
/// tested exhaustively without building phrases.
pub const fn fuzzy_indices(hour: u32, minute: u32, second: u32) -> (usize, usize) {
    let half_minutes = (2 * minute + second / 30) as usize;
    let rel_index = ((half_minutes + 5) / 10) % REL_COUNT;

    // When rounding wrapped past the hour, the phrase names the next hour.
    let hour_index = if rel_index == 0 && minute > 30 {
        (hour as usize + 1) % HOUR_COUNT
    } else {
        hour as usize % HOUR_COUNT
    };

    (rel_index, hour_index)
}

/// Generate the fuzzy-time phrase for a time of day.
pub fn fuzzy_time(time: NaiveTime, tables: &WordTables) -> EmphasizedPhrase {
    let (rel_index, hour_index) = fuzzy_indices(time.hour(), time.minute(), time.second());

    let hour = tables.hour(hour_index);
    let next_hour = tables.hour(hour_index + 1);
    let text = substitute(tables.rel(rel_index), &[hour, next_hour]);

    EmphasizedPhrase::parse(&text)
}

/// Generate the date phrase for a calendar date.
pub fn date_phrase(date: NaiveDate, tables: &WordTables) -> EmphasizedPhrase {
    let day_name = tables.day(date.weekday().num_days_from_sunday() as usize);
    let day_number = date.day().to_string();
    let month_name = tables.month(date.month0() as usize);

    let text = substitute(tables.date_format(), &[day_name, &day_number, month_name]);
    EmphasizedPhrase::parse(&text)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> WordTables { WordTables::english().unwrap() }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, m, s).unwrap() }

    // -------------------------------------------------------------------------
    // Emphasis Markup Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_marked_words() {
        let phrase = EmphasizedPhrase::parse("*five past *ten");
        let words: Vec<(&str, bool)> = phrase.words().iter().map(|w| (w.text.as_str(), w.emphasized)).collect();
        assert_eq!(words, vec![("five", true), ("past", false), ("ten", true)]);
    }

    #[test]
    fn test_parse_strips_marker_from_display_text() {
        let phrase = EmphasizedPhrase::parse("*noon");
        assert_eq!(phrase.plain_text(), "noon", "Marker must never reach the display");
    }

    #[test]
    fn test_parse_bare_marker_dropped() {
        let phrase = EmphasizedPhrase::parse("half * past");
        assert_eq!(phrase.plain_text(), "half past", "A marker with no word is dropped");
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let phrase = EmphasizedPhrase::parse("  quarter   to  *one ");
        assert_eq!(phrase.words().len(), 3);
        assert_eq!(phrase.plain_text(), "quarter to one");
    }

    // -------------------------------------------------------------------------
    // Template Substitution
    // -------------------------------------------------------------------------

    #[test]
    fn test_substitute_both_placeholders() {
        assert_eq!(substitute("%1 into %2", &["ten", "eleven"]), "ten into eleven");
    }

    #[test]
    fn test_substitute_unused_placeholder() {
        assert_eq!(substitute("on the hour", &["ten", "eleven"]), "on the hour");
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        assert_eq!(substitute("%1 %1", &["ten"]), "ten ten");
    }

    #[test]
    fn test_substitute_three_args() {
        assert_eq!(substitute("%1 *%2 %3", &["Friday", "29", "August"]), "Friday *29 August");
    }

    // -------------------------------------------------------------------------
    // Rounding Arithmetic
    // -------------------------------------------------------------------------

    #[test]
    fn test_indices_in_range_for_all_minutes_and_seconds() {
        // Every (minute, second) combination must produce in-range indices:
        // no out-of-bounds lookups are possible after validation.
        for hour in [0, 10, 23] {
            for minute in 0..60 {
                for second in 0..60 {
                    let (rel_index, hour_index) = fuzzy_indices(hour, minute, second);
                    assert!(rel_index < REL_COUNT, "rel_index {rel_index} out of range at {hour}:{minute}:{second}");
                    assert!(
                        hour_index < HOUR_COUNT,
                        "hour_index {hour_index} out of range at {hour}:{minute}:{second}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_on_the_hour_no_forward_rounding() {
        // 10:00:00 is exactly on the hour: relation 0, hour unchanged.
        let (rel_index, hour_index) = fuzzy_indices(10, 0, 0);
        assert_eq!(rel_index, 0);
        assert_eq!(hour_index, 10, "minute=0 is not > 30, so the hour must not advance");
    }

    #[test]
    fn test_last_half_minute_rounds_to_next_hour() {
        // 10:59:59 rounds forward to "eleven o'clock".
        let (rel_index, hour_index) = fuzzy_indices(10, 59, 59);
        assert_eq!(rel_index, 0);
        assert_eq!(hour_index, 11);
    }

    #[test]
    fn test_midnight_wraps_from_23() {
        // 23:58:00 rounds forward across the day boundary.
        let (rel_index, hour_index) = fuzzy_indices(23, 58, 0);
        assert_eq!(rel_index, 0);
        assert_eq!(hour_index, 0, "Hour 23 + 1 must wrap to 0");
    }

    #[test]
    fn test_half_minute_rounds_up() {
        // 10:02:30 counts as 2.5 minutes => rounds to the five-past mark,
        // while 10:02:29 still rounds down to the hour.
        let (rel_at_29s, _) = fuzzy_indices(10, 2, 29);
        let (rel_at_30s, _) = fuzzy_indices(10, 2, 30);
        assert_eq!(rel_at_29s, 0);
        assert_eq!(rel_at_30s, 1);
    }

    // -------------------------------------------------------------------------
    // Fuzzy-Time Phrases
    // -------------------------------------------------------------------------

    #[test]
    fn test_five_past_ten() {
        let phrase = fuzzy_time(time(10, 5, 0), &tables());
        assert_eq!(phrase.plain_text(), "five past ten");
    }

    #[test]
    fn test_twenty_five_to_eleven() {
        // 10:33 -> half_minutes 66 -> rel ((66+5)/10) % 12 = 7 -> counting
        // down to the next hour.
        let phrase = fuzzy_time(time(10, 33, 0), &tables());
        assert_eq!(phrase.plain_text(), "twenty-five to eleven");
    }

    #[test]
    fn test_quarter_to_noon() {
        let phrase = fuzzy_time(time(11, 45, 0), &tables());
        assert_eq!(phrase.plain_text(), "quarter to noon");
    }

    #[test]
    fn test_half_past_midnight() {
        let phrase = fuzzy_time(time(0, 30, 0), &tables());
        assert_eq!(phrase.plain_text(), "half past midnight");
    }

    #[test]
    fn test_rounds_forward_to_next_oclock() {
        let phrase = fuzzy_time(time(10, 58, 0), &tables());
        assert_eq!(phrase.plain_text(), "eleven o'clock");
    }

    #[test]
    fn test_hour_name_is_emphasized() {
        let phrase = fuzzy_time(time(10, 5, 0), &tables());
        let ten = phrase.words().iter().find(|w| w.text == "ten").unwrap();
        assert!(ten.emphasized, "The hour name carries the emphasis marker");
        let past = phrase.words().iter().find(|w| w.text == "past").unwrap();
        assert!(!past.emphasized);
    }

    #[test]
    fn test_fuzzy_time_is_pure() {
        let t = time(14, 22, 41);
        let tables = tables();
        assert_eq!(fuzzy_time(t, &tables), fuzzy_time(t, &tables), "Same input must yield identical phrases");
    }

    // -------------------------------------------------------------------------
    // Date Phrases
    // -------------------------------------------------------------------------

    #[test]
    fn test_date_phrase() {
        // 2026-08-29 is a Saturday.
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let phrase = date_phrase(date, &tables());
        assert_eq!(phrase.plain_text(), "Saturday 29 August");
    }

    #[test]
    fn test_date_phrase_day_number_emphasized() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let phrase = date_phrase(date, &tables());
        let day = phrase.words().iter().find(|w| w.text == "29").unwrap();
        assert!(day.emphasized, "The day number carries the emphasis marker");
    }

    #[test]
    fn test_date_phrase_sunday_first_weekday() {
        // 2026-08-30 is a Sunday; index 0 in the Sunday-first day table.
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let phrase = date_phrase(date, &tables());
        assert_eq!(phrase.words()[0].text, "Sunday");
    }
}
