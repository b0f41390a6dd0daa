//! Locale word tables for fuzzy-time and date phrases.
//!
//! All displayed language lives here as data: hour names, the twelve
//! 5-minute relation templates, day and month names, and the date format.
//! The code that consumes the tables ([`crate::phrase`]) is locale-agnostic.
//!
//! # Template Placeholders
//!
//! Templates use positional placeholders `%1`, `%2`, `%3`:
//! - Relation templates: `%1` = current hour name, `%2` = next hour name.
//!   A template may use either, both, or neither ("half past %1",
//!   "quarter to %2", "%1 o'clock").
//! - Date template: `%1` = day name, `%2` = day number, `%3` = month name.
//!
//! # Emphasis Marker
//!
//! A word prefixed with `*` in a template is drawn emphasized (accent color).
//! The marker is part of the locale data, not the code: a translation decides
//! which words carry visual weight. See [`crate::phrase::EmphasizedPhrase`].
//!
//! # Validation
//!
//! Table shape is validated once at load time. Every lookup afterwards
//! reduces its index modulo the table length, so a validated table can never
//! be indexed out of bounds at render time. A malformed table is a fatal
//! [`ConfigError`] surfaced at startup before anything is drawn.

use thiserror::Error;

// =============================================================================
// Table Shape Requirements
// =============================================================================

/// Number of hour names (one per hour of day, 0 = midnight).
pub const HOUR_COUNT: usize = 24;

/// Number of relation templates (one per 5-minute mark of the hour).
pub const REL_COUNT: usize = 12;

/// Number of day names (Sunday-first).
pub const DAY_COUNT: usize = 7;

/// Number of month names (January-first).
pub const MONTH_COUNT: usize = 12;

// =============================================================================
// Built-in English Locale
// =============================================================================

/// English hour names. Index 0 is midnight, 12 is noon; the remaining hours
/// use plain number words so "five past ten" reads naturally in both halves
/// of the day.
const EN_HOURS: [&str; HOUR_COUNT] = [
    "midnight", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "noon", "one",
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
];

/// English relation templates, indexed by 5-minute mark. Index 0 is on the
/// hour; 1..=6 count past the current hour (`%1`); 7..=11 count down to the
/// next hour (`%2`). Hour names carry the emphasis marker.
const EN_RELS: [&str; REL_COUNT] = [
    "*%1 o'clock",
    "five past *%1",
    "ten past *%1",
    "quarter past *%1",
    "twenty past *%1",
    "twenty-five past *%1",
    "half past *%1",
    "twenty-five to *%2",
    "twenty to *%2",
    "quarter to *%2",
    "ten to *%2",
    "five to *%2",
];

/// English day names, Sunday-first to match `num_days_from_sunday`.
const EN_DAYS: [&str; DAY_COUNT] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// English month names.
const EN_MONTHS: [&str; MONTH_COUNT] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
    "December",
];

/// English date format: day name, emphasized day number, month name.
const EN_DATE_FORMAT: &str = "%1 *%2 %3";

/// Text shown in the alert view when the peer connection drops.
/// Carries the same emphasis-marker convention as the templates.
pub const CONNECTION_LOST: &str = "phone connection *lost";

// =============================================================================
// Errors
// =============================================================================

/// Fatal word-table configuration error, detected at load time.
///
/// There is no recovery path: a face rendering from a malformed table would
/// show garbled phrases, so startup aborts instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A table has the wrong number of entries.
    #[error("{table} table must have {expected} entries, found {actual}")]
    WrongTableLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A table entry is empty or whitespace-only.
    #[error("{table} table entry {index} is blank")]
    BlankEntry { table: &'static str, index: usize },
}

// =============================================================================
// Word Tables
// =============================================================================

/// Immutable locale data, validated at construction.
///
/// Accessors reduce their index modulo the table length, so callers never
/// need range checks of their own.
pub struct WordTables {
    hours: Vec<String>,
    rels: Vec<String>,
    days: Vec<String>,
    months: Vec<String>,
    date_format: String,
}

impl WordTables {
    /// Build word tables from raw locale strings.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if any table has the wrong length or contains
    /// a blank entry.
    pub fn new(
        hours: &[&str],
        rels: &[&str],
        days: &[&str],
        months: &[&str],
        date_format: &str,
    ) -> Result<Self, ConfigError> {
        check_table("hours", hours, HOUR_COUNT)?;
        check_table("relations", rels, REL_COUNT)?;
        check_table("days", days, DAY_COUNT)?;
        check_table("months", months, MONTH_COUNT)?;
        if date_format.trim().is_empty() {
            return Err(ConfigError::BlankEntry {
                table: "date format",
                index: 0,
            });
        }

        Ok(Self {
            hours: to_owned(hours),
            rels: to_owned(rels),
            days: to_owned(days),
            months: to_owned(months),
            date_format: date_format.to_owned(),
        })
    }

    /// The built-in English locale.
    ///
    /// Still validated like any other table set, so a bad edit to the
    /// constants above fails fast at startup rather than rendering garbage.
    pub fn english() -> Result<Self, ConfigError> {
        Self::new(&EN_HOURS, &EN_RELS, &EN_DAYS, &EN_MONTHS, EN_DATE_FORMAT)
    }

    /// Hour name for `index` (reduced modulo 24).
    pub fn hour(&self, index: usize) -> &str { &self.hours[index % HOUR_COUNT] }

    /// Relation template for `index` (reduced modulo 12).
    pub fn rel(&self, index: usize) -> &str { &self.rels[index % REL_COUNT] }

    /// Day name for `index` (reduced modulo 7, 0 = Sunday).
    pub fn day(&self, index: usize) -> &str { &self.days[index % DAY_COUNT] }

    /// Month name for `index` (reduced modulo 12, 0 = January).
    pub fn month(&self, index: usize) -> &str { &self.months[index % MONTH_COUNT] }

    /// The date-format template.
    pub fn date_format(&self) -> &str { &self.date_format }
}

/// Validate one table: exact length, no blank entries.
fn check_table(name: &'static str, entries: &[&str], expected: usize) -> Result<(), ConfigError> {
    if entries.len() != expected {
        return Err(ConfigError::WrongTableLength {
            table: name,
            expected,
            actual: entries.len(),
        });
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(ConfigError::BlankEntry { table: name, index });
        }
    }
    Ok(())
}

fn to_owned(entries: &[&str]) -> Vec<String> { entries.iter().map(|e| (*e).to_owned()).collect() }

// =============================================================================
// Unit Tests
// =============================================================================
