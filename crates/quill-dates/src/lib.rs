//! Date formatting filters for the Quill blog generator.
//!
//! All functions take UTC dates and are pure given their inputs; the
//! one wall-clock dependency ([`current_year`]) goes through the
//! [`Clock`] trait so tests can pin a fixed instant instead of reading
//! process-wide time.
//!
//! Authored dates are UTC-normalized before they reach this crate,
//! which keeps output stable between the build machine's timezone and
//! the dates written in front matter.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Utc};

/// Error type for date formatting.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The strftime pattern contains an unrecognized specifier.
    ///
    /// Propagated to the caller so a build fails loudly instead of
    /// emitting wrong dates.
    #[error("malformed date format pattern: {0:?}")]
    InvalidPattern(String),
}

/// Format a date as `YYYY-MM-DD`.
///
/// Used for `<time datetime>` attributes and feed timestamps.
#[must_use]
pub fn to_iso_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date with an strftime-style pattern.
///
/// # Errors
///
/// Returns [`FormatError::InvalidPattern`] if the pattern is malformed.
pub fn format_with_pattern(date: &DateTime<Utc>, pattern: &str) -> Result<String, FormatError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.contains(&Item::Error) {
        return Err(FormatError::InvalidPattern(pattern.to_owned()));
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}

/// Format a date in long readable form, e.g. `January 5, 2024`.
#[must_use]
pub fn readable_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a post date: explicit pattern when given, medium form
/// (`Jan 5, 2024`) otherwise.
///
/// # Errors
///
/// Returns [`FormatError::InvalidPattern`] if an explicit pattern is
/// malformed.
pub fn post_date(date: &DateTime<Utc>, pattern: Option<&str>) -> Result<String, FormatError> {
    match pattern {
        Some(pattern) => format_with_pattern(date, pattern),
        None => Ok(date.format("%b %-d, %Y").to_string()),
    }
}

/// Format the year of a date as `YYYY`.
///
/// Grouping key for archive views, so the output must stay stable and
/// lexicographically comparable.
#[must_use]
pub fn year_of(date: &DateTime<Utc>) -> String {
    format!("{:04}", date.year())
}

/// The year of a date as a number.
///
/// Numeric counterpart of [`year_of`], used as a grouping key where
/// buckets compare numerically rather than lexicographically.
#[must_use]
pub fn year_number(date: &DateTime<Utc>) -> i32 {
    date.year()
}

/// Source of the current time.
///
/// Reifies the implicit wall-clock dependency so callers can inject a
/// fixed instant in tests.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant. Test double for [`SystemClock`].
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The current year, re-evaluated from the clock on every call.
pub fn current_year(clock: &dyn Clock) -> i32 {
    clock.now().year()
}
