//! Locale-aware festival date formatting.
//!
//! Formatting never fails outward: every problem ends up as a localized
//! placeholder. Internally each result is a [`DateOutcome`] that is turned into
//! text only at the end.

use crate::i18n::{Catalog, Locale, MessageKey};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::fmt::{self, Write};

/// Result of formatting a date or a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// Successfully formatted text.
    Valid(String),
    /// No date was given.
    Missing,
    /// A single date did not parse.
    Invalid,
    /// At least one side of a range did not parse.
    RangeInvalid,
    /// Formatting itself failed.
    Failed,
}

impl DateOutcome {
    /// Render the outcome, substituting placeholders for the non-valid cases.
    pub fn render(self, locale: Locale, catalog: &dyn Catalog) -> String {
        let key = match self {
            DateOutcome::Valid(text) => return text,
            DateOutcome::Missing => MessageKey::DateNotAvailable,
            DateOutcome::Invalid => MessageKey::DateInvalid,
            DateOutcome::RangeInvalid => MessageKey::DateRangeInvalid,
            DateOutcome::Failed => MessageKey::Error,
        };
        catalog.message(locale, key).to_string()
    }
}

/// Naive date-time forms, tried in order after the plain date and RFC 3339.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%MZ"];

/// Parse an ISO-8601 date or date-time into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of the month), `YYYY` (first of the
/// year), RFC 3339 timestamps, and `YYYY-MM-DDTHH:MM[:SS[.f]]` with or without
/// a `Z` or `+HH:MM` suffix. Timestamps with an offset keep the date in that
/// offset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%:z") {
        return Some(datetime.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| parse_year_month(value))
}

/// `YYYY-MM` or `YYYY`, anchored to the first day.
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match value.split_once('-') {
        Some((year, month)) if digits(month, 2) => (year, month.parse().ok()?),
        Some(_) => return None,
        None => (value, 1),
    };
    if !digits(year, 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Formats festival dates for one locale.
#[derive(Clone, Copy)]
pub struct DateFormatter<'a> {
    locale: Locale,
    catalog: &'a dyn Catalog,
}

impl std::fmt::Debug for DateFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateFormatter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl<'a> DateFormatter<'a> {
    /// Create a formatter for `locale` backed by `catalog`.
    pub fn new(locale: Locale, catalog: &'a dyn Catalog) -> Self {
        Self { locale, catalog }
    }

    /// Locale this formatter renders in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format a single date as "month day, year" in the active locale.
    pub fn format_date(&self, date: Option<&str>) -> String {
        self.date_outcome(date).render(self.locale, self.catalog)
    }

    /// Format a start/end pair, showing the year once when both share it.
    pub fn format_date_range(&self, start: Option<&str>, end: Option<&str>) -> String {
        self.range_outcome(start, end)
            .render(self.locale, self.catalog)
    }

    /// Classify and format a single date.
    pub fn date_outcome(&self, date: Option<&str>) -> DateOutcome {
        let Some(raw) = present(date) else {
            return DateOutcome::Missing;
        };
        let Some(date) = parse_date(raw) else {
            return DateOutcome::Invalid;
        };

        let mut out = String::new();
        match self.write_full(&mut out, date) {
            Ok(()) => DateOutcome::Valid(out),
            Err(_) => {
                tracing::error!("Error formatting date: {}", raw);
                DateOutcome::Failed
            },
        }
    }

    /// Classify and format a date range.
    pub fn range_outcome(&self, start: Option<&str>, end: Option<&str>) -> DateOutcome {
        let Some(start_raw) = present(start) else {
            return DateOutcome::Missing;
        };
        let Some(end_raw) = present(end) else {
            return self.date_outcome(Some(start_raw));
        };

        let (Some(start_date), Some(end_date)) = (parse_date(start_raw), parse_date(end_raw))
        else {
            return DateOutcome::RangeInvalid;
        };

        if start_date.year() != end_date.year() {
            // Each side is rendered on its own, placeholders included.
            return DateOutcome::Valid(format!(
                "{} - {}",
                self.format_date(Some(start_raw)),
                self.format_date(Some(end_raw))
            ));
        }

        let mut out = String::new();
        let written = self
            .write_month_day(&mut out, start_date)
            .and_then(|()| out.write_str(" - "))
            .and_then(|()| self.write_full(&mut out, end_date));
        match written {
            Ok(()) => DateOutcome::Valid(out),
            Err(_) => {
                tracing::error!("Error formatting date range: {} - {}", start_raw, end_raw);
                DateOutcome::Failed
            },
        }
    }

    fn month(&self, date: NaiveDate) -> Result<&'a str, fmt::Error> {
        self.catalog
            .month_abbrev(self.locale, date.month())
            .ok_or(fmt::Error)
    }

    fn write_month_day(&self, out: &mut String, date: NaiveDate) -> fmt::Result {
        let month = self.month(date)?;
        match self.locale {
            Locale::En => write!(out, "{} {}", month, date.day()),
            Locale::De => write!(out, "{}. {}", date.day(), month),
        }
    }

    fn write_full(&self, out: &mut String, date: NaiveDate) -> fmt::Result {
        let month = self.month(date)?;
        match self.locale {
            Locale::En => write!(out, "{} {}, {}", month, date.day(), date.year()),
            Locale::De => write!(out, "{}. {} {}", date.day(), month, date.year()),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::BuiltinCatalog;

    fn english() -> DateFormatter<'static> {
        DateFormatter::new(Locale::En, &BuiltinCatalog)
    }

    fn german() -> DateFormatter<'static> {
        DateFormatter::new(Locale::De, &BuiltinCatalog)
    }

    /// Catalog with no month names, so every formatting attempt fails.
    struct NoMonths;

    impl Catalog for NoMonths {
        fn message(&self, locale: Locale, key: MessageKey) -> &str {
            let builtin: &'static BuiltinCatalog = &BuiltinCatalog;
            builtin.message(locale, key)
        }

        fn month_abbrev(&self, _locale: Locale, _month: u32) -> Option<&str> {
            None
        }
    }

    #[test]
    fn missing_date_is_not_available() {
        assert_eq!(english().format_date(None), "N/A");
        assert_eq!(english().format_date(Some("")), "N/A");
        assert_eq!(german().format_date(None), "k. A.");
    }

    #[test]
    fn unparsable_date_is_invalid() {
        assert_eq!(english().format_date(Some("not-a-date")), "Invalid date");
        assert_eq!(english().format_date(Some("2023-02-30")), "Invalid date");
        assert_eq!(english().date_outcome(Some("2023-13-01")), DateOutcome::Invalid);
    }

    #[test]
    fn formats_single_dates_per_locale() {
        assert_eq!(english().format_date(Some("2023-03-15")), "Mar 15, 2023");
        assert_eq!(german().format_date(Some("2023-03-15")), "15. März 2023");
    }

    #[test]
    fn accepts_timestamps() {
        assert_eq!(
            english().format_date(Some("2023-07-10T18:30:00Z")),
            "Jul 10, 2023"
        );
        assert_eq!(
            english().format_date(Some("2023-07-10T23:30:00-02:00")),
            "Jul 10, 2023"
        );
        assert_eq!(
            english().format_date(Some("2023-07-10T08:00:00.250")),
            "Jul 10, 2023"
        );
    }

    #[test]
    fn accepts_minute_precision_timestamps() {
        let formatter = english();
        assert_eq!(formatter.format_date(Some("2023-06-15T10:00")), "Jun 15, 2023");
        assert_eq!(formatter.format_date(Some("2023-06-15T10:00Z")), "Jun 15, 2023");
        assert_eq!(formatter.format_date(Some("2023-06-15T23:30+02:00")), "Jun 15, 2023");
        assert_eq!(
            formatter.format_date_range(Some("2023-06-15T10:00"), Some("2023-06-18T22:00")),
            "Jun 15 - Jun 18, 2023"
        );
        assert_eq!(formatter.format_date(Some("2023-06-15T25:00")), "Invalid date");
    }

    #[test]
    fn accepts_year_month_and_year() {
        let formatter = english();
        assert_eq!(formatter.format_date(Some("2023-06")), "Jun 1, 2023");
        assert_eq!(formatter.format_date(Some("2023")), "Jan 1, 2023");
        assert_eq!(german().format_date(Some("2023-03")), "1. März 2023");
        assert_eq!(
            formatter.format_date_range(Some("2023-06"), Some("2023-08")),
            "Jun 1 - Aug 1, 2023"
        );
    }

    #[test]
    fn rejects_malformed_partial_dates() {
        let formatter = english();
        for raw in ["2023-13", "2023-6", "23", "20230", "2023-", "-06", "2023-06-"] {
            assert_eq!(formatter.date_outcome(Some(raw)), DateOutcome::Invalid, "{}", raw);
        }
    }

    #[test]
    fn same_year_range_shows_year_once() {
        assert_eq!(
            english().format_date_range(Some("2023-03-15"), Some("2023-03-20")),
            "Mar 15 - Mar 20, 2023"
        );
        assert_eq!(
            german().format_date_range(Some("2023-03-15"), Some("2023-03-20")),
            "15. März - 20. März 2023"
        );
    }

    #[test]
    fn cross_year_range_shows_both_years() {
        assert_eq!(
            english().format_date_range(Some("2022-12-30"), Some("2023-01-02")),
            "Dec 30, 2022 - Jan 2, 2023"
        );
    }

    #[test]
    fn range_without_end_matches_single_date() {
        let formatter = english();
        assert_eq!(
            formatter.format_date_range(Some("2023-03-15"), None),
            formatter.format_date(Some("2023-03-15"))
        );
        assert_eq!(
            formatter.format_date_range(Some("garbage"), Some("")),
            "Invalid date"
        );
    }

    #[test]
    fn range_without_start_is_not_available() {
        assert_eq!(english().format_date_range(None, Some("2023-03-20")), "N/A");
        assert_eq!(english().format_date_range(Some(""), None), "N/A");
    }

    #[test]
    fn range_with_invalid_side_is_range_invalid() {
        assert_eq!(
            english().format_date_range(Some("2023-03-15"), Some("soon")),
            "Invalid date range"
        );
        assert_eq!(
            german().range_outcome(Some("bald"), Some("2023-03-15")),
            DateOutcome::RangeInvalid
        );
    }

    #[test]
    fn formatting_failure_degrades_to_error_text() {
        let formatter = DateFormatter::new(Locale::En, &NoMonths);
        assert_eq!(formatter.format_date(Some("2023-03-15")), "Error");
        assert_eq!(
            formatter.format_date_range(Some("2023-03-15"), Some("2023-03-20")),
            "Error"
        );
        assert_eq!(
            formatter.format_date_range(Some("2022-12-30"), Some("2023-01-02")),
            "Error - Error"
        );
        assert_eq!(formatter.format_date(None), "N/A");
    }
}
