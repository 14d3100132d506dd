mod consts;
mod digits;
mod prelude;
mod types;

pub use consts::*;
pub use digits::{to_latin_digits, to_persian_digits};
pub use types::{Month, Season, Weekday, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Persian calendar helper.
/// Holds an output pattern such as `%d/%m/%Y` and exposes the leap-year rule,
/// digit transliteration, and the Persian name tables.
/// The pattern is kept verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{format}")]
#[serde(from = "String", into = "String")]
pub struct PersianDate {
    format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),
    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[error("Invalid season: {0} (must be 0-3)")]
    InvalidSeason(u8),
}

impl PersianDate {
    /// Creates a helper around `format`. Any string is accepted.
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        log::debug!("PersianDate created with format {format:?}");
        Self { format }
    }

    /// Returns the stored format pattern unchanged
    pub fn jalali(&self) -> &str {
        &self.format
    }

    /// Detects whether the given Persian year is a leap year (kabiseh).
    /// See [`is_leap_year`].
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        types::is_leap_year(year)
    }

    /// Converts Latin digits to Persian ones, e.g. `1402` to `۱۴۰۲`
    #[allow(clippy::unused_self)]
    pub fn to_persian_digits(&self, text: &str) -> String {
        digits::to_persian_digits(text)
    }

    /// Converts Persian digits to Latin ones, e.g. `۱۴۰۲` to `1402`
    #[allow(clippy::unused_self)]
    pub fn to_latin_digits(&self, text: &str) -> String {
        digits::to_latin_digits(text)
    }

    #[allow(clippy::unused_self)]
    pub const fn months(&self) -> &'static [&'static str; 12] {
        &MONTH_NAMES
    }

    #[allow(clippy::unused_self)]
    pub const fn short_months(&self) -> &'static [&'static str; 12] {
        &SHORT_MONTH_NAMES
    }

    #[allow(clippy::unused_self)]
    pub const fn weekdays(&self) -> &'static [&'static str; 7] {
        &WEEKDAY_NAMES
    }

    #[allow(clippy::unused_self)]
    pub const fn short_weekdays(&self) -> &'static [&'static str; 7] {
        &SHORT_WEEKDAY_NAMES
    }

    #[allow(clippy::unused_self)]
    pub const fn seasons(&self) -> &'static [&'static str; 4] {
        &SEASON_NAMES
    }
}

impl Default for PersianDate {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl From<String> for PersianDate {
    fn from(format: String) -> Self {
        Self::new(format)
    }
}

impl From<&str> for PersianDate {
    fn from(format: &str) -> Self {
        Self::new(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jalali_returns_format_verbatim() {
        let date = PersianDate::new("%d/%m/%Y");
        assert_eq!(date.jalali(), "%d/%m/%Y");
    }

    #[test]
    fn test_any_format_is_accepted() {
        for format in ["", "%Y-%m-%d", "not a pattern", "%%%", "۱۴۰۲ %Q"] {
            assert_eq!(PersianDate::new(format).jalali(), format);
        }
    }

    #[test]
    fn test_default_format() {
        assert_eq!(PersianDate::default().jalali(), DEFAULT_FORMAT);
        assert_eq!(PersianDate::default(), PersianDate::new("%d/%m/%Y"));
    }

    #[test]
    fn test_display() {
        let date = PersianDate::new("%Y/%m/%d");
        assert_eq!(date.to_string(), "%Y/%m/%d");
    }

    #[test]
    fn test_string_conversions() {
        let date: PersianDate = "%d %B".into();
        assert_eq!(date.jalali(), "%d %B");

        let date = PersianDate::from(String::from("%Y"));
        let format: String = date.into();
        assert_eq!(format, "%Y");
    }

    #[test]
    fn test_is_leap_year_demo_years() {
        let leap: Vec<i64> = (1402..=1410)
            .filter(|&y| PersianDate::is_leap_year(y))
            .collect();
        assert_eq!(leap, [1403, 1407]);
    }

    #[test]
    fn test_is_leap_year_agrees_with_free_fn() {
        for year in 1300..1500 {
            assert_eq!(PersianDate::is_leap_year(year), is_leap_year(year));
        }
    }

    #[test]
    fn test_digit_conversion_examples() {
        let date = PersianDate::new("%d/%m/%Y");
        assert_eq!(date.to_persian_digits("1402/01/01 salam"), "۱۴۰۲/۰۱/۰۱ salam");
        assert_eq!(date.to_latin_digits("۱۴۰۲/۰۱/۰۱ سلام"), "1402/01/01 سلام");
    }

    #[test]
    fn test_digit_conversion_ignores_format() {
        let a = PersianDate::new("%d/%m/%Y");
        let b = PersianDate::new("anything");
        assert_eq!(a.to_persian_digits("2024"), b.to_persian_digits("2024"));
        assert_eq!(a.to_latin_digits("۲۰۲۴"), b.to_latin_digits("۲۰۲۴"));
    }

    #[test]
    fn test_name_tables() {
        let date = PersianDate::default();
        assert_eq!(date.months().len(), 12);
        assert_eq!(date.short_months().len(), 12);
        assert_eq!(date.weekdays().len(), 7);
        assert_eq!(date.short_weekdays().len(), 7);
        assert_eq!(date.seasons().len(), 4);

        assert_eq!(date.months()[0], "فروردین");
        assert_eq!(date.months()[11], "اسفند");
        assert_eq!(date.weekdays()[6], "شنبه");
        assert_eq!(date.seasons()[3], "زمستان");
    }

    #[test]
    fn test_name_tables_match_typed_units() {
        let date = PersianDate::default();
        for (i, name) in date.months().iter().enumerate() {
            let month = Month::new(u8::try_from(i + 1).unwrap()).unwrap();
            assert_eq!(month.name(), *name);
            assert_eq!(month.short_name(), date.short_months()[i]);
        }
        for (i, name) in date.weekdays().iter().enumerate() {
            let weekday = Weekday::new(u8::try_from(i).unwrap()).unwrap();
            assert_eq!(weekday.name(), *name);
            assert_eq!(weekday.short_name(), date.short_weekdays()[i]);
        }
    }

    #[test]
    fn test_digit_tables_are_bijective() {
        for (i, a) in PERSIAN_DIGITS.iter().enumerate() {
            for b in &PERSIAN_DIGITS[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(LATIN_DIGITS[i].to_digit(10), Some(u32::try_from(i).unwrap()));
            assert_eq!(u32::from(*a), 0x06F0 + u32::try_from(i).unwrap());
        }
    }

    #[test]
    fn test_serde_string_format() {
        let date = PersianDate::new("%d/%m/%Y");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""%d/%m/%Y""#);
        let parsed: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidWeekday(9).to_string(),
            "Invalid weekday: 9 (must be 0-6)"
        );
        assert_eq!(
            ParseError::InvalidSeason(4).to_string(),
            "Invalid season: 4 (must be 0-3)"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let date = std::sync::Arc::new(PersianDate::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let date = std::sync::Arc::clone(&date);
                std::thread::spawn(move || date.to_persian_digits(&i.to_string()))
            })
            .collect();
        let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(out, ["۰", "۱", "۲", "۳"]);
    }
}
