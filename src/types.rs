use crate::consts::{
    LEAP_CYCLE_YEARS, LEAP_REMAINDERS, MAX_MONTH, MAX_SEASON, MAX_WEEKDAY, MIN_MONTH,
    MONTHS_PER_SEASON, MONTH_NAMES, SEASON_NAMES, SHORT_MONTH_NAMES, SHORT_WEEKDAY_NAMES,
    WEEKDAY_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Jalali month guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full Persian name, e.g. "فروردین" for month 1
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Abbreviated Persian name
    pub const fn short_name(self) -> &'static str {
        SHORT_MONTH_NAMES[self.index()]
    }

    /// The season this month belongs to
    pub const fn season(self) -> Season {
        Season((self.get() - MIN_MONTH) / MONTHS_PER_SEASON)
    }

    #[inline]
    const fn index(self) -> usize {
        (self.get() - MIN_MONTH) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of the week in the range `0..=MAX_WEEKDAY`, counted from Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// Creates a new Weekday, validating that it's <= `MAX_WEEKDAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the value is > `MAX_WEEKDAY`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_WEEKDAY {
            return Err(ParseError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Full Persian name, e.g. "یکشنبه" for Sunday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.0 as usize]
    }

    /// Single-letter Persian name
    pub const fn short_name(self) -> &'static str {
        SHORT_WEEKDAY_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A season in the range `0..=MAX_SEASON`, starting from spring (Nowruz)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Season(u8);

impl Season {
    /// Creates a new Season, validating that it's <= `MAX_SEASON`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSeason` if the value is > `MAX_SEASON`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_SEASON {
            return Err(ParseError::InvalidSeason(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        SEASON_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Season {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// 33-year cycle approximation of the Jalali leap rule.
/// Negative years are normalized with `rem_euclid`, so the cycle holds across zero.
pub const fn is_leap_year(year: i64) -> bool {
    let years_in_cycle = year.rem_euclid(LEAP_CYCLE_YEARS);
    let mut i = 0;
    while i < LEAP_REMAINDERS.len() {
        if LEAP_REMAINDERS[i] == years_in_cycle {
            return true;
        }
        i += 1;
    }
    false
}
