//! A perpetual 13/14-month solar calendar built on ISO week-date arithmetic.
//!
//! Gaian year = ISO week-year + 10,000. Thirteen months of 28 days each;
//! month 14 (Horus) has 7 days and exists only in years whose ISO week-year
//! has 53 weeks. Day numbering restarts at 1 on a Monday in every month, so
//! weekdays are perpetual.

mod consts;
mod convert;
mod format;
mod month;
mod prelude;
mod tables;
mod weekday;

pub use consts::*;
pub use convert::is_leap_year;
pub use month::GaianMonth;
pub use tables::Element;
pub use weekday::GaianWeekday;

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, TimeDelta};

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Year outside the supported domain.
    #[error("year {0} out of supported range ({min}–{max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    /// Month 14 requested in a year without an ISO week 53.
    #[error("month 14 (Horus) only exists in leap years; {0} is not a leap year")]
    HorusAbsent(u16),

    /// Month outside 1..=13 (or 1..=14 in a leap year).
    #[error("month {month} out of range (1–{max_month}) for year {year}")]
    MonthOutOfRange { month: u8, max_month: u8, year: u16 },

    /// Day outside the month's length.
    #[error("day {day} out of range for month {month} (max {max_day})")]
    DayOutOfRange { day: u8, month: u8, max_day: u8 },

    /// Day-of-year outside 1..=364 (or 1..=371 in a leap year).
    #[error("day of year {doy} out of range (1–{max_doy}) for year {year}")]
    DayOfYearOutOfRange { doy: u16, max_doy: u16, year: u16 },

    /// No month with this number.
    #[error("invalid month number: {0}")]
    MonthNotFound(u8),

    /// No month with this name or abbreviation.
    #[error("unknown month name: {0:?}")]
    MonthNameNotFound(String),

    /// No weekday with this number.
    #[error("invalid weekday number: {0}")]
    WeekdayNotFound(u8),

    /// No ordinal word for this number.
    #[error("no ordinal word for {0} (supported range 1–28)")]
    WordOutOfRange(u8),

    /// The Gregorian provider rejected an ISO (year, week, weekday) triple.
    #[error("ISO week {week} does not exist in ISO year {iso_year}")]
    IsoWeekOutOfRange { iso_year: i32, week: i32 },

    /// A day offset moved the date outside the representable range.
    #[error("offset of {days} days leaves the supported date range")]
    OffsetOutOfRange { days: i64 },

    /// No recognized textual date shape.
    #[error("cannot parse {0:?} as a Gaian date")]
    Parse(String),
}

/// Weekday values indexed by number − 1.
const WEEKDAYS_BY_NUMBER: [GaianWeekday; 7] = [
    GaianWeekday::MONDAY,
    GaianWeekday::TUESDAY,
    GaianWeekday::WEDNESDAY,
    GaianWeekday::THURSDAY,
    GaianWeekday::FRIDAY,
    GaianWeekday::SATURDAY,
    GaianWeekday::SUNDAY,
];

/// An immutable Gaian calendar date.
///
/// Constructed only through validated factories; a value that exists is
/// valid for its entire lifetime. Ordering is lexicographic on
/// `(year, month, day)`, which coincides with chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GaianDate {
    year: u16,
    month: GaianMonth,
    day: u8,
}

impl GaianDate {
    /// Creates a date from a `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns the matching validation error for any out-of-domain
    /// component, including the dedicated `HorusAbsent` reason for month 14
    /// in a non-leap year. Never clamps.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, Error> {
        convert::validate(year, month, day)?;
        let month = GaianMonth::new(month)?;
        Ok(Self { year, month, day })
    }

    /// Current Gaian date in local time.
    ///
    /// # Errors
    /// Fails only if the wall clock is outside ISO years 1–9999.
    pub fn today() -> Result<Self, Error> {
        Self::from_gregorian(Local::now().date_naive())
    }

    /// Converts a Gregorian date.
    ///
    /// # Errors
    /// Returns `Error::YearOutOfRange` for dates whose ISO week-year maps
    /// outside the supported Gaian domain.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, Error> {
        let (year, month, day) = convert::gregorian_to_gaian(date);
        let year = u16::try_from(year).map_err(|_| Error::YearOutOfRange(year))?;
        Self::new(year, month, day)
    }

    /// Constructs from a year and a day-of-year (1–364, or 1–371 in leap
    /// years).
    ///
    /// # Errors
    /// Returns `Error::DayOfYearOutOfRange` outside the year's day count.
    pub fn from_day_of_year(year: u16, doy: u16) -> Result<Self, Error> {
        let max_doy = if convert::is_leap_year(year) {
            DAYS_PER_LEAP_YEAR
        } else {
            DAYS_PER_COMMON_YEAR
        };
        if !(1..=max_doy).contains(&doy) {
            return Err(Error::DayOfYearOutOfRange { doy, max_doy, year });
        }
        let (month, day) = if doy <= DAYS_PER_COMMON_YEAR {
            let month = ((doy - 1) / u16::from(DAYS_PER_MONTH) + 1) as u8;
            let day = ((doy - 1) % u16::from(DAYS_PER_MONTH) + 1) as u8;
            (month, day)
        } else {
            (HORUS_MONTH, (doy - DAYS_PER_COMMON_YEAR) as u8)
        };
        Self::new(year, month, day)
    }

    /// Parses a Gaian date string. Supported shapes, tried in order:
    ///
    /// - `"12026-03-15"` (year-month-day)
    /// - `"3/15/12026"` (month/day/year)
    /// - `"Aquarius 15, 12026"` / `"Aqu 15 12026"` (name or abbreviation)
    ///
    /// A trailing case-insensitive `" GE"` suffix and trailing
    /// commas/whitespace are ignored.
    ///
    /// # Errors
    /// Returns `Error::Parse` when no shape matches; a shape that matches
    /// with out-of-domain values reports the underlying validation or
    /// lookup error instead.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let text = Self::strip_decorations(input);
        if let Some((year, month, day)) = Self::parse_iso_numeric(text) {
            return Self::from_numeric_parts(year, month, day);
        }
        if let Some((month, day, year)) = Self::parse_slash_numeric(text) {
            return Self::from_numeric_parts(year, month, day);
        }
        if let Some((name, day, year)) = Self::parse_named(text) {
            let month = GaianMonth::from_name(name)?;
            return Self::from_numeric_parts(year, month.number(), day);
        }
        Err(Error::Parse(text.to_owned()))
    }

    /// Gaian year, 10001–19999.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month record.
    #[inline]
    pub const fn month(&self) -> GaianMonth {
        self.month
    }

    /// Month number, 1–14.
    #[inline]
    pub const fn month_number(&self) -> u8 {
        self.month.number()
    }

    /// Day of month: 1–28, or 1–7 in Horus.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Weekday record. Perpetual: depends only on the day number.
    pub fn weekday(&self) -> GaianWeekday {
        WEEKDAYS_BY_NUMBER[usize::from(convert::day_of_week(self.day)) - 1]
    }

    /// ISO weekday number, 1 (Monday) through 7 (Sunday).
    pub fn day_of_week(&self) -> u8 {
        convert::day_of_week(self.day)
    }

    /// Day of year: 1–364, or up to 371 in leap years.
    pub fn day_of_year(&self) -> u16 {
        convert::day_of_year(self.month.number(), self.day)
    }

    /// `true` if this date's year has a Horus month.
    pub fn is_leap_year(&self) -> bool {
        convert::is_leap_year(self.year)
    }

    /// Full month name, e.g. "Aquarius".
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Month abbreviation, e.g. "Aqu".
    pub fn month_abbrev(&self) -> &'static str {
        self.month.abbrev()
    }

    /// Month symbol, e.g. '♒'.
    pub fn month_symbol(&self) -> char {
        self.month.symbol()
    }

    /// Full weekday name, e.g. "Monday".
    pub fn weekday_name(&self) -> &'static str {
        self.weekday().name()
    }

    /// Weekday abbreviation, e.g. "Mon".
    pub fn weekday_abbrev(&self) -> &'static str {
        self.weekday().abbrev()
    }

    /// Weekday symbol, e.g. '☽'.
    pub fn weekday_symbol(&self) -> char {
        self.weekday().symbol()
    }

    /// Converts to the corresponding Gregorian date.
    pub fn to_gregorian(&self) -> NaiveDate {
        match convert::gaian_to_gregorian(self.year, self.month.number(), self.day) {
            Ok(date) => date,
            // Validation pins month 14 to leap years, so the ISO week
            // always exists.
            Err(_) => unreachable!("validated date maps to a real ISO week"),
        }
    }

    /// Formats the date with a token pattern (`yyyy`, `yy`, `MMMM`, `MMM*`,
    /// `MMM`, `MM`, `M`, `dddd`, `ddd`, `dd`, `d`, `WWWW`, `WWW`, `W`,
    /// `DDD`, `GE`). Tokens are matched longest-first; any other character
    /// passes through literally.
    ///
    /// # Errors
    /// Propagates formatter failures; unreachable for the built-in tokens
    /// on a validated date.
    pub fn format(&self, pattern: &str) -> Result<String, Error> {
        format::format_date(self.year, self.month.number(), self.day, pattern)
    }

    /// Returns the date `days` calendar days later. A day always means one
    /// Gregorian calendar day; the walk crosses month, Horus, and year
    /// boundaries accordingly.
    ///
    /// # Errors
    /// Returns `Error::OffsetOutOfRange` or `Error::YearOutOfRange` when
    /// the result leaves the supported domain.
    pub fn add_days(&self, days: i64) -> Result<Self, Error> {
        let delta = TimeDelta::try_days(days).ok_or(Error::OffsetOutOfRange { days })?;
        let shifted = self
            .to_gregorian()
            .checked_add_signed(delta)
            .ok_or(Error::OffsetOutOfRange { days })?;
        Self::from_gregorian(shifted)
    }

    /// Returns the date `days` calendar days earlier.
    ///
    /// # Errors
    /// Same conditions as [`Self::add_days`].
    pub fn sub_days(&self, days: i64) -> Result<Self, Error> {
        let negated = days.checked_neg().ok_or(Error::OffsetOutOfRange { days })?;
        self.add_days(negated)
    }

    /// Signed number of calendar days from `other` to `self`.
    pub fn days_since(&self, other: &Self) -> i64 {
        self.to_gregorian().signed_duration_since(other.to_gregorian()).num_days()
    }
}

// --- parsing helpers ---

impl GaianDate {
    /// Drops surrounding whitespace, one trailing case-insensitive " GE"
    /// suffix, and trailing commas/whitespace.
    fn strip_decorations(input: &str) -> &str {
        let mut text = input.trim();
        let n = text.len();
        if n >= 3 && text.is_char_boundary(n - 2) && text[n - 2..].eq_ignore_ascii_case(ERA_SUFFIX)
        {
            let head = &text[..n - 2];
            if head.ends_with(char::is_whitespace) {
                text = head.trim_end();
            }
        }
        text.trim_end_matches(|c: char| c == ',' || c.is_whitespace())
    }

    fn digit_prefix_len(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    /// A run of ASCII digits of a length within `min_len..=max_len`.
    fn parse_digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
        if !(min_len..=max_len).contains(&s.len()) || Self::digit_prefix_len(s) != s.len() {
            return None;
        }
        s.parse().ok()
    }

    /// Shape (a): `\d{5}-\d{1,2}-\d{1,2}` → (year, month, day).
    fn parse_iso_numeric(text: &str) -> Option<(u32, u8, u8)> {
        let mut parts = text.split(DATE_SEPARATOR);
        let year = parts.next()?;
        let month = parts.next()?;
        let day = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some((
            Self::parse_digits(year, 5, 5)?,
            Self::parse_digits(month, 1, 2)? as u8,
            Self::parse_digits(day, 1, 2)? as u8,
        ))
    }

    /// Shape (b): `\d{1,2}/\d{1,2}/\d{5}` → (month, day, year).
    fn parse_slash_numeric(text: &str) -> Option<(u8, u8, u32)> {
        let mut parts = text.split(MONTH_FIRST_SEPARATOR);
        let month = parts.next()?;
        let day = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some((
            Self::parse_digits(month, 1, 2)? as u8,
            Self::parse_digits(day, 1, 2)? as u8,
            Self::parse_digits(year, 5, 5)?,
        ))
    }

    /// Shape (c): `<letters> <1-2 digits>,? <5 digits>` → (name, day, year).
    /// The day and year digits may run together ("Aquarius 1512026"),
    /// mirroring the reference pattern's optional separator.
    fn parse_named(text: &str) -> Option<(&str, u8, u32)> {
        let (name, rest) = text.split_once(char::is_whitespace)?;
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let rest = rest.trim_start();
        let run = Self::digit_prefix_len(rest);
        let (day_str, year_str, tail) = if run >= 6 {
            if run > 7 {
                return None;
            }
            let (day_str, tail) = rest.split_at(run - 5);
            let (year_str, tail) = tail.split_at(5);
            (day_str, year_str, tail)
        } else {
            if !(1..=2).contains(&run) {
                return None;
            }
            let (day_str, tail) = rest.split_at(run);
            let tail = tail.strip_prefix(',').unwrap_or(tail).trim_start();
            if Self::digit_prefix_len(tail) != 5 {
                return None;
            }
            let (year_str, tail) = tail.split_at(5);
            (day_str, year_str, tail)
        };
        if !tail.is_empty() {
            return None;
        }
        Some((name, day_str.parse().ok()?, year_str.parse().ok()?))
    }

    fn from_numeric_parts(year: u32, month: u8, day: u8) -> Result<Self, Error> {
        let year = u16::try_from(year).map_err(|_| Error::YearOutOfRange(year as i32))?;
        Self::new(year, month, day)
    }
}

impl FromStr for GaianDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GaianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The default pattern has no fallible token.
        let rendered = self.format(DEFAULT_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl serde::Serialize for GaianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GaianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
