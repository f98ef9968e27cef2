//! `GaianWeekday` — a perpetual weekday (1 = Monday … 7 = Sunday).

use std::fmt;
use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

use crate::tables::{self, WeekdayInfo};
use crate::Error;

/// First weekday number classified as a sabbath day.
const FIRST_SABBATH: u8 = 5;

/// A weekday of the Gaian calendar, guaranteed to be in the range 1–7.
///
/// Weekdays are perpetual: because every month starts on day 1 aligned to
/// Monday, the same weekday falls on the same day number in every month of
/// every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GaianWeekday(NonZeroU8);

impl GaianWeekday {
    pub const MONDAY: Self = Self::from_const(1);
    pub const TUESDAY: Self = Self::from_const(2);
    pub const WEDNESDAY: Self = Self::from_const(3);
    pub const THURSDAY: Self = Self::from_const(4);
    pub const FRIDAY: Self = Self::from_const(5);
    pub const SATURDAY: Self = Self::from_const(6);
    pub const SUNDAY: Self = Self::from_const(7);

    const fn from_const(number: u8) -> Self {
        match NonZeroU8::new(number) {
            Some(n) => Self(n),
            None => panic!("weekday constant must be non-zero"),
        }
    }

    /// Creates a weekday from its number.
    ///
    /// # Errors
    /// Returns `Error::WeekdayNotFound` outside 1–7.
    pub fn new(number: u8) -> Result<Self, Error> {
        tables::weekday(number)?;
        NonZeroU8::new(number).map(Self).ok_or(Error::WeekdayNotFound(number))
    }

    /// Weekday number, 1 (Monday) through 7 (Sunday).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0.get()
    }

    fn info(self) -> &'static WeekdayInfo {
        &tables::WEEKDAYS[(self.0.get() - 1) as usize]
    }

    /// Full English name, e.g. "Monday".
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Three-letter abbreviation, e.g. "Mon".
    pub fn abbrev(self) -> &'static str {
        self.info().abbrev
    }

    /// Single-glyph symbol, e.g. '☽'.
    pub fn symbol(self) -> char {
        self.info().symbol
    }

    /// Classical planet associated with the weekday, e.g. "Moon".
    pub fn planet(self) -> &'static str {
        self.info().planet
    }

    /// Friday, Saturday, and Sunday are sabbath days.
    pub const fn is_sabbath(self) -> bool {
        self.0.get() >= FIRST_SABBATH
    }
}

impl TryFrom<u8> for GaianWeekday {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GaianWeekday> for u8 {
    fn from(weekday: GaianWeekday) -> Self {
        weekday.number()
    }
}

impl fmt::Display for GaianWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
