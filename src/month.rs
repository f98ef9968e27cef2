//! `GaianMonth` — one of the 13 regular months or the intercalary Horus.

use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_MONTH, HORUS_DAYS, HORUS_MONTH};
use crate::tables::{self, Element, MonthInfo};
use crate::Error;

/// A month of the Gaian calendar, guaranteed to be in the range 1–14.
///
/// Months 1–13 are the regular 28-day months; month 14 (Horus) is the
/// 7-day intercalary month that exists only in leap years. Whether Horus is
/// present in a particular year is a property of the date, not of the month
/// value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GaianMonth(NonZeroU8);

impl GaianMonth {
    pub const SAGITTARIUS: Self = Self::from_const(1);
    pub const CAPRICORN: Self = Self::from_const(2);
    pub const AQUARIUS: Self = Self::from_const(3);
    pub const PISCES: Self = Self::from_const(4);
    pub const ARIES: Self = Self::from_const(5);
    pub const TAURUS: Self = Self::from_const(6);
    pub const GEMINI: Self = Self::from_const(7);
    pub const CANCER: Self = Self::from_const(8);
    pub const LEO: Self = Self::from_const(9);
    pub const VIRGO: Self = Self::from_const(10);
    pub const LIBRA: Self = Self::from_const(11);
    pub const SCORPIUS: Self = Self::from_const(12);
    pub const OPHIUCHUS: Self = Self::from_const(13);
    pub const HORUS: Self = Self::from_const(14);

    const fn from_const(number: u8) -> Self {
        match NonZeroU8::new(number) {
            Some(n) => Self(n),
            None => panic!("month constant must be non-zero"),
        }
    }

    /// Creates a month from its number.
    ///
    /// # Errors
    /// Returns `Error::MonthNotFound` outside 1–14.
    pub fn new(number: u8) -> Result<Self, Error> {
        tables::month(number)?;
        NonZeroU8::new(number).map(Self).ok_or(Error::MonthNotFound(number))
    }

    /// Parses a month from its full name or abbreviation, case-insensitively.
    /// Trailing periods are ignored, so "Aqu." works.
    ///
    /// # Errors
    /// Returns `Error::MonthNameNotFound` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let info = tables::month_by_name(name)?;
        Self::new(info.number)
    }

    /// Month number, 1–14.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0.get()
    }

    fn info(self) -> &'static MonthInfo {
        &tables::MONTHS[(self.0.get() - 1) as usize]
    }

    /// Full English name, e.g. "Aquarius".
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Three-letter abbreviation, e.g. "Aqu".
    pub fn abbrev(self) -> &'static str {
        self.info().abbrev
    }

    /// Single-glyph symbol, e.g. '♒'.
    pub fn symbol(self) -> char {
        self.info().symbol
    }

    /// Elemental association; `None` for Horus.
    pub fn element(self) -> Option<Element> {
        self.info().element
    }

    /// Inclusive range of ISO weeks this month covers.
    pub fn iso_weeks(self) -> (u8, u8) {
        self.info().iso_weeks
    }

    /// `true` only for Horus (month 14).
    pub const fn is_intercalary(self) -> bool {
        self.0.get() == HORUS_MONTH
    }

    /// Number of days in this month: 28, or 7 for Horus.
    pub const fn days(self) -> u8 {
        if self.is_intercalary() { HORUS_DAYS } else { DAYS_PER_MONTH }
    }
}

impl TryFrom<u8> for GaianMonth {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GaianMonth> for u8 {
    fn from(month: GaianMonth) -> Self {
        month.number()
    }
}

impl FromStr for GaianMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for GaianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        for n in 1..=14 {
            assert!(GaianMonth::new(n).is_ok(), "month {n} should be valid");
        }
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(GaianMonth::new(0), Err(Error::MonthNotFound(0))));
        assert!(matches!(GaianMonth::new(15), Err(Error::MonthNotFound(15))));
    }

    #[test]
    fn test_metadata() {
        let aquarius = GaianMonth::new(3).unwrap();
        assert_eq!(aquarius.number(), 3);
        assert_eq!(aquarius.name(), "Aquarius");
        assert_eq!(aquarius.abbrev(), "Aqu");
        assert_eq!(aquarius.symbol(), '♒');
        assert_eq!(aquarius.element(), Some(Element::Air));
        assert_eq!(aquarius.iso_weeks(), (9, 12));
    }

    #[test]
    fn test_horus() {
        let horus = GaianMonth::HORUS;
        assert_eq!(horus.name(), "Horus");
        assert_eq!(horus.element(), None);
        assert!(horus.is_intercalary());
        assert_eq!(horus.days(), 7);
        assert_eq!(horus.iso_weeks(), (53, 53));
    }

    #[test]
    fn test_regular_month_not_intercalary() {
        assert!(!GaianMonth::SAGITTARIUS.is_intercalary());
        assert_eq!(GaianMonth::SAGITTARIUS.days(), 28);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(GaianMonth::from_name("Aquarius").unwrap(), GaianMonth::AQUARIUS);
        assert_eq!(GaianMonth::from_name("Aqu").unwrap(), GaianMonth::AQUARIUS);
        assert_eq!(GaianMonth::from_name("aquarius").unwrap(), GaianMonth::AQUARIUS);
        assert_eq!(GaianMonth::from_name("Oph.").unwrap(), GaianMonth::OPHIUCHUS);
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(matches!(GaianMonth::from_name("Martius"), Err(Error::MonthNameNotFound(_))));
    }

    #[test]
    fn test_from_str() {
        let month: GaianMonth = "Gemini".parse().unwrap();
        assert_eq!(month, GaianMonth::GEMINI);
        assert!("Undecimber".parse::<GaianMonth>().is_err());
    }

    #[test]
    fn test_constants_match_numbers() {
        assert_eq!(GaianMonth::SAGITTARIUS, GaianMonth::new(1).unwrap());
        assert_eq!(GaianMonth::AQUARIUS, GaianMonth::new(3).unwrap());
        assert_eq!(GaianMonth::HORUS, GaianMonth::new(14).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(GaianMonth::AQUARIUS.to_string(), "Aquarius");
        assert_eq!(GaianMonth::HORUS.to_string(), "Horus");
    }

    #[test]
    fn test_ordering() {
        assert!(GaianMonth::SAGITTARIUS < GaianMonth::CAPRICORN);
        assert!(GaianMonth::HORUS > GaianMonth::OPHIUCHUS);
    }

    #[test]
    fn test_try_from_and_into() {
        let month: GaianMonth = 8u8.try_into().unwrap();
        assert_eq!(month, GaianMonth::CANCER);
        let number: u8 = month.into();
        assert_eq!(number, 8);
        assert!(GaianMonth::try_from(0u8).is_err());
    }

    #[test]
    fn test_serde_number_form() {
        let month = GaianMonth::AQUARIUS;
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "3");
        let parsed: GaianMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
        assert!(serde_json::from_str::<GaianMonth>("15").is_err());
    }
}
