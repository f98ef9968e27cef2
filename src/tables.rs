//! Static month and weekday metadata, plus the ordinal helpers used by the
//! formatter.

use crate::Error;
use crate::prelude::*;

/// Elemental association of a regular month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Element {
    #[display(fmt = "Fire")]
    Fire,
    #[display(fmt = "Earth")]
    Earth,
    #[display(fmt = "Air")]
    Air,
    #[display(fmt = "Water")]
    Water,
    #[display(fmt = "Healing")]
    Healing,
}

/// Metadata for one of the 14 Gaian months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    pub number: u8,
    pub name: &'static str,
    pub abbrev: &'static str,
    pub symbol: char,
    /// `None` for Horus, the intercalary month.
    pub element: Option<Element>,
    /// Inclusive range of ISO weeks the month covers.
    pub iso_weeks: (u8, u8),
}

/// Metadata for one of the 7 weekdays (1 = Monday … 7 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayInfo {
    pub number: u8,
    pub name: &'static str,
    pub abbrev: &'static str,
    pub symbol: char,
    pub planet: &'static str,
}

/// Month table indexed by number − 1.
pub(crate) const MONTHS: [MonthInfo; 14] = [
    MonthInfo { number: 1, name: "Sagittarius", abbrev: "Sag", symbol: '♐', element: Some(Element::Fire), iso_weeks: (1, 4) },
    MonthInfo { number: 2, name: "Capricorn", abbrev: "Cap", symbol: '♑', element: Some(Element::Earth), iso_weeks: (5, 8) },
    MonthInfo { number: 3, name: "Aquarius", abbrev: "Aqu", symbol: '♒', element: Some(Element::Air), iso_weeks: (9, 12) },
    MonthInfo { number: 4, name: "Pisces", abbrev: "Pis", symbol: '♓', element: Some(Element::Water), iso_weeks: (13, 16) },
    MonthInfo { number: 5, name: "Aries", abbrev: "Ari", symbol: '♈', element: Some(Element::Fire), iso_weeks: (17, 20) },
    MonthInfo { number: 6, name: "Taurus", abbrev: "Tau", symbol: '♉', element: Some(Element::Earth), iso_weeks: (21, 24) },
    MonthInfo { number: 7, name: "Gemini", abbrev: "Gem", symbol: '♊', element: Some(Element::Air), iso_weeks: (25, 28) },
    MonthInfo { number: 8, name: "Cancer", abbrev: "Can", symbol: '♋', element: Some(Element::Water), iso_weeks: (29, 32) },
    MonthInfo { number: 9, name: "Leo", abbrev: "Leo", symbol: '♌', element: Some(Element::Fire), iso_weeks: (33, 36) },
    MonthInfo { number: 10, name: "Virgo", abbrev: "Vir", symbol: '♍', element: Some(Element::Earth), iso_weeks: (37, 40) },
    MonthInfo { number: 11, name: "Libra", abbrev: "Lib", symbol: '♎', element: Some(Element::Air), iso_weeks: (41, 44) },
    MonthInfo { number: 12, name: "Scorpius", abbrev: "Sco", symbol: '♏', element: Some(Element::Water), iso_weeks: (45, 48) },
    MonthInfo { number: 13, name: "Ophiuchus", abbrev: "Oph", symbol: '⛎', element: Some(Element::Healing), iso_weeks: (49, 52) },
    MonthInfo { number: 14, name: "Horus", abbrev: "Hor", symbol: '𓅃', element: None, iso_weeks: (53, 53) },
];

/// Weekday table indexed by number − 1.
pub(crate) const WEEKDAYS: [WeekdayInfo; 7] = [
    WeekdayInfo { number: 1, name: "Monday", abbrev: "Mon", symbol: '☽', planet: "Moon" },
    WeekdayInfo { number: 2, name: "Tuesday", abbrev: "Tue", symbol: '♂', planet: "Mars" },
    WeekdayInfo { number: 3, name: "Wednesday", abbrev: "Wed", symbol: '☿', planet: "Mercury" },
    WeekdayInfo { number: 4, name: "Thursday", abbrev: "Thu", symbol: '♃', planet: "Jupiter" },
    WeekdayInfo { number: 5, name: "Friday", abbrev: "Fri", symbol: '♀', planet: "Venus" },
    WeekdayInfo { number: 6, name: "Saturday", abbrev: "Sat", symbol: '♄', planet: "Saturn" },
    WeekdayInfo { number: 7, name: "Sunday", abbrev: "Sun", symbol: '☉', planet: "Sun" },
];

/// Looks up a month record by number (1–14).
///
/// # Errors
/// Returns `Error::MonthNotFound` outside 1–14.
pub(crate) fn month(number: u8) -> Result<&'static MonthInfo, Error> {
    number
        .checked_sub(1)
        .and_then(|i| MONTHS.get(usize::from(i)))
        .ok_or(Error::MonthNotFound(number))
}

/// Looks up a month record by full name or abbreviation, case-insensitively.
/// Trailing periods are stripped first, so "Aqu." matches "Aqu".
///
/// # Errors
/// Returns `Error::MonthNameNotFound` if nothing matches.
pub(crate) fn month_by_name(name: &str) -> Result<&'static MonthInfo, Error> {
    let key = name.trim_end_matches('.');
    MONTHS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(key) || m.abbrev.eq_ignore_ascii_case(key))
        .ok_or_else(|| Error::MonthNameNotFound(name.to_owned()))
}

/// Looks up a weekday record by number (1–7).
///
/// # Errors
/// Returns `Error::WeekdayNotFound` outside 1–7.
pub(crate) fn weekday(number: u8) -> Result<&'static WeekdayInfo, Error> {
    number
        .checked_sub(1)
        .and_then(|i| WEEKDAYS.get(usize::from(i)))
        .ok_or(Error::WeekdayNotFound(number))
}

/// Renders an ordinal numeral: 1 → "1st", 2 → "2nd", 15 → "15th".
/// Numbers whose last two digits are 11–13 always take "th".
pub(crate) fn ordinal(n: u16) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// English ordinal words for days 1–28.
const NUMBER_WORDS: [&str; 28] = [
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
    "Twentieth",
    "Twenty-first",
    "Twenty-second",
    "Twenty-third",
    "Twenty-fourth",
    "Twenty-fifth",
    "Twenty-sixth",
    "Twenty-seventh",
    "Twenty-eighth",
];

/// Word form of a day number: 1 → "First", 15 → "Fifteenth".
///
/// # Errors
/// Returns `Error::WordOutOfRange` outside 1–28.
pub(crate) fn number_word(n: u8) -> Result<&'static str, Error> {
    n.checked_sub(1)
        .and_then(|i| NUMBER_WORDS.get(usize::from(i)))
        .copied()
        .ok_or(Error::WordOutOfRange(n))
}
