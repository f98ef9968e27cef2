//! Core calendar arithmetic: the leap-year rule, Gregorian ↔ Gaian
//! conversion, derived properties, and validation.
//!
//! Everything here works on plain integers plus [`chrono::NaiveDate`], which
//! supplies the ISO week-date view of the Gregorian calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::Error;
use crate::consts::{
    DAYS_PER_COMMON_YEAR, DAYS_PER_MONTH, DAYS_PER_WEEK, HORUS_DAYS, HORUS_MONTH, LEAP_WEEK,
    MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_COMMON_YEAR, MONTHS_PER_LEAP_YEAR, WEEKS_PER_MONTH,
    YEAR_OFFSET,
};

/// ISO weekdays indexed by number − 1 (Monday first).
const ISO_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns `true` if the Gaian year contains the Horus month, i.e. its ISO
/// week-year has 53 weeks.
pub fn is_leap_year(year: u16) -> bool {
    let iso_year = i32::from(year) - YEAR_OFFSET;
    // Dec 28 always lands in the last real ISO week of its year, never in
    // week 1 of the next.
    NaiveDate::from_ymd_opt(iso_year, 12, 28).is_some_and(|d| d.iso_week().week() == LEAP_WEEK)
}

/// Checks that `(year, month, day)` names a real Gaian date. All-or-nothing;
/// never clamps.
pub(crate) fn validate(year: u16, month: u8, day: u8) -> Result<(), Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange(i32::from(year)));
    }
    let leap = is_leap_year(year);
    let max_month = if leap { MONTHS_PER_LEAP_YEAR } else { MONTHS_PER_COMMON_YEAR };
    if !(1..=max_month).contains(&month) {
        if month == HORUS_MONTH && !leap {
            return Err(Error::HorusAbsent(year));
        }
        return Err(Error::MonthOutOfRange { month, max_month, year });
    }
    let max_day = if month == HORUS_MONTH { HORUS_DAYS } else { DAYS_PER_MONTH };
    if !(MIN_DAY..=max_day).contains(&day) {
        return Err(Error::DayOutOfRange { day, month, max_day });
    }
    Ok(())
}

/// Converts a Gregorian date to a `(gaian_year, month, day)` triple.
///
/// The year comes back as `i32`: Gregorian dates outside ISO years 1–9999
/// map to Gaian years outside the supported domain, and the caller is
/// responsible for range-checking (the `GaianDate` factories do).
pub(crate) fn gregorian_to_gaian(date: NaiveDate) -> (i32, u8, u8) {
    let iso = date.iso_week();
    let iso_weekday = date.weekday().number_from_monday();
    let month = (iso.week() - 1) / u32::from(WEEKS_PER_MONTH) + 1;
    let week_in_month = (iso.week() - 1) % u32::from(WEEKS_PER_MONTH);
    let day = week_in_month * u32::from(DAYS_PER_WEEK) + iso_weekday;
    (iso.year() + YEAR_OFFSET, month as u8, day as u8)
}

/// Converts a Gaian `(year, month, day)` triple to a Gregorian date.
///
/// Exact algebraic inverse of [`gregorian_to_gaian`].
///
/// # Errors
/// Returns `Error::IsoWeekOutOfRange` when the triple maps to an ISO week
/// the provider rejects — in particular week 53 of a 52-week year.
pub(crate) fn gaian_to_gregorian(year: u16, month: u8, day: u8) -> Result<NaiveDate, Error> {
    let iso_year = i32::from(year) - YEAR_OFFSET;
    let m = i32::from(month);
    let d = i32::from(day);
    let iso_week = (m - 1) * i32::from(WEEKS_PER_MONTH) + (d - 1).div_euclid(7) + 1;
    let weekday = ISO_WEEKDAYS[(d - 1).rem_euclid(7) as usize];
    // Week 0 is never valid, so a non-positive computed week falls through
    // to the same rejection path.
    let week = u32::try_from(iso_week).unwrap_or(0);
    NaiveDate::from_isoywd_opt(iso_year, week, weekday)
        .ok_or(Error::IsoWeekOutOfRange { iso_year, week: iso_week })
}

/// Day-of-year for a `(month, day)` pair: 1–364, or up to 371 for Horus.
pub(crate) fn day_of_year(month: u8, day: u8) -> u16 {
    if month <= MONTHS_PER_COMMON_YEAR {
        (u16::from(month) - 1) * u16::from(DAYS_PER_MONTH) + u16::from(day)
    } else {
        DAYS_PER_COMMON_YEAR + u16::from(day)
    }
}

/// ISO weekday (1 = Monday … 7 = Sunday) for a day-of-month. Perpetual:
/// day numbering restarts at 1 on a Monday in every month of every year.
pub(crate) fn day_of_week(day: u8) -> u8 {
    ((i32::from(day) - 1).rem_euclid(i32::from(DAYS_PER_WEEK)) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(12026));
        assert!(is_leap_year(12020));
        assert!(is_leap_year(12032));
        assert!(!is_leap_year(12025));
        assert!(!is_leap_year(12021));
    }

    #[test]
    fn test_first_day_of_12026() {
        // ISO 2026 W01 starts Dec 29, 2025 (the ISO year starts before the
        // calendar year).
        assert_eq!(gregorian_to_gaian(greg(2025, 12, 29)), (12026, 1, 1));
        assert_eq!(gregorian_to_gaian(greg(2026, 1, 5)), (12026, 1, 8));
    }

    #[test]
    fn test_last_day_of_capricorn() {
        // 2026-02-22 is ISO 2026 W08 Sun.
        assert_eq!(gregorian_to_gaian(greg(2026, 2, 22)), (12026, 2, 28));
    }

    #[test]
    fn test_horus_days() {
        // 2026-12-28 is ISO 2026 W53 Mon.
        assert_eq!(gregorian_to_gaian(greg(2026, 12, 28)), (12026, 14, 1));
        // 2026-12-31 is ISO 2026 W53 Thu.
        assert_eq!(gregorian_to_gaian(greg(2026, 12, 31)), (12026, 14, 4));
    }

    #[test]
    fn test_gaian_to_gregorian_known_dates() {
        assert_eq!(gaian_to_gregorian(12026, 1, 1).unwrap(), greg(2025, 12, 29));
        assert_eq!(gaian_to_gregorian(12026, 1, 7).unwrap(), greg(2026, 1, 4));
        assert_eq!(gaian_to_gregorian(12026, 3, 1).unwrap(), greg(2026, 2, 23));
        assert_eq!(gaian_to_gregorian(12026, 14, 1).unwrap(), greg(2026, 12, 28));
    }

    #[test]
    fn test_horus_rejected_in_52_week_year() {
        // ISO 2025 has 52 weeks, so week 53 does not exist.
        let result = gaian_to_gregorian(12025, 14, 1);
        assert!(matches!(result, Err(Error::IsoWeekOutOfRange { .. })));
    }

    #[test]
    fn test_roundtrip_all_days_of_common_year() {
        for doy in 1..=364u16 {
            let month = ((doy - 1) / 28 + 1) as u8;
            let day = ((doy - 1) % 28 + 1) as u8;
            let date = gaian_to_gregorian(12025, month, day).unwrap();
            assert_eq!(gregorian_to_gaian(date), (12025, month, day), "doy {doy}");
        }
    }

    #[test]
    fn test_roundtrip_horus_week() {
        for day in 1..=7u8 {
            let date = gaian_to_gregorian(12026, 14, day).unwrap();
            assert_eq!(gregorian_to_gaian(date), (12026, 14, day));
        }
    }

    #[test]
    fn test_roundtrip_from_gregorian_side() {
        let d = greg(2026, 6, 15);
        let (y, m, day) = gregorian_to_gaian(d);
        assert_eq!(gaian_to_gregorian(y as u16, m, day).unwrap(), d);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(1, 1), 1);
        assert_eq!(day_of_year(2, 1), 29);
        assert_eq!(day_of_year(3, 15), 71);
        assert_eq!(day_of_year(13, 28), 364);
        assert_eq!(day_of_year(14, 1), 365);
        assert_eq!(day_of_year(14, 7), 371);
    }

    #[test]
    fn test_day_of_year_strictly_increasing() {
        let mut previous = 0;
        for month in 1..=13u8 {
            for day in 1..=28u8 {
                let doy = day_of_year(month, day);
                assert_eq!(doy, previous + 1);
                previous = doy;
            }
        }
        assert_eq!(previous, 364);
        for day in 1..=7u8 {
            let doy = day_of_year(14, day);
            assert_eq!(doy, previous + 1);
            previous = doy;
        }
        assert_eq!(previous, 371);
    }

    #[test]
    fn test_day_of_week_perpetual_anchors() {
        assert_eq!(day_of_week(1), 1);
        assert_eq!(day_of_week(7), 7);
        assert_eq!(day_of_week(8), 1);
        assert_eq!(day_of_week(14), 7);
        assert_eq!(day_of_week(15), 1);
        assert_eq!(day_of_week(28), 7);
    }

    #[test]
    fn test_validate_accepts_valid_dates() {
        assert!(validate(12026, 3, 15).is_ok());
        assert!(validate(12026, 14, 7).is_ok());
        assert!(validate(10001, 1, 1).is_ok());
        assert!(validate(19999, 13, 28).is_ok());
    }

    #[test]
    fn test_validate_year_out_of_range() {
        assert!(matches!(validate(10000, 1, 1), Err(Error::YearOutOfRange(10000))));
        assert!(matches!(validate(20000, 1, 1), Err(Error::YearOutOfRange(20000))));
    }

    #[test]
    fn test_validate_horus_in_non_leap_year() {
        let result = validate(12025, 14, 1);
        assert!(matches!(result, Err(Error::HorusAbsent(12025))));
    }

    #[test]
    fn test_validate_month_out_of_range() {
        assert!(matches!(validate(12026, 0, 1), Err(Error::MonthOutOfRange { month: 0, .. })));
        assert!(matches!(validate(12026, 15, 1), Err(Error::MonthOutOfRange { month: 15, .. })));
    }

    #[test]
    fn test_validate_day_out_of_range() {
        assert!(matches!(validate(12026, 3, 0), Err(Error::DayOutOfRange { day: 0, .. })));
        assert!(matches!(validate(12026, 3, 29), Err(Error::DayOutOfRange { day: 29, .. })));
        // Horus caps at 7 days.
        assert!(matches!(validate(12026, 14, 8), Err(Error::DayOutOfRange { day: 8, max_day: 7, .. })));
    }
}
