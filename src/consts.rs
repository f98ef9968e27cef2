/// Minimum valid Gaian year (inclusive)
pub const MIN_YEAR: u16 = 10_001;

/// Maximum valid Gaian year (inclusive)
pub const MAX_YEAR: u16 = 19_999;

/// Gaian year = ISO week-year + this offset
pub const YEAR_OFFSET: i32 = 10_000;

/// Number of months in a common (non-leap) year
pub const MONTHS_PER_COMMON_YEAR: u8 = 13;

/// Number of months in a leap year (includes Horus)
pub const MONTHS_PER_LEAP_YEAR: u8 = 14;

/// Month number of Horus, the intercalary month
pub const HORUS_MONTH: u8 = 14;

/// Days in each regular month (months 1–13)
pub const DAYS_PER_MONTH: u8 = 28;

/// Days in Horus (one ISO week)
pub const HORUS_DAYS: u8 = 7;

/// First day of any month
pub const MIN_DAY: u8 = 1;

/// ISO weeks covered by each regular month
pub const WEEKS_PER_MONTH: u8 = 4;

/// Days in a week; day-of-week repeats with this period
pub const DAYS_PER_WEEK: u8 = 7;

/// Day count of a common year (13 × 28)
pub const DAYS_PER_COMMON_YEAR: u16 = 364;

/// Day count of a leap year (364 + 7 Horus days)
pub const DAYS_PER_LEAP_YEAR: u16 = 371;

/// ISO week number that exists only in 53-week (leap) years
pub const LEAP_WEEK: u32 = 53;

/// Era suffix rendered by the `GE` format token ("Gaian Era")
pub const ERA_SUFFIX: &str = "GE";

/// Pattern used by `Display` and the default string form
pub const DEFAULT_FORMAT: &str = "MMMM d, yyyy GE";

/// Date component separator (ISO-like numeric format)
pub const DATE_SEPARATOR: char = '-';

/// Month-first numeric format separator
pub const MONTH_FIRST_SEPARATOR: char = '/';
