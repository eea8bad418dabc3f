/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Shahrivar, the last 31-day month
pub const SHAHRIVAR: u8 = 6;
/// Month number for Esfand, the last Persian month
pub const ESFAND: u8 = 12;

/// Days in Esfand in common years
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand in leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Years in the repeating Persian leap cycle
pub const PERSIAN_CYCLE_YEARS: i64 = 33;

/// Remainders of `year mod 33` that mark Persian leap years.
/// The cycle is exact only for years 1206-1498; outside that window it is a
/// heuristic approximation of the equinox-based rule.
pub const LEAP_REMAINDERS: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Days before each year of a 33-year Persian cycle (years 1-33 of the
/// cycle), with the irregular leap year at `year % 33 == 22`.
pub const CUM_DAYS_33Y: [i64; 33] = [
    0, 366, 731, 1096, 1461, 1827, 2192, 2557, 2922, 3288, 3653, 4018, 4383,
    4749, 5114, 5479, 5844, 6210, 6575, 6940, 7305, 7670, 8036, 8401, 8766,
    9131, 9497, 9862, 10227, 10592, 10958, 11323, 11688,
];

/// Days in 33 consecutive Persian years
pub const DAYS_IN_33Y: i64 = 12_053;

/// Days before the 30-day months begin (six 31-day months)
pub const HALF_YEAR_DAYS: i64 = 186;

/// Days before each month in a common Gregorian year
pub const CUM_DAYS_COMMON_GY: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days before each month in a leap Gregorian year
pub const CUM_DAYS_LEAP_GY: [i64; 12] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Days in 4 consecutive Gregorian years, the last one leap
pub const DAYS_IN_4GY: i64 = 4 * 365 + 1;
/// Days in 100 consecutive Gregorian years, the last one not leap
pub const DAYS_IN_100GY: i64 = 25 * DAYS_IN_4GY - 1;
/// Days in 400 consecutive Gregorian years
pub const DAYS_IN_400GY: i64 = 4 * DAYS_IN_100GY + 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are
/// 1-indexed). February shows 28 days; leap years are adjusted by
/// `gregorian::is_leap_year`.
pub const DAYS_IN_GREGORIAN_MONTH: [u8; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap years recur every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Offset from a Persian day-id to the Gregorian day-id of the same day.
/// Derived once from the day-ids of a known concurrent date in both
/// calendars; with the 33-year cycle this places Persian 0001-01-01 on
/// proleptic Gregorian 0622-03-21.
pub const GREGORIAN_ID_OFFSET: i64 = 226_894;

/// Julian Day number at noon of Persian 0001-01-01.
pub const JULIAN_DAY_OFFSET: i64 = 1_948_320;

/// 3-letter short forms of the Persian weekday names, starting from shanbe
pub const WEEKDAY_ABBR: [&str; 7] = ["shn", "1sh", "2sh", "3sh", "4sh", "5sh", "jom"];

/// 3-letter short forms of the Persian month names
pub const MONTH_ABBR: [&str; 12] = [
    "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
];

/// Iran standard time, UTC+3:30, in seconds east of UTC
pub const IRST_UTC_OFFSET: i32 = 12_600;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Gregorian day-id of 1970-01-01
pub(crate) const UNIX_EPOCH_GREGORIAN_DAY_ID: i64 = 719_162;
