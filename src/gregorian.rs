//! Proleptic Gregorian day-id codec.
//!
//! Day 0 is Gregorian 0001-01-01 and the count extends without bound in both
//! directions; there is no 1582 cutover. `from_day_id` inverts `day_id`
//! exactly over the whole `i64` domain.

use crate::consts::{
    CENTURY_CYCLE, CUM_DAYS_COMMON_GY, CUM_DAYS_LEAP_GY, DAYS_IN_100GY, DAYS_IN_400GY,
    DAYS_IN_4GY, DAYS_IN_GREGORIAN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE,
};

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Number of days in a Gregorian month.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_GREGORIAN_MONTH[month as usize]
    }
}

/// Day-id of a Gregorian date. Components must already be valid for the
/// calendar; this function does not check them.
pub fn day_id(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    let whole_years = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    let table = if is_leap_year(year) {
        &CUM_DAYS_LEAP_GY
    } else {
        &CUM_DAYS_COMMON_GY
    };
    whole_years + table[usize::from(month) - 1] + i64::from(day) - 1
}

/// Gregorian `(year, month, day)` for a day-id.
///
/// Decomposes against the 400-year cycle, then the 100-, 4- and 1-year
/// sub-cycles. The 100-year and 1-year quotients can reach 4 exactly on the
/// closing leap day of their parent cycle; those quotients are rolled back
/// one unit with the unit's day count restored to the remainder.
pub fn from_day_id(day_id: i64) -> (i32, u8, u8) {
    let n400 = day_id.div_euclid(DAYS_IN_400GY);
    let rem = day_id.rem_euclid(DAYS_IN_400GY);

    let mut n100 = rem / DAYS_IN_100GY;
    let mut rem = rem % DAYS_IN_100GY;
    if n100 == 4 {
        n100 = 3;
        rem += DAYS_IN_100GY;
    }

    let n4 = rem / DAYS_IN_4GY;
    let rem = rem % DAYS_IN_4GY;

    let mut n1 = rem / 365;
    let mut rem = rem % 365;
    if n1 == 4 {
        n1 = 3;
        rem += 365;
    }

    let leap = n1 == 3 && (n4 != 24 || n100 == 3);
    let table = if leap {
        &CUM_DAYS_LEAP_GY
    } else {
        &CUM_DAYS_COMMON_GY
    };

    let year = n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1;
    let month = table.partition_point(|&c| c <= rem);
    let day = rem - table[month - 1] + 1;

    (year as i32, month as u8, day as u8)
}
