//! Persian (Solar Hijri) day-id codec.
//!
//! Day 0 is Persian 0001-01-01. Years decompose into 33-year leap cycles of
//! 12053 days; within a year, the first six months have 31 days and the rest
//! 30, so day-of-year arithmetic needs no month table.

use crate::consts::{
    CUM_DAYS_33Y, DAYS_IN_33Y, HALF_YEAR_DAYS, LEAP_REMAINDERS, PERSIAN_CYCLE_YEARS,
};

/// Day-id of a Persian date. Components must already be valid for the
/// calendar; this function does not check them.
pub fn day_id(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    let cycles = y.div_euclid(PERSIAN_CYCLE_YEARS);
    let rem = y.rem_euclid(PERSIAN_CYCLE_YEARS);
    let leaps = LEAP_REMAINDERS.iter().filter(|&&r| r <= rem).count() as i64;
    cycles * DAYS_IN_33Y + leaps * 366 + (rem - leaps) * 365 + day_of_year_index(month, day)
}

/// Persian `(year, month, day)` for a day-id.
///
/// The cumulative table holds days before each year of the cycle as
/// right-open intervals: the year index is the first entry strictly greater
/// than the remainder, stepped back by one.
pub fn from_day_id(day_id: i64) -> (i32, u8, u8) {
    let cycles = day_id.div_euclid(DAYS_IN_33Y);
    let mut rem = day_id.rem_euclid(DAYS_IN_33Y);

    let index = CUM_DAYS_33Y.partition_point(|&c| c <= rem);
    rem -= CUM_DAYS_33Y[index - 1];
    let year = cycles * PERSIAN_CYCLE_YEARS + index as i64;

    let (month, day) = if rem < HALF_YEAR_DAYS {
        (rem / 31 + 1, rem % 31 + 1)
    } else {
        let rem = rem - HALF_YEAR_DAYS;
        (rem / 30 + 7, rem % 30 + 1)
    };

    (year as i32, month as u8, day as u8)
}

/// Zero-based day of the year for a month/day pair.
pub(crate) fn day_of_year_index(month: u8, day: u8) -> i64 {
    let m = i64::from(month) - 1;
    let d = i64::from(day) - 1;
    if m < 7 {
        m * 31 + d
    } else {
        HALF_YEAR_DAYS + (m - 6) * 30 + d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::days_in_month;

    #[test]
    fn test_cycle_table_integrity() {
        assert_eq!(CUM_DAYS_33Y[0], 0);

        let mut leap_years = 0;
        for i in 1..CUM_DAYS_33Y.len() {
            match CUM_DAYS_33Y[i] - CUM_DAYS_33Y[i - 1] {
                366 => leap_years += 1,
                365 => {}
                other => panic!("year {i} of the cycle spans {other} days"),
            }
        }
        // The closing year of the cycle is common
        assert_eq!(DAYS_IN_33Y - CUM_DAYS_33Y[32], 365);
        assert_eq!(leap_years, 8);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(day_id(1, 1, 1), 0);
        assert_eq!(from_day_id(0), (1, 1, 1));
    }

    #[test]
    fn test_known_day_ids() {
        // 1 Farvardin 1402 and 11 Dey 1348 (the Unix epoch)
        assert_eq!(day_id(1402, 1, 1), 511_705);
        assert_eq!(day_id(1348, 10, 11), 492_268);
        assert_eq!(from_day_id(511_705), (1402, 1, 1));
        assert_eq!(from_day_id(492_268), (1348, 10, 11));
    }

    #[test]
    fn test_day_of_year_rule() {
        assert_eq!(day_of_year_index(1, 1), 0);
        assert_eq!(day_of_year_index(6, 31), 185);
        assert_eq!(day_of_year_index(7, 1), 186);
        assert_eq!(day_of_year_index(12, 29), 364);
        assert_eq!(day_of_year_index(12, 30), 365);
    }

    #[test]
    fn test_year_lengths_follow_leap_rule() {
        for year in 1206..=1498 {
            let length = day_id(year + 1, 1, 1) - day_id(year, 1, 1);
            let expected = if crate::types::is_leap_year(year) { 366 } else { 365 };
            assert_eq!(length, expected, "year {year}");
        }
    }

    #[test]
    fn test_round_trip_is_contiguous() {
        // Walk every date of the documented validity window and check both
        // directions of the codec against a running day counter.
        let mut id = day_id(1206, 1, 1);
        for year in 1206..=1498 {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month) {
                    assert_eq!(day_id(year, month, day), id, "{year}-{month}-{day}");
                    assert_eq!(from_day_id(id), (year, month, day), "day-id {id}");
                    id += 1;
                }
            }
        }
    }

    #[test]
    fn test_negative_day_ids() {
        // The day before the epoch is the last of Esfand of year 0, which is
        // common under the cycle rule.
        assert_eq!(from_day_id(-1), (0, 12, 29));
        assert_eq!(day_id(0, 12, 29), -1);

        for id in [-1, -365, -12_053, -44_444] {
            let (y, m, d) = from_day_id(id);
            assert_eq!(day_id(y, m, d), id, "day-id {id}");
        }
    }

    #[test]
    fn test_cycle_boundaries() {
        assert_eq!(from_day_id(DAYS_IN_33Y - 1), (33, 12, 29));
        assert_eq!(from_day_id(DAYS_IN_33Y), (34, 1, 1));
        assert_eq!(day_id(34, 1, 1), DAYS_IN_33Y);
    }
}
