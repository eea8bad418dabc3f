use crate::consts::{
    ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, LEAP_REMAINDERS, MAX_MONTH, MIN_DAY,
    PERSIAN_CYCLE_YEARS, SHAHRIVAR,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Persian month value guaranteed to be in the range `1..=12`
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month known to be in range, e.g. produced by the day-id codec.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value != 0 && value <= MAX_MONTH);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("month must be non-zero"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

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

/// A day-of-month value guaranteed to be valid for a given Persian year and
/// month. Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of
    /// the month, or `DateError::NotLeapYear` for day 30 of Esfand in a
    /// common year.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            if month == ESFAND && value == ESFAND_DAYS_LEAP {
                return Err(DateError::NotLeapYear { year });
            }
            return Err(DateError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Day known to be valid for its month, e.g. produced by the day-id codec.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value != 0 && value <= 31);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("day must be non-zero"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without year/month context, so only
        // the month-independent bounds are checked
        if !(MIN_DAY..=31).contains(&value) {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Whether `year` is a Persian leap year under the 33-year cycle.
///
/// The cyclic rule is guaranteed to agree with the astronomical calendar for
/// `1206 <= year <= 1498`; outside that window it is an approximation.
pub fn is_leap_year(year: i32) -> bool {
    let rem = i64::from(year).rem_euclid(PERSIAN_CYCLE_YEARS);
    LEAP_REMAINDERS.contains(&rem)
}

/// Number of days in a Persian month: 31 through Shahrivar, then 30, with
/// Esfand at 29 or 30 depending on the leap year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month <= SHAHRIVAR {
        31
    } else if month < ESFAND {
        30
    } else if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}
