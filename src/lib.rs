mod consts;
pub mod gregorian;
pub mod julian;
pub mod persian;
mod prelude;
mod types;

pub use consts::*;
pub use julian::JulianError;
pub use types::{days_in_month, is_leap_year, Day, Month};

use crate::prelude::*;
use jiff::civil;
use jiff::Timestamp;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A date in the Persian (Solar Hijri) calendar.
///
/// The value is immutable; every derived field (day-id, weekday, day of
/// year, week of year, Gregorian equivalent) is computed once at
/// construction. Equality, ordering and hashing are all defined by the
/// day-id alone, so two values constructed by different routes compare equal
/// exactly when they name the same day.
#[derive(Clone, Copy)]
pub struct PersianDate {
    year: i32,
    month: types::Month,
    day: types::Day,
    day_id: i64,
    weekday: u8,
    day_of_year: u16,
    week_of_year: u8,
    leap_year: bool,
    gregorian: (i32, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid day 30 for month 12: year {year} is not a leap year")]
    NotLeapYear { year: i32 },
    #[display(fmt = "Invalid abbreviated year: {} (must be 0-99)", "_0")]
    InvalidAbbrYear(u8),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Weekday {found} does not match the date (expected {expected})")]
    WeekdayMismatch {
        expected: &'static str,
        found: String,
    },
    #[display(
        fmt = "Gregorian equivalent {_0}-{_1:02}-{_2:02} is outside the supported civil range"
    )]
    CivilRange(i32, u8, u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl PersianDate {
    /// Creates a date from calendar components.
    ///
    /// # Errors
    /// Returns `DateError` naming the offending component: month outside
    /// 1-12, day past the end of the month, or day 30 of Esfand in a common
    /// year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Creates a date from a 2-digit year shorthand: values below 50 fall in
    /// the 1400s, the rest in the 1300s. A convenience for terse input, not
    /// a calendar rule.
    ///
    /// # Errors
    /// Returns `DateError::InvalidAbbrYear` for years above 99, otherwise
    /// validates like [`PersianDate::new`].
    pub fn with_abbr_year(year: u8, month: u8, day: u8) -> Result<Self, DateError> {
        if year > 99 {
            return Err(DateError::InvalidAbbrYear(year));
        }
        let century = if year < 50 { 1400 } else { 1300 };
        Self::new(century + i32::from(year), month, day)
    }

    /// Creates the date of the same day in the proleptic Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError` if the Gregorian components themselves are not a
    /// valid calendar date.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > gregorian::days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self::from_day_id(
            gregorian::day_id(year, month, day) - GREGORIAN_ID_OFFSET,
        ))
    }

    /// Creates the date for a Persian day-id (day 0 is 0001-01-01).
    pub fn from_day_id(day_id: i64) -> Self {
        let (year, month, day) = persian::from_day_id(day_id);
        Self::from_parts(
            year,
            Month::new_unchecked(month),
            Day::new_unchecked(day),
        )
    }

    /// Creates the date containing the given Julian Day at noon.
    pub fn from_julian_day(jd: i64) -> Self {
        Self::from_day_id(jd - JULIAN_DAY_OFFSET)
    }

    /// Creates the date of the same day as a civil [`jiff::civil::Date`].
    pub fn from_civil(date: civil::Date) -> Self {
        Self::from(date)
    }

    /// Today in Iran standard time (UTC+3:30).
    pub fn today() -> Self {
        Self::today_at_offset(IRST_UTC_OFFSET)
    }

    /// Today at a fixed UTC offset given in seconds east of UTC.
    pub fn today_at_offset(utc_offset: i32) -> Self {
        let seconds = Timestamp::now().as_second() + i64::from(utc_offset);
        let unix_day = seconds.div_euclid(SECONDS_PER_DAY);
        Self::from_day_id(unix_day + UNIX_EPOCH_GREGORIAN_DAY_ID - GREGORIAN_ID_OFFSET)
    }

    fn from_parts(year: i32, month: types::Month, day: types::Day) -> Self {
        let day_id = persian::day_id(year, month.get(), day.get());
        let weekday = (day_id + 5).rem_euclid(7) as u8;
        let day_of_year = (persian::day_of_year_index(month.get(), day.get()) + 1) as u16;
        Self {
            year,
            month,
            day,
            day_id,
            weekday,
            day_of_year,
            week_of_year: week_of_year(day_of_year, weekday),
            leap_year: types::is_leap_year(year),
            gregorian: gregorian::from_day_id(day_id + GREGORIAN_ID_OFFSET),
        }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as u8 for convenience
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month as u8 for convenience
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the `(year, month, day)` components as a tuple
    pub const fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    /// Returns the day-id, the number of days since Persian 0001-01-01
    pub const fn day_id(&self) -> i64 {
        self.day_id
    }

    /// Returns the weekday index, 0 (shanbe) through 6 (jom'e)
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Returns the 3-letter weekday abbreviation
    pub const fn weekday_abbr(&self) -> &'static str {
        WEEKDAY_ABBR[self.weekday as usize]
    }

    /// Returns the 3-letter month abbreviation
    pub const fn month_abbr(&self) -> &'static str {
        MONTH_ABBR[self.month.get() as usize - 1]
    }

    /// Whether the year is a leap year under the 33-year cycle
    pub const fn leap_year(&self) -> bool {
        self.leap_year
    }

    /// Returns the day of the year, 1-366
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Returns the week of the year, 1-based and anchored on weekday 0
    pub const fn week_of_year(&self) -> u8 {
        self.week_of_year
    }

    /// Returns the same day in the proleptic Gregorian calendar
    pub const fn gregorian(&self) -> (i32, u8, u8) {
        self.gregorian
    }

    /// Returns the Julian Day number at noon of this date
    pub const fn julian_day(&self) -> i64 {
        self.day_id + JULIAN_DAY_OFFSET
    }

    /// The same day as a civil [`jiff::civil::Date`].
    ///
    /// # Errors
    /// Returns `DateError::CivilRange` when the Gregorian equivalent falls
    /// outside the civil type's supported years.
    pub fn to_civil(&self) -> Result<civil::Date, DateError> {
        let (year, month, day) = self.gregorian;
        let civil_year =
            i16::try_from(year).map_err(|_| DateError::CivilRange(year, month, day))?;
        civil::Date::new(civil_year, month as i8, day as i8)
            .map_err(|_| DateError::CivilRange(year, month, day))
    }
}

/// Week number for a day of year and its weekday, counting weeks from the
/// first (possibly partial) week of the year.
fn week_of_year(day_of_year: u16, weekday: u8) -> u8 {
    let distance = i64::from(day_of_year) - 1 - i64::from(weekday);
    let first_week_days = (-distance).rem_euclid(7);
    ((distance + first_week_days) / 7 + 1) as u8
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {}",
            self.year,
            self.month.get(),
            self.day.get(),
            self.weekday_abbr()
        )
    }
}

impl fmt::Debug for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PersianDate({}, {}, {})",
            self.year,
            self.month.get(),
            self.day.get()
        )
    }
}

impl PartialEq for PersianDate {
    fn eq(&self, other: &Self) -> bool {
        self.day_id == other.day_id
    }
}

impl Eq for PersianDate {}

impl PartialOrd for PersianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_id.cmp(&other.day_id)
    }
}

impl Hash for PersianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day_id.hash(state);
    }
}

impl Add<i64> for PersianDate {
    type Output = PersianDate;

    fn add(self, days: i64) -> Self::Output {
        Self::from_day_id(self.day_id + days)
    }
}

impl Add<PersianDate> for i64 {
    type Output = PersianDate;

    fn add(self, date: PersianDate) -> Self::Output {
        date + self
    }
}

impl Sub<i64> for PersianDate {
    type Output = PersianDate;

    fn sub(self, days: i64) -> Self::Output {
        Self::from_day_id(self.day_id - days)
    }
}

impl Sub for PersianDate {
    type Output = i64;

    fn sub(self, other: PersianDate) -> Self::Output {
        self.day_id - other.day_id
    }
}

impl From<civil::Date> for PersianDate {
    fn from(date: civil::Date) -> Self {
        let id = gregorian::day_id(
            i32::from(date.year()),
            date.month() as u8,
            date.day() as u8,
        );
        Self::from_day_id(id - GREGORIAN_ID_OFFSET)
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    /// Parses the display form, `1402-01-01` with an optional weekday
    /// abbreviation after it. A weekday that is present must belong to the
    /// date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let mut tokens = trimmed.split_whitespace();
        let date_part = tokens.next().ok_or(DateError::EmptyInput)?;
        let weekday_part = tokens.next();
        if tokens.next().is_some() {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        // Split from the right so a negative year keeps its sign
        let mut parts = date_part.rsplitn(3, DATE_SEPARATOR);
        let day_str = parts
            .next()
            .ok_or_else(|| DateError::InvalidFormat(date_part.to_owned()))?;
        let month_str = parts
            .next()
            .ok_or_else(|| DateError::InvalidFormat(date_part.to_owned()))?;
        let year_str = parts
            .next()
            .ok_or_else(|| DateError::InvalidFormat(date_part.to_owned()))?;

        let year = year_str
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(date_part.to_owned()))?;
        let month = month_str
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(date_part.to_owned()))?;
        let day = day_str
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(date_part.to_owned()))?;

        let date = Self::new(year, month, day)?;
        if let Some(abbr) = weekday_part {
            if abbr != date.weekday_abbr() {
                return Err(DateError::WeekdayMismatch {
                    expected: date.weekday_abbr(),
                    found: abbr.to_owned(),
                });
            }
        }
        Ok(date)
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
