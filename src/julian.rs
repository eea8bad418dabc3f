//! Julian Day codec.
//!
//! Julian Day numbers here are whole days evaluated at noon; callers that
//! need the midnight-referenced value add 0.5 themselves. The fractional
//! constants of the textbook algorithm (365.25, 30.6001, ...) are carried as
//! exact integer divisions so results never depend on float rounding.

/// Failures of the Julian-calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JulianError {
    /// Conversion direction that has intentionally not been built yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Julian Day number at noon of a proleptic Gregorian date.
pub fn day_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month > 2 {
        (i64::from(year), i64::from(month))
    } else {
        (i64::from(year) - 1, i64::from(month) + 12)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    // floor(365.25 * (y + 4716)) and floor(30.6001 * (m + 1))
    (1461 * (y + 4716)).div_euclid(4) + (153 * (m + 1)).div_euclid(5) + i64::from(day) + b - 1524
}

/// Proleptic Gregorian `(year, month, day)` for a Julian Day at noon.
pub fn gregorian_from_day(jd: i64) -> (i32, u8, u8) {
    // Gregorian cutover correction: floor((jd - 1867216.25) / 36524.25)
    let alpha = (4 * jd - 7_468_865).div_euclid(146_097);
    let a = jd + 1 + alpha - alpha.div_euclid(4);
    decompose(a)
}

/// Julian-calendar `(year, month, day)` for a Julian Day at noon.
///
/// Identical to [`gregorian_from_day`] except that no cutover correction is
/// applied; JD 2299161 is Gregorian 1582-10-15 but Julian 1582-10-05.
pub fn julian_from_day(jd: i64) -> (i32, u8, u8) {
    decompose(jd)
}

/// Julian Day number of a Julian-calendar date.
///
/// # Errors
/// Always fails with [`JulianError::NotImplemented`]; the reverse direction
/// has not been built.
pub fn day_from_julian(_year: i32, _month: u8, _day: u8) -> Result<i64, JulianError> {
    Err(JulianError::NotImplemented(
        "Julian Day from a Julian-calendar date",
    ))
}

/// Proleptic Gregorian date of a Julian-calendar date.
///
/// # Errors
/// Always fails with [`JulianError::NotImplemented`]; the reverse direction
/// has not been built.
pub fn gregorian_from_julian(
    _year: i32,
    _month: u8,
    _day: u8,
) -> Result<(i32, u8, u8), JulianError> {
    Err(JulianError::NotImplemented(
        "Gregorian date from a Julian-calendar date",
    ))
}

/// Shared b, c, d, e decomposition of the Meeus algorithm.
fn decompose(a: i64) -> (i32, u8, u8) {
    let b = a + 1524;
    // floor((b - 122.1) / 365.25)
    let c = (20 * b - 2442).div_euclid(7305);
    // floor(365.25 * c)
    let d = (1461 * c).div_euclid(4);
    // floor((b - d) / 30.6001) and floor(30.6001 * e)
    let e = ((b - d) * 10_000).div_euclid(306_001);
    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u8, day as u8)
}
