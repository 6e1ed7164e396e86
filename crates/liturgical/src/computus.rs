//! Computus -- the date of Easter Sunday for a civil year.
//!
//! Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher). The result is
//! a pure function of the year: no iteration, no lookup tables.

use chrono::NaiveDate;

use crate::error::{LiturgicalError, Result};

/// First full year of the Gregorian calendar.
pub const MIN_YEAR: i32 = 1583;

/// Last year `chrono::NaiveDate` can represent. A liturgical year ending in
/// `MAX_YEAR` lies wholly inside it.
pub const MAX_YEAR: i32 = 262_143;

/// Reject years the engine cannot compute.
pub(crate) fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(LiturgicalError::InvalidYear {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

/// Compute the date of Easter Sunday for `year`.
///
/// The paschal full moon is located from the year's position in the 19-year
/// Metonic cycle plus the Gregorian solar and lunar century corrections; Easter
/// is the Sunday that follows it. The result always lies in March 22..=April 25.
///
/// # Errors
/// Returns `LiturgicalError::InvalidYear` when `year` is before 1583 or past
/// the date range of `chrono` ([`MAX_YEAR`]).
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    check_year(year)?;

    // Position in the Metonic cycle.
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    // Solar (leap century) and lunar corrections.
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // Epact: days from the equinox to the paschal full moon.
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    // Days from the full moon to the following Sunday.
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(LiturgicalError::InvalidYear {
        year,
        min: MIN_YEAR,
        max: MAX_YEAR,
    })
}

