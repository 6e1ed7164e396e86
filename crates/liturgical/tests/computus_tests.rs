//! Tests for the Easter computus against published Easter dates.

use chrono::{Datelike, NaiveDate, Weekday};
use liturgical::computus::{MAX_YEAR, MIN_YEAR};
use liturgical::{easter_sunday, LiturgicalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn known_fixed_points() {
    assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
    assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
    assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
}

#[test]
fn published_dates_across_centuries() {
    // First Gregorian Easter after the reform took full effect.
    assert_eq!(easter_sunday(1583).unwrap(), date(1583, 4, 10));
    assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
    assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
    assert_eq!(easter_sunday(2008).unwrap(), date(2008, 3, 23));
    assert_eq!(easter_sunday(2019).unwrap(), date(2019, 4, 21));
    assert_eq!(easter_sunday(2022).unwrap(), date(2022, 4, 17));
    assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
    assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
    assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
    assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
}

#[test]
fn easter_is_always_a_sunday() {
    for year in 1900..=2100 {
        let easter = easter_sunday(year).unwrap();
        assert_eq!(easter.weekday(), Weekday::Sun, "Easter {year} = {easter}");
    }
}

#[test]
fn year_before_gregorian_reform_is_rejected() {
    let err = easter_sunday(1582).unwrap_err();
    assert_eq!(
        err,
        LiturgicalError::InvalidYear {
            year: 1582,
            min: MIN_YEAR,
            max: MAX_YEAR,
        }
    );
}

#[test]
fn bounds_are_inclusive() {
    assert!(easter_sunday(MIN_YEAR).is_ok());
    assert!(easter_sunday(MAX_YEAR).is_ok());
    assert!(matches!(
        easter_sunday(MAX_YEAR + 1),
        Err(LiturgicalError::InvalidYear { .. })
    ));
    assert!(matches!(
        easter_sunday(-44),
        Err(LiturgicalError::InvalidYear { .. })
    ));
}

#[test]
fn years_past_four_digits_are_supported() {
    assert_eq!(easter_sunday(9999).unwrap(), date(9999, 3, 28));
    assert_eq!(easter_sunday(10000).unwrap(), date(10000, 4, 16));
    assert_eq!(easter_sunday(MAX_YEAR).unwrap(), date(MAX_YEAR, 3, 24));
}
