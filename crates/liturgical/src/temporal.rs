//! Generic seasonal days: the Sunday or weekday of the season for any date.
//!
//! These fill every date of the year. Proper-of-time entries in the registry
//! (Ash Wednesday, Holy Week, the Octave of Easter, ...) replace them on their
//! own dates; celebrations of the saints compete with them.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LiturgicalError, Result};
use crate::registry::{Celebration, Color, Position, Proper, Rank, Subject};
use crate::season::{LiturgicalYear, Season};

/// The generic celebration of `date`: its name, rank, precedence class and color.
///
/// # Errors
/// Returns `LiturgicalError::DateOutOfRange` if `date` is outside `year`.
pub fn seasonal_day(date: NaiveDate, year: &LiturgicalYear) -> Result<Celebration> {
    let seasons = &year.seasons;
    let (Some(season), Some(week)) = (seasons.season_of(date), seasons.week_of(date)) else {
        return Err(LiturgicalError::DateOutOfRange {
            date,
            first: year.first_day(),
            last: year.last_day(),
        });
    };
    let weekday = date.weekday();
    let sunday = weekday == Weekday::Sun;
    let wd = weekday_name(weekday);

    let (name, rank, precedence, color) = match season {
        Season::Advent if sunday => (
            format!("{} Sunday of Advent", ordinal(week)),
            Rank::Sunday,
            2,
            if week == 3 { Color::Rose } else { Color::Violet },
        ),
        Season::Advent if date.month() == 12 && date.day() >= 17 => (
            format!("December {}", date.day()),
            Rank::Weekday,
            9,
            Color::Violet,
        ),
        Season::Advent => (
            format!("{wd} of the {} Week of Advent", ordinal(week)),
            Rank::Weekday,
            13,
            Color::Violet,
        ),
        Season::Christmas => {
            let octave_day = (date - seasons.christmas).num_days() + 1;
            if octave_day <= 8 {
                (
                    format!(
                        "{} Day within the Octave of the Nativity of the Lord",
                        ordinal(octave_day as u32)
                    ),
                    Rank::Weekday,
                    9,
                    Color::White,
                )
            } else if sunday {
                (
                    "Second Sunday after the Nativity".to_string(),
                    Rank::Sunday,
                    6,
                    Color::White,
                )
            } else if date < seasons.epiphany {
                (
                    format!("{wd} of Christmas Time"),
                    Rank::Weekday,
                    13,
                    Color::White,
                )
            } else {
                (
                    format!("{wd} after the Epiphany"),
                    Rank::Weekday,
                    13,
                    Color::White,
                )
            }
        }
        Season::Lent if sunday => (
            format!("{} Sunday of Lent", ordinal(week)),
            Rank::Sunday,
            2,
            if week == 4 { Color::Rose } else { Color::Violet },
        ),
        Season::Lent if week == 0 => (
            format!("{wd} after Ash Wednesday"),
            Rank::Weekday,
            9,
            Color::Violet,
        ),
        Season::Lent => (
            format!("{wd} of the {} Week of Lent", ordinal(week)),
            Rank::Weekday,
            9,
            Color::Violet,
        ),
        Season::Triduum => (
            format!("{wd} of the Sacred Triduum"),
            Rank::Weekday,
            1,
            Color::Violet,
        ),
        Season::Easter if sunday => (
            format!("{} Sunday of Easter", ordinal(week)),
            Rank::Sunday,
            2,
            Color::White,
        ),
        Season::Easter if week == 1 => (
            format!("{wd} within the Octave of Easter"),
            Rank::Weekday,
            2,
            Color::White,
        ),
        Season::Easter => (
            format!("{wd} of the {} Week of Easter", ordinal(week)),
            Rank::Weekday,
            13,
            Color::White,
        ),
        Season::OrdinaryTime if sunday => (
            format!("{} Sunday in Ordinary Time", ordinal(week)),
            Rank::Sunday,
            6,
            Color::Green,
        ),
        Season::OrdinaryTime => (
            format!("{wd} of the {} Week in Ordinary Time", ordinal(week)),
            Rank::Weekday,
            13,
            Color::Green,
        ),
    };

    Ok(Celebration::new(
        name,
        rank,
        precedence,
        color,
        Subject::Lord,
        Proper::Temporale,
        Position::Seasonal,
    ))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// English ordinal, e.g. `1st`, `12th`, `23rd`.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
