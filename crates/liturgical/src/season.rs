//! Season boundaries of a liturgical year and season/week lookup for any date.
//!
//! A liturgical year named after civil year `Y` runs from the First Sunday of
//! Advent in `Y - 1` through the Saturday before the First Sunday of Advent in
//! `Y`. Every boundary is derived once from Easter and the fixed anchors of the
//! Christmas cycle; lookups are plain range comparisons against them.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::computus::{self, easter_sunday};
use crate::cycle::{select_cycles, SundayCycle, WeekdayCycle};
use crate::error::Result;
use crate::options::{CalendarOptions, EpiphanyRule};

/// The six seasons of the liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Advent,
    Christmas,
    OrdinaryTime,
    Lent,
    Triduum,
    Easter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Advent => write!(f, "Advent"),
            Season::Christmas => write!(f, "Christmas"),
            Season::OrdinaryTime => write!(f, "Ordinary Time"),
            Season::Lent => write!(f, "Lent"),
            Season::Triduum => write!(f, "Sacred Triduum"),
            Season::Easter => write!(f, "Easter"),
        }
    }
}

/// One contiguous stretch of a season, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSpan {
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Boundary dates of one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonBoundaries {
    pub advent_start: NaiveDate,
    pub christmas: NaiveDate,
    pub epiphany: NaiveDate,
    pub baptism_of_the_lord: NaiveDate,
    pub ordinary_time_winter_start: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    pub ordinary_time_summer_start: NaiveDate,
    /// Saturday before the next First Sunday of Advent.
    pub end: NaiveDate,
    pub next_advent_start: NaiveDate,
}

/// A fully described liturgical year: span, Easter, seasons and cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalYear {
    /// Civil year in which this liturgical year ends.
    pub year: i32,
    pub easter: NaiveDate,
    pub seasons: SeasonBoundaries,
    pub sunday_cycle: SundayCycle,
    pub weekday_cycle: WeekdayCycle,
}

impl LiturgicalYear {
    /// Compute Easter, the season boundaries and the lectionary cycles for the
    /// liturgical year ending in `year`.
    ///
    /// # Errors
    /// Returns `LiturgicalError::InvalidYear` outside the supported range.
    pub fn compute(year: i32, options: &CalendarOptions) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let seasons = derive_seasons(easter, year, options)?;
        let (sunday_cycle, weekday_cycle) = select_cycles(year);
        Ok(Self {
            year,
            easter,
            seasons,
            sunday_cycle,
            weekday_cycle,
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.seasons.advent_start
    }

    pub fn last_day(&self) -> NaiveDate {
        self.seasons.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.seasons.contains(date)
    }

    /// Number of days in the liturgical year (364 or 371).
    pub fn len_days(&self) -> usize {
        ((self.seasons.end - self.seasons.advent_start).num_days() + 1) as usize
    }
}

/// Derive the season boundaries for the liturgical year ending in `year`.
///
/// `easter` must be Easter Sunday of `year`.
///
/// # Errors
/// Returns `LiturgicalError::InvalidYear` outside the supported range.
pub fn derive_seasons(
    easter: NaiveDate,
    year: i32,
    options: &CalendarOptions,
) -> Result<SeasonBoundaries> {
    computus::check_year(year)?;

    let advent_start = first_sunday_of_advent(year - 1);
    let christmas = ymd(year - 1, 12, 25);
    let epiphany = epiphany(year, options.epiphany);
    let baptism_of_the_lord = baptism_of_the_lord(epiphany);
    let next_advent_start = first_sunday_of_advent(year);

    Ok(SeasonBoundaries {
        advent_start,
        christmas,
        epiphany,
        baptism_of_the_lord,
        ordinary_time_winter_start: baptism_of_the_lord + Duration::days(1),
        ash_wednesday: easter - Duration::days(46),
        holy_thursday: easter - Duration::days(3),
        easter,
        pentecost: easter + Duration::days(49),
        ordinary_time_summer_start: easter + Duration::days(50),
        end: next_advent_start - Duration::days(1),
        next_advent_start,
    })
}

/// Civil year naming the liturgical year that contains `date`.
pub fn liturgical_year_of(date: NaiveDate) -> i32 {
    if date >= first_sunday_of_advent(date.year()) {
        date.year() + 1
    } else {
        date.year()
    }
}

/// The First Sunday of Advent in civil year `year`: the fourth Sunday before
/// Christmas.
pub fn first_sunday_of_advent(year: i32) -> NaiveDate {
    let christmas = ymd(year, 12, 25);
    sunday_before(christmas) - Duration::weeks(3)
}

fn epiphany(year: i32, rule: EpiphanyRule) -> NaiveDate {
    match rule {
        EpiphanyRule::January6 => ymd(year, 1, 6),
        EpiphanyRule::SundayAfterJanuary1 => sunday_on_or_after(ymd(year, 1, 2)),
    }
}

/// The Baptism of the Lord is the Sunday after the Epiphany, except when the
/// Epiphany is kept on January 7 or 8: the Baptism then moves to the Monday
/// immediately following, and Ordinary Time begins on that Tuesday.
fn baptism_of_the_lord(epiphany: NaiveDate) -> NaiveDate {
    if epiphany.month() == 1 && matches!(epiphany.day(), 7 | 8) {
        epiphany + Duration::days(1)
    } else {
        sunday_after(epiphany)
    }
}

impl SeasonBoundaries {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.advent_start <= date && date <= self.end
    }

    /// Season of `date`, or `None` outside the year.
    ///
    /// The Triduum and Easter are checked before the wider ranges.
    pub fn season_of(&self, date: NaiveDate) -> Option<Season> {
        if !self.contains(date) {
            return None;
        }
        let season = if self.holy_thursday <= date && date < self.easter {
            Season::Triduum
        } else if self.easter <= date && date <= self.pentecost {
            Season::Easter
        } else if self.ash_wednesday <= date && date < self.holy_thursday {
            Season::Lent
        } else if date < self.christmas {
            Season::Advent
        } else if date <= self.baptism_of_the_lord {
            Season::Christmas
        } else {
            Season::OrdinaryTime
        };
        Some(season)
    }

    /// Week-within-season ordinal of `date`, or `None` outside the year.
    ///
    /// Weeks begin on Sunday. Lent numbers the days from Ash Wednesday to the
    /// following Saturday as week 0 and the Triduum stays in week 6 (Holy Week).
    /// Ordinary Time after Pentecost is counted back from week 34.
    pub fn week_of(&self, date: NaiveDate) -> Option<u32> {
        let season = self.season_of(date)?;
        let week = match season {
            Season::Advent => 1 + weeks_between(self.advent_start, sunday_on_or_before(date)),
            Season::Christmas => {
                let first_sunday = sunday_after(self.christmas);
                if date < first_sunday {
                    1
                } else {
                    2 + weeks_between(first_sunday, date)
                }
            }
            Season::Lent => {
                let first_sunday = self.ash_wednesday + Duration::days(4);
                if date < first_sunday {
                    0
                } else {
                    1 + weeks_between(first_sunday, date)
                }
            }
            Season::Triduum => 6,
            Season::Easter => 1 + weeks_between(self.easter, date),
            Season::OrdinaryTime if date < self.ash_wednesday => {
                let baptism_week = sunday_on_or_before(self.ordinary_time_winter_start);
                1 + weeks_between(baptism_week, date)
            }
            Season::OrdinaryTime => {
                let christ_the_king = self.next_advent_start - Duration::weeks(1);
                34 - weeks_between(sunday_on_or_before(date), christ_the_king)
            }
        };
        Some(week)
    }

    /// The seasons of the year as consecutive spans, in calendar order.
    pub fn spans(&self) -> Vec<SeasonSpan> {
        let day = Duration::days(1);
        vec![
            SeasonSpan {
                season: Season::Advent,
                start: self.advent_start,
                end: self.christmas - day,
            },
            SeasonSpan {
                season: Season::Christmas,
                start: self.christmas,
                end: self.baptism_of_the_lord,
            },
            SeasonSpan {
                season: Season::OrdinaryTime,
                start: self.ordinary_time_winter_start,
                end: self.ash_wednesday - day,
            },
            SeasonSpan {
                season: Season::Lent,
                start: self.ash_wednesday,
                end: self.holy_thursday - day,
            },
            SeasonSpan {
                season: Season::Triduum,
                start: self.holy_thursday,
                end: self.easter - day,
            },
            SeasonSpan {
                season: Season::Easter,
                start: self.easter,
                end: self.pentecost,
            },
            SeasonSpan {
                season: Season::OrdinaryTime,
                start: self.ordinary_time_summer_start,
                end: self.end,
            },
        ]
    }
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Callers pass literal month/day pairs valid in every year.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn days_from_sunday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday())
}

pub(crate) fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(days_from_sunday(date))
}

pub(crate) fn sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    date + Duration::days((7 - days_from_sunday(date)) % 7)
}

/// The Sunday strictly before `date`.
pub(crate) fn sunday_before(date: NaiveDate) -> NaiveDate {
    sunday_on_or_before(date - Duration::days(1))
}

/// The Sunday strictly after `date`.
pub(crate) fn sunday_after(date: NaiveDate) -> NaiveDate {
    sunday_on_or_after(date + Duration::days(1))
}

/// Whole weeks from `from` to `to` (`to >= from`).
fn weeks_between(from: NaiveDate, to: NaiveDate) -> u32 {
    ((to - from).num_days() / 7) as u32
}
