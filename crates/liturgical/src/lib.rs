//! # liturgical
//!
//! Deterministic computation of the Roman Catholic liturgical calendar.
//!
//! Given a civil year, the engine derives the date of Easter, the boundaries of
//! the liturgical seasons, the Sunday and weekday lectionary cycles, and the
//! celebration observed on every day from the First Sunday of Advent to the
//! eve of the next Advent, applying the Table of Liturgical Days when several
//! celebrations fall on one date.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use liturgical::Calendar;
//!
//! let calendar = Calendar::new(2025).unwrap();
//! let day = calendar.day_on(NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()).unwrap();
//! assert_eq!(day.celebration.name, "Easter Sunday of the Resurrection of the Lord");
//! ```
//!
//! ## Modules
//!
//! - [`computus`] — civil year → Easter Sunday
//! - [`season`] — season boundaries, season and week lookup
//! - [`cycle`] — Sunday (A/B/C) and weekday (I/II) cycles
//! - [`registry`] — the General Roman Calendar as data
//! - [`temporal`] — generic Sundays and weekdays of each season
//! - [`precedence`] — winner selection and disposition of impeded celebrations
//! - [`calendar`] — orchestration into a gapless sequence of resolved days
//! - [`options`] — Epiphany, Ascension and Corpus Christi observance choices
//! - [`error`] — Error types

pub mod calendar;
pub mod computus;
pub mod cycle;
pub mod error;
pub mod options;
pub mod precedence;
pub mod registry;
pub mod season;
pub mod temporal;

/// A day of the proleptic Gregorian calendar.
pub type CalendarDate = chrono::NaiveDate;

pub use calendar::{Calendar, CalendarDay};
pub use computus::easter_sunday;
pub use cycle::{select_cycles, SundayCycle, WeekdayCycle};
pub use error::LiturgicalError;
pub use options::CalendarOptions;
pub use precedence::{resolve, Demotion, Disposition, Resolution};
pub use registry::{Celebration, Color, FeastRegistry, Position, Rank};
pub use season::{derive_seasons, liturgical_year_of, LiturgicalYear, Season};
