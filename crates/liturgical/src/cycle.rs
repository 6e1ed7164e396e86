//! Lectionary cycles: the three-year Sunday cycle and two-year weekday cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A liturgical year known to read Sunday cycle A.
///
/// Lectionary for Mass, Introduction (1981), no. 66: Year C is the year whose
/// number is divisible by three. The liturgical year 2023 (Advent 2022 through
/// November 2023) therefore reads Year A.
pub const SUNDAY_CYCLE_A_REFERENCE_YEAR: i32 = 2023;

/// Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

/// Weekday lectionary cycle for Ordinary Time first readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayCycle {
    I,
    II,
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SundayCycle::A => write!(f, "A"),
            SundayCycle::B => write!(f, "B"),
            SundayCycle::C => write!(f, "C"),
        }
    }
}

impl fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayCycle::I => write!(f, "I"),
            WeekdayCycle::II => write!(f, "II"),
        }
    }
}

/// Select the Sunday and weekday cycles for the liturgical year that ends in
/// the civil year `year`.
///
/// Odd years read weekday cycle I, even years cycle II.
pub fn select_cycles(year: i32) -> (SundayCycle, WeekdayCycle) {
    let sunday = match (year - SUNDAY_CYCLE_A_REFERENCE_YEAR).rem_euclid(3) {
        0 => SundayCycle::A,
        1 => SundayCycle::B,
        _ => SundayCycle::C,
    };
    let weekday = if year.rem_euclid(2) == 1 {
        WeekdayCycle::I
    } else {
        WeekdayCycle::II
    };
    (sunday, weekday)
}
