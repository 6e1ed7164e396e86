//! Error types for liturgical calendar operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiturgicalError {
    /// The year lies outside the range the Gregorian computus is defined for.
    #[error("Invalid year {year}: supported years are {min}..={max}")]
    InvalidYear { year: i32, min: i32, max: i32 },

    /// A lookup asked for a date the constructed calendar does not cover.
    #[error("Date {date} is outside the liturgical year {first}..={last}")]
    DateOutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    /// A registry entry carries an impossible precedence class or position.
    /// This is a programming error in the registry table.
    #[error("Malformed registry entry '{name}': {reason}")]
    MalformedRegistryEntry { name: String, reason: String },

    /// Two candidates for one date tied on every precedence criterion.
    /// Only a defective registry can produce this.
    #[error("Unresolvable conflict on {date} between '{first}' and '{second}'")]
    UnresolvableConflict {
        date: NaiveDate,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, LiturgicalError>;
