//! Observance choices that episcopal conferences make for the universal calendar.
//!
//! The General Roman Calendar allows three solemnities to be kept either on
//! their traditional weekday or on a nearby Sunday. Everything else in the
//! engine is fixed by the universal norms.

use serde::{Deserialize, Serialize};

/// Where the Epiphany of the Lord is celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpiphanyRule {
    /// Always on January 6.
    January6,
    /// On the Sunday falling between January 2 and January 8.
    #[default]
    SundayAfterJanuary1,
}

/// Where the Ascension of the Lord is celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AscensionRule {
    /// Thursday of the sixth week of Easter (Easter + 39).
    Thursday,
    /// Seventh Sunday of Easter (Easter + 42).
    #[default]
    Sunday,
}

/// Where the Most Holy Body and Blood of Christ is celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusChristiRule {
    /// Thursday after Holy Trinity (Easter + 60).
    Thursday,
    /// Sunday after Holy Trinity (Easter + 63).
    #[default]
    Sunday,
}

/// Calendar construction options.
///
/// Defaults keep all three solemnities on Sundays. Missing fields in a
/// deserialized document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub epiphany: EpiphanyRule,
    pub ascension: AscensionRule,
    pub corpus_christi: CorpusChristiRule,
}

impl CalendarOptions {
    /// Options matching the universal calendar with no Sunday transfers.
    pub fn universal() -> Self {
        Self {
            epiphany: EpiphanyRule::January6,
            ascension: AscensionRule::Thursday,
            corpus_christi: CorpusChristiRule::Thursday,
        }
    }

    /// Days after Easter Sunday on which the Ascension falls.
    pub fn ascension_offset(&self) -> i64 {
        match self.ascension {
            AscensionRule::Thursday => 39,
            AscensionRule::Sunday => 42,
        }
    }

    /// Days after Easter Sunday on which Corpus Christi falls.
    pub fn corpus_christi_offset(&self) -> i64 {
        match self.corpus_christi {
            CorpusChristiRule::Thursday => 60,
            CorpusChristiRule::Sunday => 63,
        }
    }
}
