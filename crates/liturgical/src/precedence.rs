//! Precedence resolution: picks the celebration observed on a date.
//!
//! - [`precedence_key`] is a total order over celebrations: precedence class
//!   from the Table of Liturgical Days, then rank, then subject (the Lord, then
//!   Mary and the Apostles, then others), then Proper of Time before Proper of
//!   Saints.
//! - [`dispose`] decides what happens to each celebration that loses: impeded
//!   solemnities are transferred, memorials are commemorated or left optional,
//!   everything else is suppressed for the year.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use crate::error::{LiturgicalError, Result};
use crate::registry::{Celebration, Proper, Rank};

/// What happens to a celebration that does not win its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Disposition {
    /// Moved to the nearest following open date.
    Transferred,
    /// Not celebrated, but may be commemorated within the day's liturgy.
    Commemorated,
    /// May still be chosen in place of the day's celebration.
    Optional,
    /// Omitted this year.
    Suppressed,
}

/// A celebration that lost its date, with what becomes of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demotion {
    pub celebration: Celebration,
    pub disposition: Disposition,
}

/// Outcome of resolving one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub winner: Celebration,
    /// Losing candidates, highest precedence first.
    pub demoted: Vec<Demotion>,
}

/// Sort key; smaller wins.
pub type PrecedenceKey = (u8, Rank, u8, Proper);

pub fn precedence_key(celebration: &Celebration) -> PrecedenceKey {
    (
        celebration.precedence,
        celebration.rank,
        celebration.subject.tiebreak_order(),
        celebration.proper,
    )
}

/// Compare two celebrations; `Ordering::Less` means `a` takes precedence.
pub fn compare(a: &Celebration, b: &Celebration) -> Ordering {
    precedence_key(a).cmp(&precedence_key(b))
}

/// Disposition of `loser` once `winner` holds the date.
///
/// Memorials give way to privileged weekdays (class 9: late Advent, the
/// Christmas octave, Lent) as commemorations, and stay optional beside another
/// memorial or an ordinary weekday.
pub fn dispose(loser: &Celebration, winner: &Celebration) -> Disposition {
    if loser.is_transferable() {
        return Disposition::Transferred;
    }
    match loser.rank {
        Rank::ObligatoryMemorial | Rank::OptionalMemorial => match winner.precedence {
            9 => Disposition::Commemorated,
            p if p >= 10 => Disposition::Optional,
            _ => Disposition::Suppressed,
        },
        _ => Disposition::Suppressed,
    }
}

/// Resolve the candidates competing for `date`.
///
/// Optional memorials never displace another candidate; they win only when
/// nothing else is present. The result does not depend on the order of
/// `candidates`.
///
/// # Errors
/// Returns `LiturgicalError::UnresolvableConflict` when the two best competing
/// candidates share the whole precedence key, or when `candidates` is empty.
pub fn resolve(date: NaiveDate, candidates: &[Celebration]) -> Result<Resolution> {
    let mut ordered: Vec<&Celebration> = candidates.iter().collect();
    ordered.sort_by(|a, b| compare(a, b).then_with(|| a.name.cmp(&b.name)));

    let competing: Vec<usize> = ordered
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank != Rank::OptionalMemorial)
        .map(|(i, _)| i)
        .collect();
    // Optional memorials alone are parallel choices; only competing
    // celebrations must be strictly ordered.
    let must_be_strict = !competing.is_empty();
    let pool: Vec<usize> = if must_be_strict {
        competing
    } else {
        (0..ordered.len()).collect()
    };

    let Some(&winner_index) = pool.first() else {
        return Err(LiturgicalError::UnresolvableConflict {
            date,
            first: String::new(),
            second: String::new(),
        });
    };
    let winner = ordered[winner_index];

    if let Some(&runner_up) = pool.get(1).filter(|_| must_be_strict) {
        let rival = ordered[runner_up];
        if precedence_key(rival) == precedence_key(winner) {
            return Err(LiturgicalError::UnresolvableConflict {
                date,
                first: winner.name.to_string(),
                second: rival.name.to_string(),
            });
        }
    }

    let demoted = ordered
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != winner_index)
        .map(|(_, loser)| Demotion {
            celebration: (*loser).clone(),
            disposition: dispose(loser, winner),
        })
        .collect();

    Ok(Resolution {
        winner: winner.clone(),
        demoted,
    })
}
