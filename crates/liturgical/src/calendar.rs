//! The resolved calendar for one liturgical year.
//!
//! Construction runs every stage in dependency order: Easter, seasons, cycles,
//! registry placements, then a chronological pass that resolves each date and
//! carries impeded solemnities forward until they find an open date.

use serde::Serialize;

use crate::error::{LiturgicalError, Result};
use crate::options::CalendarOptions;
use crate::precedence::{compare, resolve, Demotion, Disposition};
use crate::registry::{Celebration, Color, FeastRegistry, Proper, Rank};
use crate::season::{LiturgicalYear, Season};
use crate::temporal::seasonal_day;
use crate::CalendarDate;

/// One resolved day of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: CalendarDate,
    pub season: Season,
    /// Week within the season.
    pub week: u32,
    /// The celebration observed on this date.
    pub celebration: Celebration,
    /// Celebrations that lost this date, with their disposition.
    pub demoted: Vec<Demotion>,
    pub color: Color,
    /// Original date when `celebration` was transferred here.
    pub transferred_from: Option<CalendarDate>,
}

/// A fully resolved liturgical year.
#[derive(Debug, Clone, Serialize)]
pub struct Calendar {
    year: LiturgicalYear,
    options: CalendarOptions,
    days: Vec<CalendarDay>,
}

/// A solemnity waiting for an open date.
#[derive(Debug)]
struct PendingTransfer {
    celebration: Celebration,
    from: CalendarDate,
}

impl Calendar {
    /// Build the calendar of the liturgical year ending in `year`, with
    /// default options and the General Roman Calendar.
    ///
    /// # Errors
    /// Returns `LiturgicalError::InvalidYear` if `year` is before 1583 or
    /// after [`MAX_YEAR`](crate::computus::MAX_YEAR).
    pub fn new(year: i32) -> Result<Self> {
        Self::with_options(year, CalendarOptions::default())
    }

    /// Build with explicit observance options.
    ///
    /// # Errors
    /// As [`Calendar::new`].
    pub fn with_options(year: i32, options: CalendarOptions) -> Result<Self> {
        let registry = FeastRegistry::general()?;
        Self::with_registry(year, options, registry)
    }

    /// Build against a custom registry.
    ///
    /// # Errors
    /// Returns `LiturgicalError::InvalidYear` for unsupported years and
    /// `LiturgicalError::UnresolvableConflict` when the registry places two
    /// indistinguishable celebrations on one date. No partial calendar is
    /// returned.
    pub fn with_registry(
        year: i32,
        options: CalendarOptions,
        registry: &FeastRegistry,
    ) -> Result<Self> {
        let liturgical_year = LiturgicalYear::compute(year, &options)?;
        tracing::debug!(
            year,
            easter = %liturgical_year.easter,
            first = %liturgical_year.first_day(),
            last = %liturgical_year.last_day(),
            "building liturgical calendar"
        );

        let placements = registry.placements(&liturgical_year, &options);
        let mut pending: Vec<PendingTransfer> = Vec::new();
        let mut days = Vec::with_capacity(liturgical_year.len_days());

        for date in liturgical_year
            .first_day()
            .iter_days()
            .take_while(|d| *d <= liturgical_year.last_day())
        {
            let mut candidates: Vec<Celebration> = placements
                .get(&date)
                .map(|entries| entries.iter().map(|c| (*c).clone()).collect())
                .unwrap_or_default();
            if !candidates.iter().any(|c| c.proper == Proper::Temporale) {
                candidates.push(seasonal_day(date, &liturgical_year)?);
            }

            let mut arrival: Option<PendingTransfer> = None;
            if let Some(i) = pending
                .iter()
                .position(|p| is_open_for(&candidates, &p.celebration))
            {
                let transfer = pending.remove(i);
                tracing::debug!(
                    celebration = %transfer.celebration.name,
                    from = %transfer.from,
                    to = %date,
                    "placing transferred solemnity"
                );
                candidates.push(transfer.celebration.clone());
                arrival = Some(transfer);
            }

            let resolution = resolve(date, &candidates)?;
            let origin_of = |c: &Celebration| match &arrival {
                Some(t) if t.celebration.name == c.name => t.from,
                _ => date,
            };

            for demotion in &resolution.demoted {
                if demotion.disposition == Disposition::Transferred {
                    pending.push(PendingTransfer {
                        celebration: demotion.celebration.clone(),
                        from: origin_of(&demotion.celebration),
                    });
                }
            }
            pending.sort_by(|a, b| {
                compare(&a.celebration, &b.celebration).then(a.from.cmp(&b.from))
            });

            let (Some(season), Some(week)) = (
                liturgical_year.seasons.season_of(date),
                liturgical_year.seasons.week_of(date),
            ) else {
                return Err(LiturgicalError::DateOutOfRange {
                    date,
                    first: liturgical_year.first_day(),
                    last: liturgical_year.last_day(),
                });
            };

            let transferred_from = match &arrival {
                Some(t) if t.celebration.name == resolution.winner.name => Some(t.from),
                _ => None,
            };
            tracing::trace!(%date, celebration = %resolution.winner.name, "resolved");

            days.push(CalendarDay {
                date,
                season,
                week,
                color: resolution.winner.color,
                celebration: resolution.winner,
                demoted: resolution.demoted,
                transferred_from,
            });
        }

        for transfer in &pending {
            tracing::warn!(
                celebration = %transfer.celebration.name,
                from = %transfer.from,
                "no open date before the end of the liturgical year; transfer dropped"
            );
        }

        Ok(Self {
            year: liturgical_year,
            options,
            days,
        })
    }

    /// The resolved day for `date`.
    ///
    /// # Errors
    /// Returns `LiturgicalError::DateOutOfRange` outside the liturgical year.
    pub fn day_on(&self, date: CalendarDate) -> Result<&CalendarDay> {
        let first = self.year.first_day();
        let out_of_range = || LiturgicalError::DateOutOfRange {
            date,
            first,
            last: self.year.last_day(),
        };
        if date < first {
            return Err(out_of_range());
        }
        let index = (date - first).num_days() as usize;
        self.days.get(index).ok_or_else(out_of_range)
    }

    /// Every day of the liturgical year in chronological order.
    pub fn all_days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn liturgical_year(&self) -> &LiturgicalYear {
        &self.year
    }

    /// Civil year in which this liturgical year ends.
    pub fn year(&self) -> i32 {
        self.year.year
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }
}

/// A date is open for a transferred solemnity when no solemnity or feast
/// already sits there and everything present ranks strictly below it.
fn is_open_for(candidates: &[Celebration], transfer: &Celebration) -> bool {
    candidates.iter().all(|other| {
        !matches!(other.rank, Rank::Solemnity | Rank::Feast)
            && other.precedence > transfer.precedence
    })
}
