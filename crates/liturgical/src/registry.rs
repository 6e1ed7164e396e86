//! The universal-calendar catalog: every celebration of the General Roman
//! Calendar, modeled as plain tagged records.
//!
//! Each entry carries its rank, its precedence class from the Table of
//! Liturgical Days, its color, and a positioning rule. The catalog is built
//! once per process ([`FeastRegistry::general`]) and never mutated.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use crate::error::{LiturgicalError, Result};
use crate::options::CalendarOptions;
use crate::season::{sunday_after, ymd, LiturgicalYear};

/// Rank of a celebration, highest first.
///
/// The derived ordering is the rank tie-break used by the precedence
/// comparator: `Solemnity < Feast < ... < Weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Solemnity,
    Feast,
    Sunday,
    ObligatoryMemorial,
    OptionalMemorial,
    Weekday,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Solemnity => write!(f, "Solemnity"),
            Rank::Feast => write!(f, "Feast"),
            Rank::Sunday => write!(f, "Sunday"),
            Rank::ObligatoryMemorial => write!(f, "Memorial"),
            Rank::OptionalMemorial => write!(f, "Optional Memorial"),
            Rank::Weekday => write!(f, "Weekday"),
        }
    }
}

/// Liturgical color of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Red,
    Green,
    Violet,
    Rose,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Violet => write!(f, "violet"),
            Color::Rose => write!(f, "rose"),
        }
    }
}

/// Who is celebrated. Orders celebrations of equal class and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Lord,
    BlessedVirginMary,
    Apostle,
    Other,
}

impl Subject {
    /// Tie-break order: the Lord, then Mary and the Apostles, then everyone else.
    pub fn tiebreak_order(self) -> u8 {
        match self {
            Subject::Lord => 0,
            Subject::BlessedVirginMary | Subject::Apostle => 1,
            Subject::Other => 2,
        }
    }
}

/// Which proper a celebration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Proper {
    /// Proper of Time: Sundays, seasons and the mysteries of the Lord's life
    /// anchored to Christmas or Easter.
    Temporale,
    /// Proper of Saints: celebrations tied to the civil calendar.
    Sanctorale,
}

/// Celebrations positioned by a rule that is neither a fixed date nor a plain
/// offset from Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MovableRule {
    /// Sunday within the Octave of Christmas, or December 30 when there is none.
    HolyFamily,
    /// January 6 or the Sunday between January 2 and 8, per options.
    Epiphany,
    /// Sunday after the Epiphany, or the Monday after a January 7/8 Epiphany.
    BaptismOfTheLord,
    /// Easter + 39 or Easter + 42, per options.
    Ascension,
    /// Easter + 60 or Easter + 63, per options.
    CorpusChristi,
    /// Last Sunday before Advent.
    ChristTheKing,
}

/// Where a celebration falls in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Fixed { month: u32, day: u32 },
    EasterOffset(i64),
    Movable(MovableRule),
    /// The generated weekday or Sunday of the season; never registered.
    Seasonal,
}

/// Easter offsets the registry accepts: Ash Wednesday through the Saturday
/// after the Sacred Heart.
pub const EASTER_OFFSET_RANGE: std::ops::RangeInclusive<i64> = -46..=69;

/// One celebration of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Celebration {
    pub name: Cow<'static, str>,
    pub rank: Rank,
    /// Class in the Table of Liturgical Days, 1 (highest) to 13.
    pub precedence: u8,
    pub color: Color,
    pub subject: Subject,
    pub proper: Proper,
    pub position: Position,
}

impl Celebration {
    /// Build a celebration with an owned name, e.g. a generated seasonal day.
    pub fn new(
        name: impl Into<String>,
        rank: Rank,
        precedence: u8,
        color: Color,
        subject: Subject,
        proper: Proper,
        position: Position,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            rank,
            precedence,
            color,
            subject,
            proper,
            position,
        }
    }

    /// Whether this is a solemnity that must be transferred, not dropped, when
    /// impeded.
    pub fn is_transferable(&self) -> bool {
        self.rank == Rank::Solemnity && self.precedence <= 3
    }

    /// Dates this celebration occupies within `year`.
    ///
    /// Fixed dates are tried in both civil years the liturgical year touches,
    /// so a date near the start of Advent may occur twice in a 371-day year.
    /// February 29 yields nothing in common years.
    pub fn dates_in(&self, year: &LiturgicalYear, options: &CalendarOptions) -> Vec<NaiveDate> {
        let seasons = &year.seasons;
        let candidates: Vec<NaiveDate> = match self.position {
            Position::Fixed { month, day } => [year.year - 1, year.year]
                .iter()
                .filter_map(|&y| NaiveDate::from_ymd_opt(y, month, day))
                .collect(),
            Position::EasterOffset(offset) => vec![year.easter + Duration::days(offset)],
            Position::Movable(rule) => vec![match rule {
                MovableRule::HolyFamily => {
                    let sunday = sunday_after(seasons.christmas);
                    if sunday.year() == seasons.christmas.year() {
                        sunday
                    } else {
                        ymd(seasons.christmas.year(), 12, 30)
                    }
                }
                MovableRule::Epiphany => seasons.epiphany,
                MovableRule::BaptismOfTheLord => seasons.baptism_of_the_lord,
                MovableRule::Ascension => year.easter + Duration::days(options.ascension_offset()),
                MovableRule::CorpusChristi => {
                    year.easter + Duration::days(options.corpus_christi_offset())
                }
                MovableRule::ChristTheKing => seasons.next_advent_start - Duration::weeks(1),
            }],
            Position::Seasonal => Vec::new(),
        };
        candidates
            .into_iter()
            .filter(|d| year.contains(*d))
            .collect()
    }

    /// Check the entry for an impossible class, rank/class pairing or position.
    fn validate(&self) -> Result<()> {
        let malformed = |reason: String| LiturgicalError::MalformedRegistryEntry {
            name: self.name.to_string(),
            reason,
        };

        if !(1..=13).contains(&self.precedence) {
            return Err(malformed(format!(
                "precedence class {} is outside 1..=13",
                self.precedence
            )));
        }

        let allowed: &[u8] = match self.rank {
            Rank::Solemnity => &[1, 2, 3, 4],
            Rank::Feast => &[5, 7, 8],
            Rank::Sunday => &[2, 6],
            Rank::ObligatoryMemorial => &[10, 11],
            Rank::OptionalMemorial => &[12],
            Rank::Weekday => &[2, 9, 13],
        };
        if !allowed.contains(&self.precedence) {
            return Err(malformed(format!(
                "rank {} cannot carry precedence class {}",
                self.rank, self.precedence
            )));
        }

        match self.position {
            Position::Fixed { month, day } => {
                // 2000 is a leap year, so February 29 is accepted.
                if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                    return Err(malformed(format!("{month}/{day} is not a calendar day")));
                }
                if self.rank == Rank::Sunday {
                    return Err(malformed("a Sunday cannot have a fixed date".into()));
                }
            }
            Position::EasterOffset(offset) => {
                if !EASTER_OFFSET_RANGE.contains(&offset) {
                    return Err(malformed(format!(
                        "Easter offset {offset} is outside {EASTER_OFFSET_RANGE:?}"
                    )));
                }
                if self.rank == Rank::Sunday && offset.rem_euclid(7) != 0 {
                    return Err(malformed(format!(
                        "Easter offset {offset} does not fall on a Sunday"
                    )));
                }
            }
            Position::Movable(_) => {}
            Position::Seasonal => {
                return Err(malformed("seasonal days are generated, not registered".into()));
            }
        }

        Ok(())
    }
}

/// Immutable catalog of celebrations.
#[derive(Debug, Clone)]
pub struct FeastRegistry {
    celebrations: Vec<Celebration>,
}

static GENERAL: LazyLock<Result<FeastRegistry>> =
    LazyLock::new(|| FeastRegistry::new(TEMPORALE.iter().chain(SANCTORALE).cloned().collect()));

impl FeastRegistry {
    /// Build a registry from `celebrations`, validating every entry.
    ///
    /// # Errors
    /// Returns `LiturgicalError::MalformedRegistryEntry` for the first entry
    /// with an invalid precedence class or positioning rule, or a duplicate name.
    pub fn new(celebrations: Vec<Celebration>) -> Result<Self> {
        let mut names = HashSet::new();
        for celebration in &celebrations {
            celebration.validate()?;
            if !names.insert(celebration.name.as_ref()) {
                return Err(LiturgicalError::MalformedRegistryEntry {
                    name: celebration.name.to_string(),
                    reason: "duplicate name".into(),
                });
            }
        }
        Ok(Self { celebrations })
    }

    /// The General Roman Calendar, built on first use.
    ///
    /// # Errors
    /// Returns `LiturgicalError::MalformedRegistryEntry` if the built-in table
    /// is defective.
    pub fn general() -> Result<&'static FeastRegistry> {
        GENERAL.as_ref().map_err(Clone::clone)
    }

    pub fn all_celebrations(&self) -> &[Celebration] {
        &self.celebrations
    }

    pub fn get(&self, name: &str) -> Option<&Celebration> {
        self.celebrations.iter().find(|c| c.name == name)
    }

    /// Every celebration in `year`, grouped by date.
    pub fn placements(
        &self,
        year: &LiturgicalYear,
        options: &CalendarOptions,
    ) -> BTreeMap<NaiveDate, Vec<&Celebration>> {
        let mut by_date: BTreeMap<NaiveDate, Vec<&Celebration>> = BTreeMap::new();
        for celebration in &self.celebrations {
            for date in celebration.dates_in(year, options) {
                by_date.entry(date).or_default().push(celebration);
            }
        }
        by_date
    }

    /// Celebrations that fall on `date` in `year`.
    pub fn celebrations_on(
        &self,
        date: NaiveDate,
        year: &LiturgicalYear,
        options: &CalendarOptions,
    ) -> Vec<&Celebration> {
        self.celebrations
            .iter()
            .filter(|c| c.dates_in(year, options).contains(&date))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Table builders
// ---------------------------------------------------------------------------

const fn temporale(
    position: Position,
    name: &'static str,
    rank: Rank,
    precedence: u8,
    color: Color,
    subject: Subject,
) -> Celebration {
    Celebration {
        name: Cow::Borrowed(name),
        rank,
        precedence,
        color,
        subject,
        proper: Proper::Temporale,
        position,
    }
}

const fn saint(
    month: u32,
    day: u32,
    name: &'static str,
    rank: Rank,
    precedence: u8,
    color: Color,
    subject: Subject,
) -> Celebration {
    Celebration {
        name: Cow::Borrowed(name),
        rank,
        precedence,
        color,
        subject,
        proper: Proper::Sanctorale,
        position: Position::Fixed { month, day },
    }
}

const fn solemnity(
    month: u32,
    day: u32,
    name: &'static str,
    color: Color,
    subject: Subject,
) -> Celebration {
    saint(month, day, name, Rank::Solemnity, 3, color, subject)
}

const fn feast_of_the_lord(month: u32, day: u32, name: &'static str, color: Color) -> Celebration {
    saint(month, day, name, Rank::Feast, 5, color, Subject::Lord)
}

const fn feast(
    month: u32,
    day: u32,
    name: &'static str,
    color: Color,
    subject: Subject,
) -> Celebration {
    saint(month, day, name, Rank::Feast, 7, color, subject)
}

const fn memorial(month: u32, day: u32, name: &'static str, color: Color) -> Celebration {
    saint(month, day, name, Rank::ObligatoryMemorial, 10, color, Subject::Other)
}

const fn optional(month: u32, day: u32, name: &'static str, color: Color) -> Celebration {
    saint(month, day, name, Rank::OptionalMemorial, 12, color, Subject::Other)
}

const fn easter(
    offset: i64,
    name: &'static str,
    rank: Rank,
    precedence: u8,
    color: Color,
) -> Celebration {
    temporale(Position::EasterOffset(offset), name, rank, precedence, color, Subject::Lord)
}

const fn movable(rule: MovableRule, name: &'static str, rank: Rank, precedence: u8) -> Celebration {
    temporale(Position::Movable(rule), name, rank, precedence, Color::White, Subject::Lord)
}

use Color::{Red, Violet, White};
use Rank::{Feast, ObligatoryMemorial, Solemnity, Sunday, Weekday};
use Subject::{Apostle, BlessedVirginMary as Mary, Lord, Other};

/// Proper of Time entries. These replace the generated seasonal day on their date.
#[rustfmt::skip]
static TEMPORALE: &[Celebration] = &[
    // Christmas cycle
    temporale(Position::Fixed { month: 12, day: 25 }, "The Nativity of the Lord", Solemnity, 2, White, Lord),
    movable(MovableRule::HolyFamily, "The Holy Family of Jesus, Mary and Joseph", Feast, 5),
    movable(MovableRule::Epiphany, "The Epiphany of the Lord", Solemnity, 2),
    movable(MovableRule::BaptismOfTheLord, "The Baptism of the Lord", Feast, 5),
    // Lent and Holy Week
    easter(-46, "Ash Wednesday", Weekday, 2, Violet),
    easter(-7, "Palm Sunday of the Passion of the Lord", Sunday, 2, Red),
    easter(-6, "Monday of Holy Week", Weekday, 2, Violet),
    easter(-5, "Tuesday of Holy Week", Weekday, 2, Violet),
    easter(-4, "Wednesday of Holy Week", Weekday, 2, Violet),
    // Paschal Triduum
    easter(-3, "Thursday of the Lord's Supper", Solemnity, 1, White),
    easter(-2, "Friday of the Passion of the Lord", Solemnity, 1, Red),
    easter(-1, "Holy Saturday", Solemnity, 1, Violet),
    easter(0, "Easter Sunday of the Resurrection of the Lord", Solemnity, 1, White),
    // Octave of Easter
    easter(1, "Monday within the Octave of Easter", Solemnity, 2, White),
    easter(2, "Tuesday within the Octave of Easter", Solemnity, 2, White),
    easter(3, "Wednesday within the Octave of Easter", Solemnity, 2, White),
    easter(4, "Thursday within the Octave of Easter", Solemnity, 2, White),
    easter(5, "Friday within the Octave of Easter", Solemnity, 2, White),
    easter(6, "Saturday within the Octave of Easter", Solemnity, 2, White),
    easter(7, "Second Sunday of Easter (Divine Mercy Sunday)", Sunday, 2, White),
    // Easter season and after Pentecost
    movable(MovableRule::Ascension, "The Ascension of the Lord", Solemnity, 2),
    easter(49, "Pentecost Sunday", Solemnity, 2, Red),
    easter(56, "The Most Holy Trinity", Solemnity, 3, White),
    movable(MovableRule::CorpusChristi, "The Most Holy Body and Blood of Christ", Solemnity, 3),
    easter(68, "The Most Sacred Heart of Jesus", Solemnity, 3, White),
    movable(MovableRule::ChristTheKing, "Our Lord Jesus Christ, King of the Universe", Solemnity, 3),
];

/// Proper of Saints entries, plus the two Marian memorials tied to Pentecost.
#[rustfmt::skip]
static SANCTORALE: &[Celebration] = &[
    // Marian memorials after Pentecost
    Celebration {
        name: Cow::Borrowed("The Blessed Virgin Mary, Mother of the Church"),
        rank: ObligatoryMemorial,
        precedence: 10,
        color: White,
        subject: Mary,
        proper: Proper::Sanctorale,
        position: Position::EasterOffset(50),
    },
    Celebration {
        name: Cow::Borrowed("The Immaculate Heart of the Blessed Virgin Mary"),
        rank: ObligatoryMemorial,
        precedence: 10,
        color: White,
        subject: Mary,
        proper: Proper::Sanctorale,
        position: Position::EasterOffset(69),
    },
    // January
    solemnity(1, 1, "Mary, the Holy Mother of God", White, Mary),
    memorial(1, 2, "Saints Basil the Great and Gregory Nazianzen, Bishops and Doctors", White),
    optional(1, 3, "The Most Holy Name of Jesus", White),
    optional(1, 7, "Saint Raymond of Penyafort, Priest", White),
    optional(1, 13, "Saint Hilary, Bishop and Doctor", White),
    memorial(1, 17, "Saint Anthony, Abbot", White),
    optional(1, 20, "Saint Fabian, Pope and Martyr", Red),
    optional(1, 20, "Saint Sebastian, Martyr", Red),
    memorial(1, 21, "Saint Agnes, Virgin and Martyr", Red),
    optional(1, 22, "Saint Vincent, Deacon and Martyr", Red),
    memorial(1, 24, "Saint Francis de Sales, Bishop and Doctor", White),
    feast(1, 25, "The Conversion of Saint Paul the Apostle", White, Apostle),
    memorial(1, 26, "Saints Timothy and Titus, Bishops", White),
    optional(1, 27, "Saint Angela Merici, Virgin", White),
    memorial(1, 28, "Saint Thomas Aquinas, Priest and Doctor", White),
    memorial(1, 31, "Saint John Bosco, Priest", White),
    // February
    feast_of_the_lord(2, 2, "The Presentation of the Lord", White),
    optional(2, 3, "Saint Blaise, Bishop and Martyr", Red),
    optional(2, 3, "Saint Ansgar, Bishop", White),
    memorial(2, 5, "Saint Agatha, Virgin and Martyr", Red),
    memorial(2, 6, "Saints Paul Miki and Companions, Martyrs", Red),
    optional(2, 8, "Saint Jerome Emiliani", White),
    optional(2, 8, "Saint Josephine Bakhita, Virgin", White),
    memorial(2, 10, "Saint Scholastica, Virgin", White),
    optional(2, 11, "Our Lady of Lourdes", White),
    memorial(2, 14, "Saints Cyril, Monk, and Methodius, Bishop", White),
    optional(2, 17, "The Seven Holy Founders of the Servite Order", White),
    optional(2, 21, "Saint Peter Damian, Bishop and Doctor", White),
    feast(2, 22, "The Chair of Saint Peter the Apostle", White, Apostle),
    memorial(2, 23, "Saint Polycarp, Bishop and Martyr", Red),
    // March
    optional(3, 4, "Saint Casimir", White),
    memorial(3, 7, "Saints Perpetua and Felicity, Martyrs", Red),
    optional(3, 8, "Saint John of God, Religious", White),
    optional(3, 9, "Saint Frances of Rome, Religious", White),
    optional(3, 17, "Saint Patrick, Bishop", White),
    optional(3, 18, "Saint Cyril of Jerusalem, Bishop and Doctor", White),
    solemnity(3, 19, "Saint Joseph, Spouse of the Blessed Virgin Mary", White, Other),
    optional(3, 23, "Saint Turibius of Mogrovejo, Bishop", White),
    solemnity(3, 25, "The Annunciation of the Lord", White, Lord),
    // April
    optional(4, 2, "Saint Francis of Paola, Hermit", White),
    optional(4, 4, "Saint Isidore, Bishop and Doctor", White),
    optional(4, 5, "Saint Vincent Ferrer, Priest", White),
    memorial(4, 7, "Saint John Baptist de la Salle, Priest", White),
    memorial(4, 11, "Saint Stanislaus, Bishop and Martyr", Red),
    optional(4, 13, "Saint Martin I, Pope and Martyr", Red),
    optional(4, 21, "Saint Anselm, Bishop and Doctor", White),
    optional(4, 23, "Saint George, Martyr", Red),
    optional(4, 23, "Saint Adalbert, Bishop and Martyr", Red),
    optional(4, 24, "Saint Fidelis of Sigmaringen, Priest and Martyr", Red),
    feast(4, 25, "Saint Mark, Evangelist", Red, Other),
    optional(4, 28, "Saint Peter Chanel, Priest and Martyr", Red),
    optional(4, 28, "Saint Louis Grignion de Montfort, Priest", White),
    memorial(4, 29, "Saint Catherine of Siena, Virgin and Doctor", White),
    optional(4, 30, "Saint Pius V, Pope", White),
    // May
    optional(5, 1, "Saint Joseph the Worker", White),
    memorial(5, 2, "Saint Athanasius, Bishop and Doctor", White),
    feast(5, 3, "Saints Philip and James, Apostles", Red, Apostle),
    optional(5, 12, "Saints Nereus and Achilleus, Martyrs", Red),
    optional(5, 12, "Saint Pancras, Martyr", Red),
    optional(5, 13, "Our Lady of Fatima", White),
    feast(5, 14, "Saint Matthias, Apostle", Red, Apostle),
    optional(5, 18, "Saint John I, Pope and Martyr", Red),
    optional(5, 20, "Saint Bernardine of Siena, Priest", White),
    memorial(5, 26, "Saint Philip Neri, Priest", White),
    optional(5, 27, "Saint Augustine of Canterbury, Bishop", White),
    feast(5, 31, "The Visitation of the Blessed Virgin Mary", White, Mary),
    // June
    memorial(6, 1, "Saint Justin, Martyr", Red),
    optional(6, 2, "Saints Marcellinus and Peter, Martyrs", Red),
    memorial(6, 3, "Saints Charles Lwanga and Companions, Martyrs", Red),
    memorial(6, 5, "Saint Boniface, Bishop and Martyr", Red),
    optional(6, 6, "Saint Norbert, Bishop", White),
    optional(6, 9, "Saint Ephrem, Deacon and Doctor", White),
    memorial(6, 11, "Saint Barnabas, Apostle", Red),
    memorial(6, 13, "Saint Anthony of Padua, Priest and Doctor", White),
    optional(6, 19, "Saint Romuald, Abbot", White),
    memorial(6, 21, "Saint Aloysius Gonzaga, Religious", White),
    optional(6, 22, "Saint Paulinus of Nola, Bishop", White),
    optional(6, 22, "Saints John Fisher, Bishop, and Thomas More, Martyrs", Red),
    solemnity(6, 24, "The Nativity of Saint John the Baptist", White, Other),
    optional(6, 27, "Saint Cyril of Alexandria, Bishop and Doctor", White),
    memorial(6, 28, "Saint Irenaeus, Bishop and Martyr", Red),
    solemnity(6, 29, "Saints Peter and Paul, Apostles", Red, Apostle),
    optional(6, 30, "The First Martyrs of the Holy Roman Church", Red),
    // July
    feast(7, 3, "Saint Thomas, Apostle", Red, Apostle),
    optional(7, 4, "Saint Elizabeth of Portugal", White),
    optional(7, 5, "Saint Anthony Zaccaria, Priest", White),
    optional(7, 6, "Saint Maria Goretti, Virgin and Martyr", Red),
    memorial(7, 11, "Saint Benedict, Abbot", White),
    optional(7, 13, "Saint Henry", White),
    optional(7, 14, "Saint Camillus de Lellis, Priest", White),
    memorial(7, 15, "Saint Bonaventure, Bishop and Doctor", White),
    optional(7, 16, "Our Lady of Mount Carmel", White),
    optional(7, 21, "Saint Lawrence of Brindisi, Priest and Doctor", White),
    feast(7, 22, "Saint Mary Magdalene", White, Other),
    optional(7, 23, "Saint Bridget, Religious", White),
    feast(7, 25, "Saint James, Apostle", Red, Apostle),
    memorial(7, 26, "Saints Joachim and Anne, Parents of the Blessed Virgin Mary", White),
    memorial(7, 29, "Saints Martha, Mary and Lazarus", White),
    optional(7, 30, "Saint Peter Chrysologus, Bishop and Doctor", White),
    memorial(7, 31, "Saint Ignatius of Loyola, Priest", White),
    // August
    memorial(8, 1, "Saint Alphonsus Liguori, Bishop and Doctor", White),
    optional(8, 2, "Saint Eusebius of Vercelli, Bishop", White),
    optional(8, 2, "Saint Peter Julian Eymard, Priest", White),
    memorial(8, 4, "Saint John Vianney, Priest", White),
    optional(8, 5, "The Dedication of the Basilica of Saint Mary Major", White),
    feast_of_the_lord(8, 6, "The Transfiguration of the Lord", White),
    optional(8, 7, "Saint Sixtus II, Pope, and Companions, Martyrs", Red),
    optional(8, 7, "Saint Cajetan, Priest", White),
    memorial(8, 8, "Saint Dominic, Priest", White),
    optional(8, 9, "Saint Teresa Benedicta of the Cross, Virgin and Martyr", Red),
    feast(8, 10, "Saint Lawrence, Deacon and Martyr", Red, Other),
    memorial(8, 11, "Saint Clare, Virgin", White),
    optional(8, 12, "Saint Jane Frances de Chantal, Religious", White),
    optional(8, 13, "Saints Pontian, Pope, and Hippolytus, Priest, Martyrs", Red),
    memorial(8, 14, "Saint Maximilian Kolbe, Priest and Martyr", Red),
    solemnity(8, 15, "The Assumption of the Blessed Virgin Mary", White, Mary),
    optional(8, 16, "Saint Stephen of Hungary", White),
    optional(8, 19, "Saint John Eudes, Priest", White),
    memorial(8, 20, "Saint Bernard, Abbot and Doctor", White),
    memorial(8, 21, "Saint Pius X, Pope", White),
    memorial(8, 22, "The Queenship of the Blessed Virgin Mary", White),
    optional(8, 23, "Saint Rose of Lima, Virgin", White),
    feast(8, 24, "Saint Bartholomew, Apostle", Red, Apostle),
    optional(8, 25, "Saint Louis", White),
    optional(8, 25, "Saint Joseph Calasanz, Priest", White),
    memorial(8, 27, "Saint Monica", White),
    memorial(8, 28, "Saint Augustine, Bishop and Doctor", White),
    memorial(8, 29, "The Passion of Saint John the Baptist", Red),
    // September
    memorial(9, 3, "Saint Gregory the Great, Pope and Doctor", White),
    feast(9, 8, "The Nativity of the Blessed Virgin Mary", White, Mary),
    optional(9, 9, "Saint Peter Claver, Priest", White),
    optional(9, 12, "The Most Holy Name of Mary", White),
    memorial(9, 13, "Saint John Chrysostom, Bishop and Doctor", White),
    feast_of_the_lord(9, 14, "The Exaltation of the Holy Cross", Red),
    memorial(9, 15, "Our Lady of Sorrows", White),
    memorial(9, 16, "Saints Cornelius, Pope, and Cyprian, Bishop, Martyrs", Red),
    optional(9, 17, "Saint Robert Bellarmine, Bishop and Doctor", White),
    optional(9, 19, "Saint Januarius, Bishop and Martyr", Red),
    memorial(9, 20, "Saints Andrew Kim Tae-gon, Priest, Paul Chong Ha-sang, and Companions, Martyrs", Red),
    feast(9, 21, "Saint Matthew, Apostle and Evangelist", Red, Apostle),
    memorial(9, 23, "Saint Pius of Pietrelcina, Priest", White),
    optional(9, 26, "Saints Cosmas and Damian, Martyrs", Red),
    memorial(9, 27, "Saint Vincent de Paul, Priest", White),
    optional(9, 28, "Saint Wenceslaus, Martyr", Red),
    optional(9, 28, "Saint Lawrence Ruiz and Companions, Martyrs", Red),
    feast(9, 29, "Saints Michael, Gabriel and Raphael, Archangels", White, Other),
    memorial(9, 30, "Saint Jerome, Priest and Doctor", White),
    // October
    memorial(10, 1, "Saint Thérèse of the Child Jesus, Virgin and Doctor", White),
    memorial(10, 2, "The Holy Guardian Angels", White),
    memorial(10, 4, "Saint Francis of Assisi", White),
    optional(10, 6, "Saint Bruno, Priest", White),
    memorial(10, 7, "Our Lady of the Rosary", White),
    optional(10, 9, "Saint Denis, Bishop, and Companions, Martyrs", Red),
    optional(10, 9, "Saint John Leonardi, Priest", White),
    optional(10, 11, "Saint John XXIII, Pope", White),
    optional(10, 14, "Saint Callistus I, Pope and Martyr", Red),
    memorial(10, 15, "Saint Teresa of Jesus, Virgin and Doctor", White),
    optional(10, 16, "Saint Hedwig, Religious", White),
    optional(10, 16, "Saint Margaret Mary Alacoque, Virgin", White),
    memorial(10, 17, "Saint Ignatius of Antioch, Bishop and Martyr", Red),
    feast(10, 18, "Saint Luke, Evangelist", Red, Other),
    optional(10, 19, "Saints John de Brébeuf and Isaac Jogues, Priests, and Companions, Martyrs", Red),
    optional(10, 19, "Saint Paul of the Cross, Priest", White),
    optional(10, 22, "Saint John Paul II, Pope", White),
    optional(10, 23, "Saint John of Capistrano, Priest", White),
    optional(10, 24, "Saint Anthony Mary Claret, Bishop", White),
    feast(10, 28, "Saints Simon and Jude, Apostles", Red, Apostle),
    // November
    solemnity(11, 1, "All Saints", White, Other),
    solemnity(11, 2, "The Commemoration of All the Faithful Departed", Violet, Other),
    optional(11, 3, "Saint Martin de Porres, Religious", White),
    memorial(11, 4, "Saint Charles Borromeo, Bishop", White),
    feast_of_the_lord(11, 9, "The Dedication of the Lateran Basilica", White),
    memorial(11, 10, "Saint Leo the Great, Pope and Doctor", White),
    memorial(11, 11, "Saint Martin of Tours, Bishop", White),
    memorial(11, 12, "Saint Josaphat, Bishop and Martyr", Red),
    optional(11, 15, "Saint Albert the Great, Bishop and Doctor", White),
    optional(11, 16, "Saint Margaret of Scotland", White),
    optional(11, 16, "Saint Gertrude, Virgin", White),
    memorial(11, 17, "Saint Elizabeth of Hungary, Religious", White),
    optional(11, 18, "The Dedication of the Basilicas of Saints Peter and Paul", White),
    memorial(11, 21, "The Presentation of the Blessed Virgin Mary", White),
    memorial(11, 22, "Saint Cecilia, Virgin and Martyr", Red),
    optional(11, 23, "Saint Clement I, Pope and Martyr", Red),
    optional(11, 23, "Saint Columban, Abbot", White),
    memorial(11, 24, "Saint Andrew Dung-Lac, Priest, and Companions, Martyrs", Red),
    optional(11, 25, "Saint Catherine of Alexandria, Virgin and Martyr", Red),
    feast(11, 30, "Saint Andrew, Apostle", Red, Apostle),
    // December
    memorial(12, 3, "Saint Francis Xavier, Priest", White),
    optional(12, 4, "Saint John Damascene, Priest and Doctor", White),
    optional(12, 6, "Saint Nicholas, Bishop", White),
    memorial(12, 7, "Saint Ambrose, Bishop and Doctor", White),
    solemnity(12, 8, "The Immaculate Conception of the Blessed Virgin Mary", White, Mary),
    optional(12, 9, "Saint Juan Diego Cuauhtlatoatzin", White),
    optional(12, 11, "Saint Damasus I, Pope", White),
    optional(12, 12, "Our Lady of Guadalupe", White),
    memorial(12, 13, "Saint Lucy, Virgin and Martyr", Red),
    memorial(12, 14, "Saint John of the Cross, Priest and Doctor", White),
    optional(12, 21, "Saint Peter Canisius, Priest and Doctor", White),
    optional(12, 23, "Saint John of Kanty, Priest", White),
    feast(12, 26, "Saint Stephen, the First Martyr", Red, Other),
    feast(12, 27, "Saint John, Apostle and Evangelist", White, Apostle),
    feast(12, 28, "The Holy Innocents, Martyrs", Red, Other),
    optional(12, 29, "Saint Thomas Becket, Bishop and Martyr", Red),
    optional(12, 31, "Saint Sylvester I, Pope", White),
];
