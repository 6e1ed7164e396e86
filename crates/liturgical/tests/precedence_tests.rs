//! Tests for precedence resolution on a single date.

use chrono::NaiveDate;
use liturgical::precedence::{compare, dispose};
use liturgical::registry::{Proper, Subject};
use liturgical::{resolve, Celebration, Color, Disposition, LiturgicalError, Position, Rank};
use std::cmp::Ordering;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 28).unwrap()
}

fn celebration(
    name: &str,
    rank: Rank,
    precedence: u8,
    subject: Subject,
    proper: Proper,
) -> Celebration {
    let position = match proper {
        Proper::Temporale => Position::Seasonal,
        Proper::Sanctorale => Position::Fixed { month: 6, day: 28 },
    };
    Celebration::new(name, rank, precedence, Color::White, subject, proper, position)
}

fn weekday(precedence: u8) -> Celebration {
    celebration("Weekday", Rank::Weekday, precedence, Subject::Lord, Proper::Temporale)
}

fn sunday() -> Celebration {
    celebration("Sunday", Rank::Sunday, 6, Subject::Lord, Proper::Temporale)
}

fn solemnity(name: &str, subject: Subject) -> Celebration {
    celebration(name, Rank::Solemnity, 3, subject, Proper::Sanctorale)
}

fn memorial(name: &str, subject: Subject) -> Celebration {
    celebration(name, Rank::ObligatoryMemorial, 10, subject, Proper::Sanctorale)
}

fn optional(name: &str) -> Celebration {
    celebration(name, Rank::OptionalMemorial, 12, Subject::Other, Proper::Sanctorale)
}

fn disposition_of(resolution: &liturgical::Resolution, name: &str) -> Disposition {
    resolution
        .demoted
        .iter()
        .find(|d| d.celebration.name == name)
        .map(|d| d.disposition)
        .unwrap_or_else(|| panic!("{name} not demoted"))
}

// ── Winner selection ────────────────────────────────────────────────────────

#[test]
fn lower_class_wins() {
    let candidates = vec![weekday(13), memorial("Saint", Subject::Other)];
    let resolution = resolve(day(), &candidates).unwrap();
    assert_eq!(resolution.winner.name, "Saint");
    assert_eq!(disposition_of(&resolution, "Weekday"), Disposition::Suppressed);
}

#[test]
fn single_candidate_wins_alone() {
    let resolution = resolve(day(), &[weekday(13)]).unwrap();
    assert_eq!(resolution.winner.name, "Weekday");
    assert!(resolution.demoted.is_empty());
}

#[test]
fn subject_breaks_ties_within_a_class() {
    let candidates = vec![
        memorial("Saint Irenaeus", Subject::Other),
        memorial("Immaculate Heart", Subject::BlessedVirginMary),
    ];
    let resolution = resolve(day(), &candidates).unwrap();
    assert_eq!(resolution.winner.name, "Immaculate Heart");
    assert_eq!(disposition_of(&resolution, "Saint Irenaeus"), Disposition::Optional);
}

#[test]
fn lord_outranks_saints_between_equal_solemnities() {
    let sacred_heart = celebration(
        "Sacred Heart",
        Rank::Solemnity,
        3,
        Subject::Lord,
        Proper::Temporale,
    );
    let baptist = solemnity("John the Baptist", Subject::Other);
    let resolution = resolve(day(), &[baptist, sacred_heart]).unwrap();
    assert_eq!(resolution.winner.name, "Sacred Heart");
    assert_eq!(disposition_of(&resolution, "John the Baptist"), Disposition::Transferred);
}

#[test]
fn proper_of_time_breaks_remaining_ties() {
    let temporale = celebration("Temporale", Rank::Feast, 7, Subject::Other, Proper::Temporale);
    let sanctorale = celebration("Sanctorale", Rank::Feast, 7, Subject::Other, Proper::Sanctorale);
    assert_eq!(compare(&temporale, &sanctorale), Ordering::Less);
    let resolution = resolve(day(), &[sanctorale, temporale]).unwrap();
    assert_eq!(resolution.winner.name, "Temporale");
}

#[test]
fn optional_memorial_never_displaces_weekday() {
    let candidates = vec![optional("Saint Cyril"), weekday(13)];
    let resolution = resolve(day(), &candidates).unwrap();
    assert_eq!(resolution.winner.name, "Weekday");
    assert_eq!(disposition_of(&resolution, "Saint Cyril"), Disposition::Optional);
}

#[test]
fn parallel_optional_memorials_do_not_conflict() {
    let candidates = vec![optional("Saint George"), optional("Saint Adalbert")];
    let resolution = resolve(day(), &candidates).unwrap();
    assert_eq!(resolution.winner.name, "Saint Adalbert");
    assert_eq!(disposition_of(&resolution, "Saint George"), Disposition::Optional);
}

// ── Dispositions ────────────────────────────────────────────────────────────

#[test]
fn memorial_on_privileged_weekday_is_commemorated() {
    let lent = weekday(9);
    let saint = memorial("Saints Perpetua and Felicity", Subject::Other);
    assert_eq!(dispose(&saint, &lent), Disposition::Commemorated);
    assert_eq!(dispose(&optional("Saint Peter Canisius"), &lent), Disposition::Commemorated);
}

#[test]
fn memorial_on_sunday_is_suppressed() {
    let resolution = resolve(day(), &[memorial("Saint", Subject::Other), sunday()]).unwrap();
    assert_eq!(resolution.winner.name, "Sunday");
    assert_eq!(disposition_of(&resolution, "Saint"), Disposition::Suppressed);
}

#[test]
fn impeded_solemnity_is_transferred_and_feast_suppressed() {
    let lenten_sunday = celebration(
        "Lenten Sunday",
        Rank::Sunday,
        2,
        Subject::Lord,
        Proper::Temporale,
    );
    let feast = celebration("Evangelist", Rank::Feast, 7, Subject::Other, Proper::Sanctorale);
    let candidates = vec![solemnity("Saint Joseph", Subject::Other), feast, lenten_sunday];
    let resolution = resolve(day(), &candidates).unwrap();
    assert_eq!(resolution.winner.name, "Lenten Sunday");
    assert_eq!(disposition_of(&resolution, "Saint Joseph"), Disposition::Transferred);
    assert_eq!(disposition_of(&resolution, "Evangelist"), Disposition::Suppressed);
}

#[test]
fn demotions_are_ordered_by_precedence() {
    let candidates = vec![
        weekday(13),
        optional("Optional"),
        memorial("Memorial", Subject::Other),
        solemnity("Solemnity", Subject::Other),
    ];
    let resolution = resolve(day(), &candidates).unwrap();
    let names: Vec<&str> = resolution
        .demoted
        .iter()
        .map(|d| d.celebration.name.as_ref())
        .collect();
    assert_eq!(names, vec!["Memorial", "Optional", "Weekday"]);
}

// ── Determinism and failures ────────────────────────────────────────────────

#[test]
fn resolution_is_independent_of_input_order() {
    let mut candidates = vec![
        weekday(13),
        optional("Optional"),
        memorial("Memorial", Subject::Other),
        celebration("Feast", Rank::Feast, 7, Subject::Apostle, Proper::Sanctorale),
    ];
    let expected = resolve(day(), &candidates).unwrap();
    for _ in 0..candidates.len() {
        candidates.rotate_left(1);
        assert_eq!(resolve(day(), &candidates).unwrap(), expected);
    }
    candidates.reverse();
    assert_eq!(resolve(day(), &candidates).unwrap(), expected);
}

#[test]
fn resolution_is_idempotent() {
    let candidates = vec![sunday(), memorial("Memorial", Subject::Other)];
    let first = resolve(day(), &candidates).unwrap();
    let second = resolve(day(), &candidates).unwrap();
    assert_eq!(first, second);
}

#[test]
fn identical_keys_are_unresolvable() {
    let candidates = vec![
        memorial("First", Subject::Other),
        memorial("Second", Subject::Other),
    ];
    let err = resolve(day(), &candidates).unwrap_err();
    assert_eq!(
        err,
        LiturgicalError::UnresolvableConflict {
            date: day(),
            first: "First".into(),
            second: "Second".into(),
        }
    );
}

#[test]
fn empty_candidate_list_is_an_error() {
    assert!(matches!(
        resolve(day(), &[]),
        Err(LiturgicalError::UnresolvableConflict { .. })
    ));
}
