//! Tests for the feast registry: validation, lookup and date placement.

use chrono::NaiveDate;
use liturgical::options::CalendarOptions;
use liturgical::registry::{MovableRule, Proper, Subject};
use liturgical::{
    Celebration, Color, FeastRegistry, LiturgicalError, LiturgicalYear, Position, Rank,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year(y: i32) -> LiturgicalYear {
    LiturgicalYear::compute(y, &CalendarOptions::default()).unwrap()
}

fn fixed(name: &str, rank: Rank, precedence: u8, month: u32, day: u32) -> Celebration {
    Celebration::new(
        name,
        rank,
        precedence,
        Color::White,
        Subject::Other,
        Proper::Sanctorale,
        Position::Fixed { month, day },
    )
}

fn assert_malformed(result: Result<FeastRegistry, LiturgicalError>, expected_name: &str) {
    match result {
        Err(LiturgicalError::MalformedRegistryEntry { name, .. }) => {
            assert_eq!(name, expected_name)
        }
        other => panic!("expected MalformedRegistryEntry for {expected_name}, got {other:?}"),
    }
}

// ── General Roman Calendar ──────────────────────────────────────────────────

#[test]
fn general_registry_is_valid() {
    let registry = FeastRegistry::general().unwrap();
    assert!(registry.all_celebrations().len() > 150);
}

#[test]
fn general_registry_is_shared() {
    let a = FeastRegistry::general().unwrap();
    let b = FeastRegistry::general().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn lookup_by_name() {
    let registry = FeastRegistry::general().unwrap();
    let joseph = registry
        .get("Saint Joseph, Spouse of the Blessed Virgin Mary")
        .unwrap();
    assert_eq!(joseph.rank, Rank::Solemnity);
    assert_eq!(joseph.precedence, 3);
    assert_eq!(joseph.position, Position::Fixed { month: 3, day: 19 });
    assert!(joseph.is_transferable());

    let andrew = registry.get("Saint Andrew, Apostle").unwrap();
    assert_eq!(andrew.rank, Rank::Feast);
    assert!(!andrew.is_transferable());

    assert!(registry.get("Saint Nobody").is_none());
}

#[test]
fn triduum_and_easter_hold_class_one() {
    let registry = FeastRegistry::general().unwrap();
    for name in [
        "Thursday of the Lord's Supper",
        "Friday of the Passion of the Lord",
        "Holy Saturday",
        "Easter Sunday of the Resurrection of the Lord",
    ] {
        let celebration = registry.get(name).unwrap();
        assert_eq!(celebration.precedence, 1, "{name}");
        assert_eq!(celebration.proper, Proper::Temporale, "{name}");
    }
}

// ── Placement ───────────────────────────────────────────────────────────────

#[test]
fn easter_offsets_land_relative_to_easter() {
    let registry = FeastRegistry::general().unwrap();
    let ly = year(2025);
    let options = CalendarOptions::default();

    let pentecost = registry.get("Pentecost Sunday").unwrap();
    assert_eq!(pentecost.dates_in(&ly, &options), vec![date(2025, 6, 8)]);

    let ash = registry.get("Ash Wednesday").unwrap();
    assert_eq!(ash.dates_in(&ly, &options), vec![date(2025, 3, 5)]);
}

#[test]
fn movable_entries_follow_options() {
    let registry = FeastRegistry::general().unwrap();
    let ly = year(2025);
    let ascension = registry.get("The Ascension of the Lord").unwrap();
    assert_eq!(
        ascension.dates_in(&ly, &CalendarOptions::default()),
        vec![date(2025, 6, 1)]
    );
    assert_eq!(
        ascension.dates_in(&ly, &CalendarOptions::universal()),
        vec![date(2025, 5, 29)]
    );

    let christ_the_king = registry
        .get("Our Lord Jesus Christ, King of the Universe")
        .unwrap();
    assert_eq!(
        christ_the_king.dates_in(&ly, &CalendarOptions::default()),
        vec![date(2025, 11, 23)]
    );
}

#[test]
fn holy_family_moves_to_december_30_when_christmas_is_sunday() {
    let registry = FeastRegistry::general().unwrap();
    let holy_family = registry
        .get("The Holy Family of Jesus, Mary and Joseph")
        .unwrap();
    let options = CalendarOptions::default();
    // Christmas 2022 was a Sunday.
    assert_eq!(holy_family.dates_in(&year(2023), &options), vec![date(2022, 12, 30)]);
    assert_eq!(holy_family.dates_in(&year(2025), &options), vec![date(2024, 12, 29)]);
}

#[test]
fn fixed_dates_fall_within_the_liturgical_year() {
    let registry = FeastRegistry::general().unwrap();
    let ly = year(2025);
    let options = CalendarOptions::default();

    let andrew = registry.get("Saint Andrew, Apostle").unwrap();
    // November 30, 2024 precedes Advent; November 30, 2025 is the next Advent.
    assert!(andrew.dates_in(&ly, &options).is_empty());

    let immaculate = registry
        .get("The Immaculate Conception of the Blessed Virgin Mary")
        .unwrap();
    assert_eq!(immaculate.dates_in(&ly, &options), vec![date(2024, 12, 8)]);
}

#[test]
fn placements_group_by_date() {
    let registry = FeastRegistry::general().unwrap();
    let ly = year(2025);
    let options = CalendarOptions::default();
    let placements = registry.placements(&ly, &options);

    let on_june_28: Vec<&str> = placements[&date(2025, 6, 28)]
        .iter()
        .map(|c| c.name.as_ref())
        .collect();
    assert!(on_june_28.contains(&"Saint Irenaeus, Bishop and Martyr"));
    assert!(on_june_28.contains(&"The Immaculate Heart of the Blessed Virgin Mary"));

    for (day, celebrations) in &placements {
        assert!(ly.contains(*day), "{day} outside the year");
        assert!(!celebrations.is_empty());
    }

    let direct = registry.celebrations_on(date(2025, 6, 28), &ly, &options);
    assert_eq!(direct.len(), on_june_28.len());
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn custom_registry_accepts_valid_entries() {
    let registry = FeastRegistry::new(vec![
        fixed("Local Patron", Rank::Solemnity, 4, 7, 2),
        fixed("Local Memorial", Rank::ObligatoryMemorial, 11, 9, 9),
    ])
    .unwrap();
    assert_eq!(registry.all_celebrations().len(), 2);
}

#[test]
fn rejects_class_outside_table() {
    assert_malformed(
        FeastRegistry::new(vec![fixed("Zero", Rank::Solemnity, 0, 1, 2)]),
        "Zero",
    );
    assert_malformed(
        FeastRegistry::new(vec![fixed("Fourteen", Rank::Weekday, 14, 1, 2)]),
        "Fourteen",
    );
}

#[test]
fn rejects_rank_class_mismatch() {
    assert_malformed(
        FeastRegistry::new(vec![fixed("Memorial Solemnity", Rank::ObligatoryMemorial, 3, 5, 5)]),
        "Memorial Solemnity",
    );
    assert_malformed(
        FeastRegistry::new(vec![fixed("Low Feast", Rank::Feast, 12, 5, 5)]),
        "Low Feast",
    );
}

#[test]
fn rejects_impossible_fixed_date() {
    assert_malformed(
        FeastRegistry::new(vec![fixed("Thirtieth", Rank::Feast, 7, 2, 30)]),
        "Thirtieth",
    );
    // February 29 exists in leap years and is accepted.
    assert!(FeastRegistry::new(vec![fixed("Leap", Rank::OptionalMemorial, 12, 2, 29)]).is_ok());
}

#[test]
fn rejects_easter_offset_out_of_range() {
    let entry = Celebration::new(
        "Far Away",
        Rank::ObligatoryMemorial,
        10,
        Color::White,
        Subject::Other,
        Proper::Sanctorale,
        Position::EasterOffset(120),
    );
    assert_malformed(FeastRegistry::new(vec![entry]), "Far Away");
}

#[test]
fn rejects_sunday_off_sunday() {
    let entry = Celebration::new(
        "Not a Sunday",
        Rank::Sunday,
        6,
        Color::Green,
        Subject::Lord,
        Proper::Temporale,
        Position::EasterOffset(10),
    );
    assert_malformed(FeastRegistry::new(vec![entry]), "Not a Sunday");
}

#[test]
fn rejects_seasonal_entries_and_duplicates() {
    let seasonal = Celebration::new(
        "Generated",
        Rank::Weekday,
        13,
        Color::Green,
        Subject::Lord,
        Proper::Temporale,
        Position::Seasonal,
    );
    assert_malformed(FeastRegistry::new(vec![seasonal]), "Generated");

    assert_malformed(
        FeastRegistry::new(vec![
            fixed("Twice", Rank::OptionalMemorial, 12, 4, 4),
            fixed("Twice", Rank::OptionalMemorial, 12, 4, 5),
        ]),
        "Twice",
    );
}

#[test]
fn movable_rules_are_accepted() {
    let entry = Celebration::new(
        "Kingship",
        Rank::Solemnity,
        3,
        Color::White,
        Subject::Lord,
        Proper::Temporale,
        Position::Movable(MovableRule::ChristTheKing),
    );
    assert!(FeastRegistry::new(vec![entry]).is_ok());
}
