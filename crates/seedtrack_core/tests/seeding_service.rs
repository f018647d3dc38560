use chrono::NaiveDate;
use seedtrack_core::{
    decode, sorted_by_sowing_date, CatalogIndex, SeedingError, SeedingRow, SeedingService, Species,
};
use uuid::Uuid;

fn tomato_id() -> Uuid {
    Uuid::parse_str("b2c3d4e5-0000-4000-8000-000000000002").unwrap()
}

fn catalog() -> CatalogIndex {
    CatalogIndex::load(vec![
        Species::new(
            Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000001").unwrap(),
            "Rose trémière",
            "Hollyhock",
            "Stockrose",
            "Alcea rosea",
        ),
        Species::new(tomato_id(), "Tomate", "Tomato", "Tomate", "Solanum lycopersicum"),
    ])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(date: &str, name: &str, quantity: &str) -> SeedingRow {
    SeedingRow {
        date: Some(date.to_string()),
        plant_name: Some(name.to_string()),
        quantity: Some(quantity.to_string()),
        notes: None,
    }
}

#[test]
fn register_builds_entry_with_scannable_token() {
    let catalog = catalog();
    let service = SeedingService::new(&catalog);

    let entry = service
        .register(date(2024, 5, 12), tomato_id(), 40, Some("serre 2".to_string()))
        .unwrap();

    assert!(!entry.id.is_nil());
    assert_eq!(entry.identity_token().unwrap().as_str(), "S2024-05-12_b2c3d4e5");
    assert_eq!(
        entry.label_payload(),
        "PLANT:b2c3d4e5-0000-4000-8000-000000000002|QTY:40|DATE:2024-05-12"
    );

    let decoded = decode(entry.identity_token().unwrap().as_str()).unwrap();
    assert_eq!(decoded.sowing_date, entry.sowing_date);
}

#[test]
fn register_rejects_unknown_species_and_zero_quantity() {
    let catalog = catalog();
    let service = SeedingService::new(&catalog);
    let unknown = Uuid::new_v4();

    assert_eq!(
        service.register(date(2024, 5, 12), unknown, 1, None),
        Err(SeedingError::UnknownSpecies(unknown))
    );
    assert_eq!(
        service.register(date(2024, 5, 12), tomato_id(), 0, None),
        Err(SeedingError::ZeroQuantity)
    );
}

#[test]
fn register_rejects_sowing_years_that_cannot_be_labelled() {
    let catalog = catalog();
    let service = SeedingService::new(&catalog);

    assert_eq!(
        service.register(date(10000, 1, 1), tomato_id(), 5, None),
        Err(SeedingError::UnencodableDate(date(10000, 1, 1)))
    );
    assert!(service
        .register(date(9999, 12, 31), tomato_id(), 5, None)
        .is_ok());
}

#[test]
fn import_rows_skips_unusable_rows() {
    let catalog = catalog();
    let service = SeedingService::new(&catalog);
    let mut with_notes = row("12/05/2024", "tomate", "25");
    with_notes.notes = Some("semis tardif".to_string());

    let rows = vec![
        with_notes,
        row("2024-04-01", "Rose", " 10 "),
        row("", "Tomate", "5"),
        SeedingRow {
            plant_name: None,
            ..row("2024-04-01", "", "5")
        },
        row("not a date", "Tomate", "5"),
        row("2024-04-01", "Tomate", "many"),
        row("2024-04-01", "Tomate", "0"),
        row("2024-04-01", "Cactus", "5"),
    ];

    let import = service.import_rows(&rows);
    assert_eq!(import.skipped_rows, 6);
    assert_eq!(import.entries.len(), 2);

    assert_eq!(import.entries[0].species_id, tomato_id());
    assert_eq!(import.entries[0].sowing_date, date(2024, 5, 12));
    assert_eq!(import.entries[0].quantity, 25);
    assert_eq!(import.entries[0].notes.as_deref(), Some("semis tardif"));
    assert_eq!(import.entries[1].quantity, 10);
}

#[test]
fn entries_sort_oldest_first() {
    let catalog = catalog();
    let service = SeedingService::new(&catalog);
    let late = service.register(date(2024, 6, 1), tomato_id(), 1, None).unwrap();
    let early = service.register(date(2024, 3, 1), tomato_id(), 1, None).unwrap();
    let entries = vec![late.clone(), early.clone()];

    let sorted = sorted_by_sowing_date(&entries);
    assert_eq!(sorted, vec![&early, &late]);
}
