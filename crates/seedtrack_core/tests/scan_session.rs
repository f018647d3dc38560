use chrono::{NaiveDate, TimeZone, Utc};
use seedtrack_core::{
    CatalogIndex, Locale, OrderScanSession, ProductCode, ScanRejected, Species,
};
use uuid::Uuid;

fn catalog() -> CatalogIndex {
    CatalogIndex::load(vec![
        Species::new(
            Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000001").unwrap(),
            "Rose trémière",
            "Hollyhock",
            "Stockrose",
            "Alcea rosea",
        ),
        Species::new(
            Uuid::parse_str("b2c3d4e5-0000-4000-8000-000000000002").unwrap(),
            "Tomate",
            "Tomato",
            "Tomate",
            "Solanum lycopersicum",
        ),
    ])
}

fn session(code: &str) -> OrderScanSession {
    OrderScanSession::new(ProductCode::parse(code).unwrap(), Locale::Fr)
}

#[test]
fn scans_are_numbered_until_kit_is_complete() {
    let catalog = catalog();
    let mut session = session("508002-MIX1-002");
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
    assert_eq!(session.remaining(), 2);

    let first = session.scan_at("S2024-05-12_a1b2c3d4", &catalog, at).unwrap();
    assert_eq!(first.scan_number, 1);
    assert_eq!(first.quantity, 1);
    assert_eq!(first.scanned_at, at);
    assert_eq!(first.sowing_date, NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
    assert_eq!(first.species.full_name, "Rose trémière (Alcea rosea)");

    let second = session.scan_at("S24-04-01_B2C3D4E5", &catalog, at).unwrap();
    assert_eq!(second.scan_number, 2);
    assert_eq!(second.species.name, "Tomate");

    assert!(session.is_complete());
    assert_eq!(session.remaining(), 0);
    assert_eq!(
        session.scan_at("S2024-05-12_a1b2c3d4", &catalog, at),
        Err(ScanRejected::QuotaReached { expected: 2 })
    );
    assert_eq!(session.scans().len(), 2);
}

#[test]
fn unresolved_scan_leaves_session_unchanged() {
    let catalog = catalog();
    let mut session = session("508002-MIX1-003");

    assert_eq!(
        session.scan("S2024-05-12_ffffffff", &catalog),
        Err(ScanRejected::NotFound("S2024-05-12_ffffffff".to_string()))
    );
    assert_eq!(
        session.scan("garbage", &catalog),
        Err(ScanRejected::NotFound("garbage".to_string()))
    );
    assert!(session.scans().is_empty());
    assert_eq!(session.remaining(), 3);

    assert_eq!(session.scan("S2024-05-12_a1b2c3d4", &catalog).unwrap().scan_number, 1);
}

#[test]
fn zero_quantity_kit_is_complete_from_the_start() {
    let catalog = catalog();
    let mut session = session("508002-EMPTY-000");
    assert!(session.is_complete());
    assert_eq!(
        session.scan("S2024-05-12_a1b2c3d4", &catalog),
        Err(ScanRejected::QuotaReached { expected: 0 })
    );
    assert_eq!(session.product().kit_type, "EMPTY");
}
