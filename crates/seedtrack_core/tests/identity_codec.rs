use chrono::NaiveDate;
use seedtrack_core::{decode, encode, DecodedToken, MalformedToken, UnencodableDate};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn encode_emits_marker_date_and_short_id() {
    let id = Uuid::parse_str("a1b2c3d4-e5f6-4789-8abc-def012345678").unwrap();
    let token = encode(date(2024, 5, 12), &id).unwrap();
    assert_eq!(token.as_str(), "S2024-05-12_a1b2c3d4");
}

#[test]
fn decode_of_encode_returns_date_and_truncated_id() {
    let dates = [date(2024, 5, 12), date(1999, 12, 31), date(2028, 2, 29)];
    for sowing_date in dates {
        for _ in 0..5 {
            let id = Uuid::new_v4();
            let decoded = decode(encode(sowing_date, &id).unwrap().as_str()).unwrap();
            assert_eq!(
                decoded,
                DecodedToken {
                    sowing_date,
                    species_fragment: id.to_string()[..8].to_string(),
                }
            );
        }
    }
}

#[test]
fn decode_accepts_legacy_two_digit_year() {
    let decoded = decode("S24-05-12_a1b2c3d4").unwrap();
    assert_eq!(decoded.sowing_date, date(2024, 5, 12));
    assert_eq!(decoded.species_fragment, "a1b2c3d4");
}

#[test]
fn decode_trims_spaces_around_legacy_date() {
    let decoded = decode("S 24-05-12_a1b2c3d4").unwrap();
    assert_eq!(decoded.sowing_date, date(2024, 5, 12));

    let decoded = decode("S24-05-12 _a1b2c3d4").unwrap();
    assert_eq!(decoded.sowing_date, date(2024, 5, 12));
}

#[test]
fn encode_round_trips_at_four_digit_year_bounds() {
    let id = Uuid::parse_str("a1b2c3d4-e5f6-4789-8abc-def012345678").unwrap();
    for sowing_date in [date(0, 1, 1), date(1, 1, 1), date(9999, 12, 31)] {
        let token = encode(sowing_date, &id).unwrap();
        assert_eq!(decode(token.as_str()).unwrap().sowing_date, sowing_date);
    }
    assert_eq!(
        encode(date(1, 3, 4), &id).unwrap().as_str(),
        "S0001-03-04_a1b2c3d4"
    );
}

#[test]
fn encode_rejects_years_outside_four_digits() {
    let id = Uuid::new_v4();
    for sowing_date in [date(10000, 1, 1), date(-1, 12, 31), date(-2024, 5, 12)] {
        assert_eq!(encode(sowing_date, &id), Err(UnencodableDate(sowing_date)));
    }
}

#[test]
fn decode_keeps_full_identifier_fragment_as_is() {
    let decoded = decode("S2024-05-12_A1B2C3D4-E5F6-4789-8ABC-DEF012345678").unwrap();
    assert_eq!(
        decoded.species_fragment,
        "A1B2C3D4-E5F6-4789-8ABC-DEF012345678"
    );
}

#[test]
fn decode_rejects_structural_violations() {
    assert_eq!(decode(""), Err(MalformedToken::Empty));
    assert_eq!(
        decode("X2024-05-12_a1b2c3d4"),
        Err(MalformedToken::MissingMarker)
    );
    assert_eq!(
        decode("s2024-05-12_a1b2c3d4"),
        Err(MalformedToken::MissingMarker)
    );
    assert_eq!(decode("S"), Err(MalformedToken::DelimiterCount { parts: 1 }));
    assert_eq!(
        decode("S2024-05-12a1b2c3d4"),
        Err(MalformedToken::DelimiterCount { parts: 1 })
    );
    assert_eq!(
        decode("S2024-05-12_a1b2_c3d4"),
        Err(MalformedToken::DelimiterCount { parts: 3 })
    );
    assert_eq!(
        decode("S2024-13-40_a1b2c3d4"),
        Err(MalformedToken::InvalidDate("2024-13-40".to_string()))
    );
    assert_eq!(
        decode("Syesterday_a1b2c3d4"),
        Err(MalformedToken::InvalidDate("yesterday".to_string()))
    );
    assert_eq!(
        decode("S2024-05-12_a1b2"),
        Err(MalformedToken::FragmentTooShort {
            fragment: "a1b2".to_string()
        })
    );
}

#[test]
fn decode_never_panics_on_odd_input() {
    for token in ["S_", "S__", "Sé-ü-ß_abcdefgh", "S24-05-1é_abcdefgh", "S\u{0}_\u{0}"] {
        assert!(decode(token).is_err(), "expected malformed: {token:?}");
    }
}

#[test]
fn token_serializes_as_plain_string() {
    let id = Uuid::parse_str("a1b2c3d4-e5f6-4789-8abc-def012345678").unwrap();
    let token = encode(date(2024, 5, 12), &id).unwrap();
    assert_eq!(
        serde_json::to_value(&token).unwrap(),
        serde_json::json!("S2024-05-12_a1b2c3d4")
    );
}
