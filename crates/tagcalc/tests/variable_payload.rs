//! Tests for building variable tables from the variable source payload

#![cfg(feature = "serde")]

use tagcalc::prelude::*;
use tagcalc::Error;

const PAYLOAD: &str = r#"[
    {"id": 1, "name": "revenue", "value": 120.5},
    {"id": 2, "name": "cost", "value": 80},
    {"id": 3, "name": "tax_rate", "value": 0.2}
]"#;

/// A decoded payload can be used for calculation directly
#[test]
fn test_payload_to_calculation() {
    let table = VariableTable::from_json(PAYLOAD).unwrap();
    assert_eq!(table.len(), 3);

    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["revenue", "cost", "tax_rate"]);

    let result = calculate("([revenue] - [cost]) * (1 - [tax_rate])", &table).unwrap();
    assert!((result - 32.4).abs() < 1e-9);
}

/// Invalid payloads never produce a partial table
#[test]
fn test_invalid_payloads() {
    assert!(matches!(
        VariableTable::from_json(r#"[{"id": 1, "name": "a", "value": "x"}]"#),
        Err(Error::Payload(_))
    ));
    assert_eq!(
        VariableTable::from_json(
            r#"[{"id": 1, "name": "a", "value": 1}, {"id": 2, "name": "a", "value": 2}]"#
        )
        .unwrap_err(),
        Error::DuplicateName("a".into())
    );
    assert_eq!(
        VariableTable::from_json(r#"[{"id": 1, "name": "gross margin", "value": 1}]"#)
            .unwrap_err(),
        Error::InvalidName("gross margin".into())
    );
}

/// An empty payload is an empty table
#[test]
fn test_empty_payload() {
    let table = VariableTable::from_json("[]").unwrap();
    assert!(table.is_empty());
    assert_eq!(calculate("1 + 1", &table).unwrap(), 2.0);
}
