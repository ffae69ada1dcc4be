use super::transactions_model::*;
use crate::errors::Error;
use crate::store::Entity;
use chrono::{NaiveDate, NaiveDateTime, Utc};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn payload(json: &str) -> TransactionPayload {
    serde_json::from_str(json).unwrap()
}

fn tx(id: &str, date: NaiveDateTime) -> Transaction {
    Transaction::from_new(
        id.to_string(),
        date,
        NewTransaction {
            description: format!("tx {}", id),
            amount: "10.00".to_string(),
            transaction_type: TransactionType::Expense,
            category: "Food & Dining".to_string(),
            date,
        },
    )
}

#[test]
fn test_transaction_type_serialization() {
    assert_eq!(
        serde_json::to_string(&TransactionType::Income).unwrap(),
        "\"income\""
    );
    assert_eq!(
        serde_json::from_str::<TransactionType>("\"expense\"").unwrap(),
        TransactionType::Expense
    );
    assert!("Expense".parse::<TransactionType>().is_err());
}

#[test]
fn test_transaction_serializes_type_field() {
    let json = serde_json::to_value(tx("t1", at(2024, 3, 1))).unwrap();
    assert_eq!(json["type"], "expense");
    assert_eq!(json["amount"], "10.00");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("transactionType").is_none());
}

#[test]
fn test_validate_new_accepts_numbers_and_dates() {
    let new = Transaction::validate_new(payload(
        r#"{"description":"Salary","amount":2500,"type":"income","category":"Salary","date":"2024-05-01T00:00:00.000Z"}"#,
    ))
    .unwrap();
    assert_eq!(new.amount, "2500.00");
    assert_eq!(new.transaction_type, TransactionType::Income);
    assert_eq!(new.date, at(2024, 5, 1));
}

#[test]
fn test_validate_new_defaults_date_to_now() {
    let before = Utc::now().naive_utc();
    let new = Transaction::validate_new(payload(
        r#"{"description":"Coffee","amount":"3.5","type":"expense","category":"Food & Dining"}"#,
    ))
    .unwrap();
    assert!(new.date >= before);
    assert_eq!(new.amount, "3.50");
}

#[test]
fn test_validate_new_rejects_bad_type_and_amount() {
    let Err(Error::Validation(err)) = Transaction::validate_new(payload(
        r#"{"description":"x","amount":"-4","type":"refund","category":"Other"}"#,
    )) else {
        panic!("expected validation error");
    };
    let fields: Vec<_> = err.field_errors().into_iter().map(|f| f.field).collect();
    assert_eq!(fields, vec!["amount", "type"]);
}

#[test]
fn test_validate_update_allows_partial() {
    let update = Transaction::validate_update(payload(r#"{"category":"Travel"}"#)).unwrap();
    assert_eq!(update.category.as_deref(), Some("Travel"));
    assert!(update.amount.is_none());

    let mut t = tx("t1", at(2024, 3, 1));
    t.merge(update);
    assert_eq!(t.category, "Travel");
    assert_eq!(t.amount, "10.00");
}

#[test]
fn test_listing_is_newest_first_and_stable() {
    let mut items = vec![
        tx("a", at(2024, 1, 10)),
        tx("b", at(2024, 3, 1)),
        tx("c", at(2024, 1, 10)),
        tx("d", at(2023, 12, 31)),
    ];
    Transaction::order_listing(&mut items);
    let ids: Vec<_> = items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c", "d"]);
}
