use super::*;
use crate::constants::{GOALS_RESOURCE, TRANSACTIONS_RESOURCE};
use crate::errors::Error;
use crate::goals::{FinancialGoal, FinancialGoalPayload};
use crate::transactions::{Transaction, TransactionPayload};
use std::sync::Arc;

fn transaction_service(cache: Arc<QueryCache>) -> EntityService<Transaction> {
    EntityService::new(Arc::new(MemoryRepository::<Transaction>::new()), cache)
}

fn tx_payload(description: &str, date: &str) -> TransactionPayload {
    serde_json::from_value(serde_json::json!({
        "description": description,
        "amount": "25",
        "type": "expense",
        "category": "Shopping",
        "date": date,
    }))
    .unwrap()
}

#[tokio::test]
async fn test_create_then_get_returns_input_plus_identity() {
    let service = transaction_service(Arc::new(QueryCache::new()));
    let created = service
        .create(tx_payload("Shoes", "2024-04-02"))
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    let fetched = service.get(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.description, "Shoes");
    assert_eq!(fetched.amount, "25.00");
}

#[tokio::test]
async fn test_empty_update_leaves_entity_unchanged() {
    let service = transaction_service(Arc::new(QueryCache::new()));
    let created = service
        .create(tx_payload("Shoes", "2024-04-02"))
        .await
        .unwrap();

    let updated = service
        .update(&created.id, TransactionPayload::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let service = transaction_service(Arc::new(QueryCache::new()));
    assert!(service
        .update("missing", TransactionPayload::default())
        .await
        .unwrap()
        .is_none());
    assert!(!service.delete("missing").await.unwrap());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = transaction_service(Arc::new(QueryCache::new()));
    let created = service
        .create(tx_payload("Shoes", "2024-04-02"))
        .await
        .unwrap();

    assert!(service.delete(&created.id).await.unwrap());
    assert!(service.get(&created.id).unwrap().is_none());
    assert!(!service.delete(&created.id).await.unwrap());
}

#[tokio::test]
async fn test_list_is_sorted_by_date_descending() {
    let service = transaction_service(Arc::new(QueryCache::new()));
    service.create(tx_payload("mid", "2024-02-01")).await.unwrap();
    service.create(tx_payload("late", "2024-03-01")).await.unwrap();
    service.create(tx_payload("early", "2023-01-01")).await.unwrap();

    let listed = service.list().unwrap();
    let names: Vec<_> = listed.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["late", "mid", "early"]);
}

#[tokio::test]
async fn test_invalid_payload_is_rejected_without_touching_cache() {
    let cache = Arc::new(QueryCache::new());
    let service = transaction_service(cache.clone());
    service.list().unwrap();
    assert!(cache.is_cached(TRANSACTIONS_RESOURCE));

    let result = service.create(TransactionPayload::default()).await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(cache.is_cached(TRANSACTIONS_RESOURCE));
}

#[tokio::test]
async fn test_mutation_invalidates_only_its_resource() {
    let cache = Arc::new(QueryCache::new());
    let transactions = transaction_service(cache.clone());
    let goals: EntityService<FinancialGoal> =
        EntityService::new(Arc::new(MemoryRepository::new()), cache.clone());

    assert!(transactions.list().unwrap().is_empty());
    assert!(goals.list().unwrap().is_empty());

    transactions
        .create(tx_payload("Lunch", "2024-04-02"))
        .await
        .unwrap();

    assert!(!cache.is_cached(TRANSACTIONS_RESOURCE));
    assert!(cache.is_cached(GOALS_RESOURCE));
    assert_eq!(transactions.list().unwrap().len(), 1);

    let goal_payload: FinancialGoalPayload =
        serde_json::from_str(r#"{"name":"Bike","targetAmount":"800"}"#).unwrap();
    goals.create(goal_payload).await.unwrap();
    assert!(!cache.is_cached(GOALS_RESOURCE));
    assert!(cache.is_cached(TRANSACTIONS_RESOURCE));
}

#[tokio::test]
async fn test_failed_delete_keeps_cache() {
    let cache = Arc::new(QueryCache::new());
    let service = transaction_service(cache.clone());
    service.list().unwrap();
    assert!(!service.delete("nope").await.unwrap());
    assert!(cache.is_cached(TRANSACTIONS_RESOURCE));
}
