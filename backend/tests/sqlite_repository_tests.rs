//! Tests for the SQLite repository: persistence, ordering and deletion.

#![cfg(feature = "sqlite-repo")]

use calculator_rust::db::repository::CalculationRepository;
use calculator_rust::db::{SqliteConfig, SqliteRepository};
use calculator_rust::models::{CalculationId, NewCalculation, Operation};

fn file_config(dir: &tempfile::TempDir) -> SqliteConfig {
    let path = dir.path().join("calculator.db");
    SqliteConfig::with_url(path.to_string_lossy().into_owned())
}

#[tokio::test]
async fn test_create_assigns_identity_and_timestamp() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let calc = repo
        .create(NewCalculation::new(Operation::Add, 3.0, 4.0, 7.0))
        .await
        .unwrap();

    assert!(calc.id.value() > 0);
    assert!(calc.created_at.timestamp() > 0);
    assert_eq!(calc.operation, Operation::Add);
    assert_eq!(calc.result, 7.0);
    assert_eq!(repo.get(calc.id).await.unwrap(), calc);
}

#[tokio::test]
async fn test_list_empty_store() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_orders_most_recent_first() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let mut created = Vec::new();
    for (op, result) in [
        (Operation::Add, 3.0),
        (Operation::Subtract, -1.0),
        (Operation::Multiply, 2.0),
    ] {
        created.push(
            repo.create(NewCalculation::new(op, 1.0, 2.0, result))
                .await
                .unwrap(),
        );
    }

    let listed = repo.list().await.unwrap();
    created.reverse();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let err = repo.get(CalculationId::new(42)).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.message(), "Calculation not found");
    assert_eq!(err.context().entity_id.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_delete_counts_rows() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let calc = repo
        .create(NewCalculation::new(Operation::Divide, 1.0, 4.0, 0.25))
        .await
        .unwrap();

    assert_eq!(repo.delete(calc.id).await.unwrap(), 1);
    assert_eq!(repo.delete(calc.id).await.unwrap(), 0);
    assert!(repo.get(calc.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let first = repo
        .create(NewCalculation::new(Operation::Add, 1.0, 1.0, 2.0))
        .await
        .unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo
        .create(NewCalculation::new(Operation::Add, 1.0, 1.0, 2.0))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let calc = {
        let repo = SqliteRepository::new(config.clone()).unwrap();
        repo.create(NewCalculation::new(Operation::Multiply, 6.0, 7.0, 42.0))
            .await
            .unwrap()
    };

    // Migrations must be idempotent on an existing file.
    let reopened = SqliteRepository::new(config).unwrap();
    assert_eq!(reopened.get(calc.id).await.unwrap(), calc);
    assert_eq!(reopened.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sqlite_url_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("via-url.db");
    let config = SqliteConfig::with_url(format!("sqlite:///{}", path.display()));

    let repo = SqliteRepository::new(config).unwrap();
    repo.create(NewCalculation::new(Operation::Subtract, 9.0, 4.0, 5.0))
        .await
        .unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_concurrent_creates_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let repo = std::sync::Arc::new(SqliteRepository::new(file_config(&dir)).unwrap());

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let a = i as f64;
            repo.create(NewCalculation::new(Operation::Add, a, 1.0, a + 1.0))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.list().await.unwrap().len(), 16);
}

#[tokio::test]
async fn test_infinite_results_round_trip() {
    let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
    let calc = repo
        .create(NewCalculation::new(
            Operation::Multiply,
            1e200,
            1e200,
            f64::INFINITY,
        ))
        .await
        .unwrap();

    assert_eq!(repo.get(calc.id).await.unwrap().result, f64::INFINITY);
}
