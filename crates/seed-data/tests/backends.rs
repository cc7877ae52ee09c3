//! Seeding against real MongoDB and PostgreSQL servers.
//!
//! To run the backend tests, you need:
//! 1. `MONGODB_URL` pointing at a MongoDB server
//! 2. `DATABASE_URL` pointing at a PostgreSQL database
//!
//! Run with: `MONGODB_URL=mongodb://localhost:27017/test DATABASE_URL=postgres://... cargo nextest run -p seed-data backends`
//!
//! Note: the MongoDB tests use their own collections, but the PostgreSQL
//! test resets the shared `employees` table, so only point it at a
//! development database.

use std::env;

use employees::{DEFAULT_DATABASE, Employee, EmployeeStore, MongoStore, PgStore, StoreError};
use mongodb::{Client, options::ClientOptions};
use seed_data::prelude::*;

/// Get a MongoDB store on a per-test collection, skipping tests if MONGODB_URL is not set.
async fn get_mongo_store(test_name: &str) -> Option<MongoStore> {
    let url = match env::var("MONGODB_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: MONGODB_URL not set");
            return None;
        }
    };

    let options = match ClientOptions::parse(&url).await {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Skipping test: Invalid MONGODB_URL: {e}");
            return None;
        }
    };
    let database = options
        .default_database
        .clone()
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
    let client = Client::with_options(options).ok()?;

    let collection = format!("employees_{test_name}_{}", std::process::id());
    Some(MongoStore::new(&client.database(&database), &collection))
}

/// Get a PostgreSQL store, skipping tests if DATABASE_URL is not set.
async fn get_pg_store() -> Option<PgStore> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgStore::connect(&database_url).await {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

#[tokio::test]
async fn mongo_seed_replaces_existing_documents() {
    let Some(store) = get_mongo_store("replace").await else {
        return;
    };

    store
        .insert_many(&[Employee::new("Ada", "Lovelace")])
        .await
        .expect("Failed to insert unrelated document");

    let seeder = Seeder::new(Box::new(store.clone()));
    assert_eq!(seeder.seed().await.unwrap(), 3);
    assert_eq!(seeder.seed().await.unwrap(), 3);

    assert_eq!(store.all().await.unwrap(), fixtures());

    let _ = store.clear().await;
}

#[tokio::test]
async fn mongo_preserves_field_values() {
    let Some(store) = get_mongo_store("values").await else {
        return;
    };

    let odd = vec![Employee::new("  Zoë ", "O'Brien-Ünal\t")];
    store.clear().await.unwrap();
    store.insert_many(&odd).await.unwrap();

    assert_eq!(store.all().await.unwrap(), odd);

    let _ = store.clear().await;
}

#[tokio::test]
async fn mongo_unreachable_server_fails_seed() {
    let store = MongoStore::connect(
        "mongodb://127.0.0.1:1/test?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
    )
    .await
    .expect("Client creation is lazy and should not fail");

    let result = Seeder::new(Box::new(store)).seed().await;

    assert!(matches!(result, Err(SeedError::Store(StoreError::Mongo(_)))));
}

#[tokio::test]
async fn postgres_seed_and_atomic_replace() {
    let Some(store) = get_pg_store().await else {
        return;
    };

    store
        .insert_many(&[Employee::new("Ada", "Lovelace")])
        .await
        .expect("Failed to insert unrelated row");

    let seeder = Seeder::new(Box::new(store.clone()));
    assert_eq!(seeder.seed().await.unwrap(), 3);
    assert_eq!(seeder.seed().await.unwrap(), 3);
    assert_eq!(store.all().await.unwrap(), fixtures());

    // PostgreSQL rejects NUL in text, so the insert half of the replace fails
    // and the transaction keeps the seeded rows.
    let result = store
        .replace_all(&[Employee::new("Bad\0Name", "Row")])
        .await;
    assert!(matches!(result, Err(StoreError::Postgres(_))));
    assert_eq!(store.all().await.unwrap(), fixtures());

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(row.0, 3);
}
