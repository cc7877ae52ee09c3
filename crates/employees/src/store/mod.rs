//! Storage backends for employee records.
//!
//! - [`MongoStore`]: a MongoDB collection
//! - [`PgStore`]: a PostgreSQL table, migrated on connect
//! - [`MemoryStore`]: a shared in-process list, mostly for tests

mod memory;
mod mongo;
mod postgres;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::Employee;

pub use memory::MemoryStore;
pub use mongo::{DEFAULT_DATABASE, MongoStore};
pub use postgres::PgStore;

/// Name of the collection (or table) employee records live in.
pub const EMPLOYEES_COLLECTION: &str = "employees";

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Name of the collection this store writes to.
    fn collection(&self) -> &str;

    /// Removes every record in the collection.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Inserts `employees` in order and returns how many were written.
    async fn insert_many(&self, employees: &[Employee]) -> Result<usize, StoreError>;

    /// Returns every record in the collection.
    async fn all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Clears the collection, then inserts `employees`.
    ///
    /// Backends that can make the two steps atomic override this.
    async fn replace_all(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        self.clear().await?;
        self.insert_many(employees).await
    }
}

/// Opens the store matching the scheme of `url`.
pub async fn connect(url: &str) -> Result<Box<dyn EmployeeStore>, StoreError> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme).unwrap_or_default();
    debug!("Opening {scheme} store");

    match scheme {
        "mongodb" | "mongodb+srv" => Ok(Box::new(MongoStore::connect(url).await?)),
        "postgres" | "postgresql" => Ok(Box::new(PgStore::connect(url).await?)),
        "memory" => Ok(Box::new(MemoryStore::new())),
        _ => Err(StoreError::UnsupportedUrl(scheme.to_string())),
    }
}
