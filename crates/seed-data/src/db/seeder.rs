//! Resets the employees collection to the fixture records.

use employees::{Employee, EmployeeStore, StoreError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fixtures::fixtures;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Collection holds {found:?}, expected {expected:?}")]
    Mismatch {
        expected: Vec<Employee>,
        found: Vec<Employee>,
    },
}

/// Database seeder for the employees collection.
pub struct Seeder {
    store: Box<dyn EmployeeStore>,
}

impl Seeder {
    /// Creates a new seeder writing through `store`.
    pub fn new(store: Box<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Clears the collection and inserts the fixture records.
    ///
    /// Returns the number of records inserted. Store errors are returned
    /// unchanged; a failure can leave the collection empty or partially
    /// written unless the backend makes the replacement atomic.
    pub async fn seed(&self) -> Result<usize, SeedError> {
        let employees = fixtures();
        let collection = self.store.collection();

        info!("Clearing {collection} and seeding {} records...", employees.len());
        let inserted = self.store.replace_all(&employees).await?;

        info!("Seeded {inserted} records into {collection}");
        Ok(inserted)
    }

    /// Checks that the collection holds exactly the fixture records, in any order.
    pub async fn verify(&self) -> Result<Vec<Employee>, SeedError> {
        let found = self.store.all().await?;
        let mut expected = fixtures();

        let mut sorted = found.clone();
        sorted.sort();
        expected.sort();

        if sorted != expected {
            warn!(
                "{} holds {} records that do not match the fixtures",
                self.store.collection(),
                found.len()
            );
            return Err(SeedError::Mismatch {
                expected: fixtures(),
                found,
            });
        }

        for employee in &found {
            debug!("  {} {}", employee.first_name, employee.last_name);
        }
        Ok(found)
    }

    /// Returns the underlying store for advanced usage.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}
