use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::doc,
    options::ClientOptions,
};
use tracing::info;

use super::{EMPLOYEES_COLLECTION, EmployeeStore};
use crate::errors::StoreError;
use crate::models::Employee;

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "test";

/// Employee collection in MongoDB.
///
/// Clearing drops the collection and inserting is an ordered `insertMany`.
/// The two steps are not atomic.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<Employee>,
}

impl MongoStore {
    /// Uses the `name` collection of `database`.
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            collection: database.collection(name),
        }
    }

    /// Connects to the database named in `url`, or [`DEFAULT_DATABASE`].
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(url).await?;
        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let client = Client::with_options(options)?;

        info!("Using MongoDB database {database}");
        Ok(Self::new(&client.database(&database), EMPLOYEES_COLLECTION))
    }
}

#[async_trait]
impl EmployeeStore for MongoStore {
    fn collection(&self) -> &str {
        self.collection.name()
    }

    async fn clear(&self) -> Result<(), StoreError> {
        // Dropping a missing collection is not an error.
        self.collection.drop().await?;
        Ok(())
    }

    async fn insert_many(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        if employees.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(employees).await?;
        Ok(result.inserted_ids.len())
    }

    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let employees = cursor.try_collect().await?;
        Ok(employees)
    }
}
