use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder, postgres::PgPoolOptions};
use tracing::info;

use super::{EMPLOYEES_COLLECTION, EmployeeStore};
use crate::errors::StoreError;
use crate::models::Employee;

/// Employee table in PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing pool. The `employees` table must already exist.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `database_url` and applies the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Connected to PostgreSQL");

        Ok(Self::new(pool))
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM employees")
        .execute(executor)
        .await?;
    Ok(())
}

async fn insert_batch<'e>(
    executor: impl PgExecutor<'e>,
    employees: &[Employee],
) -> Result<usize, StoreError> {
    if employees.is_empty() {
        return Ok(0);
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO employees (first_name, last_name) ");
    builder.push_values(employees, |mut row, employee| {
        row.push_bind(employee.first_name.as_str())
            .push_bind(employee.last_name.as_str());
    });

    let result = builder.build().execute(executor).await?;
    Ok(result.rows_affected() as usize)
}

#[async_trait]
impl EmployeeStore for PgStore {
    fn collection(&self) -> &str {
        EMPLOYEES_COLLECTION
    }

    async fn clear(&self) -> Result<(), StoreError> {
        delete_all(&self.pool).await
    }

    async fn insert_many(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        insert_batch(&self.pool, employees).await
    }

    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as(
            r#"
            SELECT first_name, last_name
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Runs the clear and the insert in one transaction, so a failed insert
    /// leaves the previous records in place.
    async fn replace_all(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;

        delete_all(&mut *tx).await?;
        let inserted = insert_batch(&mut *tx, employees).await?;

        tx.commit().await?;
        Ok(inserted)
    }
}
