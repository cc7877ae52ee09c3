use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{EMPLOYEES_COLLECTION, EmployeeStore};
use crate::errors::StoreError;
use crate::models::Employee;

#[derive(Debug, Default)]
struct State {
    records: Vec<Employee>,
    unavailable: bool,
}

/// In-process store. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `records`.
    pub fn with_records(records: Vec<Employee>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                records,
                unavailable: false,
            })),
        }
    }

    /// Makes every later operation fail with [`StoreError::Unavailable`].
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    fn collection(&self) -> &str {
        EMPLOYEES_COLLECTION
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(StoreError::Unavailable);
        }
        state.records.clear();
        Ok(())
    }

    async fn insert_many(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(StoreError::Unavailable);
        }
        state.records.extend_from_slice(employees);
        Ok(employees.len())
    }

    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        let state = self.state.lock().await;
        if state.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(state.records.clone())
    }

    async fn replace_all(&self, employees: &[Employee]) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(StoreError::Unavailable);
        }
        state.records = employees.to_vec();
        Ok(employees.len())
    }
}
