use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single employee record.
///
/// The storage layer assigns the identifier, so it is not part of the model.
/// Serialized field names are `firstName` and `lastName`; the PostgreSQL
/// columns keep the Rust names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
