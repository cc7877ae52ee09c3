//! Employee records and the stores they are seeded into.
//!
//! Every backend implements [`EmployeeStore`]. Use [`connect`] to open the
//! backend that matches a database URL:
//!
//! ```rust,ignore
//! let store = employees::connect("mongodb://localhost:27017/test").await?;
//! store.replace_all(&[Employee::new("John", "Doe")]).await?;
//! ```

pub mod errors;
pub mod models;
pub mod store;

pub use errors::StoreError;
pub use models::Employee;
pub use store::{DEFAULT_DATABASE, EMPLOYEES_COLLECTION, EmployeeStore, MemoryStore, MongoStore, PgStore, connect};
