//! Fixture data for the employees collection.
//!
//! The [`Seeder`] resets the collection to the records returned by
//! [`fixtures`], against whichever backend the database URL points at.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let seeder = Seeder::new(employees::connect(&config.database_url).await?);
//! seeder.seed().await?;
//! seeder.verify().await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub use employees::{Employee, EmployeeStore};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::fixtures::{EMPLOYEE_NAMES, fixtures};
    pub use crate::{Employee, EmployeeStore};
}
