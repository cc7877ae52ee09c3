//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] resets the employees collection through any
//! [`EmployeeStore`](employees::EmployeeStore) backend.

mod seeder;

pub use seeder::{SeedError, Seeder};
