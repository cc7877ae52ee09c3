//! Configuration for the seed binary.

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/test";

/// Configuration for seeding operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Where the employees collection lives. The scheme picks the backend.
    pub database_url: String,
}

impl SeedConfig {
    /// Reads `DATABASE_URL`, falling back to [`DEFAULT_DATABASE_URL`].
    pub fn from_env() -> Self {
        Self::from_url(std::env::var("DATABASE_URL").ok())
    }

    fn from_url(database_url: Option<String>) -> Self {
        match database_url {
            Some(database_url) if !database_url.trim().is_empty() => Self { database_url },
            _ => Self::default(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}
