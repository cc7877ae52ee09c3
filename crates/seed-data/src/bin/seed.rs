//! Default seed script - resets the employees collection
//!
//! Run with:
//! ```
//! DATABASE_URL=mongodb://localhost:27017/test cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let store = employees::connect(&config.database_url).await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(store);
    seeder.seed().await?;
    let seeded = seeder.verify().await?;

    // Summary output
    tracing::info!("Seed completed!");
    for employee in &seeded {
        tracing::info!("  {} {}", employee.first_name, employee.last_name);
    }

    Ok(())
}
