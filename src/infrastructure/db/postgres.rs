use std::{str::FromStr, time::Duration};

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, warn};

use crate::settings::AppConfig;

const MAX_CONNECT_RETRIES: u32 = 5;

/// Connect options with a per-connection `statement_timeout`, so a stalled
/// query fails instead of holding the request.
pub fn connect_options(config: &AppConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let statement_timeout_ms = config.db_statement_timeout_secs * 1000;

    Ok(PgConnectOptions::from_str(&config.database_url)?
        .application_name(&config.name)
        .options([("statement_timeout", statement_timeout_ms.to_string())]))
}

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
}

/// Connects with exponential back-off. When every attempt fails the pool is
/// still returned, connecting lazily, so the service starts and each
/// operation reports the store as unavailable.
pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match pool_options(config).connect_with(options.clone()).await {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if retry_count < MAX_CONNECT_RETRIES => {
                retry_count += 1;
                info!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, MAX_CONNECT_RETRIES, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => {
                warn!("Database unreachable after {} attempts: {}. Continuing with a lazy pool.", retry_count + 1, e);
                return Ok(pool_options(config).connect_lazy_with(options));
            }
        }
    }
}

/// A pool that opens connections on first use.
pub fn lazy_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(config).connect_lazy_with(connect_options(config)?))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied.");
    Ok(())
}
