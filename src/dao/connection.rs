//! Database connection bootstrap: connect with retries, run migrations, expose a ping.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tokio::time::sleep;
use tracing::warn;

use super::migration::Migrator;
use super::storage::{StorageError, StorageResult};

struct RetryPolicy;

impl RetryPolicy {
    const MAX_ATTEMPTS: u32 = 10;
    const INITIAL_DELAY_MS: u64 = 250;

    fn initial_delay() -> Duration {
        Duration::from_millis(Self::INITIAL_DELAY_MS)
    }

    fn next_delay(current: Duration) -> Duration {
        (current * 2).min(Duration::from_secs(5))
    }
}

/// Open a connection to the database, retrying the initial liveness probe with backoff.
pub async fn establish_connection(url: &str) -> StorageResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .map_err(|source| StorageError::Unavailable {
            message: "connect to database".into(),
            source,
        })?;

    let mut attempts = 0;
    let mut delay = RetryPolicy::initial_delay();

    loop {
        match conn.ping().await {
            Ok(()) => break,
            Err(err) => {
                attempts += 1;
                if attempts >= RetryPolicy::MAX_ATTEMPTS {
                    return Err(StorageError::Unavailable {
                        message: format!("initial ping failed after {attempts} attempts"),
                        source: err,
                    });
                }
                warn!(attempts, error = %err, "database ping failed; retrying");
                sleep(delay).await;
                delay = RetryPolicy::next_delay(delay);
            }
        }
    }

    Ok(conn)
}

/// Bring the schema up to date by applying any pending migrations.
pub async fn ensure_schema(conn: &DatabaseConnection) -> StorageResult<()> {
    Migrator::up(conn, None)
        .await
        .map_err(|source| StorageError::from_db("apply migrations", source))
}
