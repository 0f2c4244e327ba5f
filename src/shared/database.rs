use std::env;
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Connection pool over the transactional store the recompute pipeline
/// relies on. Every repository borrows connections from here; single-row
/// updates and `conn.transaction` blocks provide the atomicity guarantees.
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new() -> Result<Self, AppError> {
        let database_url = Self::database_url_from_env()?;
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        // Mutations arrive one request at a time, so the pool tracks the
        // host's parallelism rather than some expected request volume.
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        let max_size = std::cmp::min(cpu_count * 2, 20) as u32;
        let min_idle = std::cmp::max(2, max_size / 4);

        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(min_idle))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database pool ready (max_size: {}, min_idle: {})",
            max_size,
            min_idle
        );

        Ok(Self { pool })
    }

    /// Wrap an already-built pool. Lets tests point the repositories at a
    /// scratch database without going through the env lookup.
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Apply any embedded migrations that have not run yet.
    pub fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;

        if !applied.is_empty() {
            log_info!("Applied {} pending database migrations", applied.len());
        }

        Ok(())
    }

    fn database_url_from_env() -> Result<String, AppError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::DatabaseError(
                "DATABASE_URL must start with postgres:// or postgresql://".to_string(),
            ));
        }

        // Host only; credentials stay out of the log
        log_info!(
            "Connecting to database at {}",
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        Ok(database_url)
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }
}
