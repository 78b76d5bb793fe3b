//! Database connection and initialization.

use std::path::Path;

use sqlx::{Pool, Sqlite};
use tracing::info;

pub use remoteuac_core::db::DatabaseError;

/// `SQLite`-backed store for install requests.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open or create a database at the given path.
    pub async fn open(path: &Path) -> Result<Self, DatabaseError> {
        let pool = remoteuac_core::db::open_pool(path).await?;
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let pool = remoteuac_core::db::open_pool_in_memory().await?;
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Run database migrations.
    async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;

        info!("Database migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
