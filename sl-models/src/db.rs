//! Local database initialization, connection pooling, and lifecycle.
//!
//! Uses SQLite in WAL mode with r2d2 connection pooling. The local database
//! holds only client-side state (the credential store); all domain records
//! live in the platform backend.

use std::path::Path;
use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tracing::{info, warn};

use sl_core::config::StorageConfig;
use sl_core::error::{SlError, SlResult};

use crate::migrations;
use crate::schema;

/// Type alias for the SQLite connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Database wrapper providing initialization, pooling, and lifecycle management.
#[derive(Clone)]
pub struct Database {
    pool: Arc<DbPool>,
}

impl Database {
    /// Initialize the database at the given path with the provided configuration.
    ///
    /// Creates the database file and parent directories if needed, enables
    /// WAL mode, sets up pooling, creates the schema, and runs migrations.
    pub fn init(db_path: &Path, config: &StorageConfig) -> SlResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("initializing local database at {}", db_path.display());

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_customizer(Box::new(ConnectionCustomizer {
                wal_mode: config.wal_mode,
            }))
            .build(manager)
            .map_err(|e| SlError::Pool(e.to_string()))?;

        let db = Self {
            pool: Arc::new(pool),
        };

        {
            let conn = db.conn()?;
            schema::create_tables(&conn)?;
            migrations::run_migrations(&conn)?;
        }

        info!("local database initialized");
        Ok(db)
    }

    /// Get a connection from the pool.
    pub fn conn(&self) -> SlResult<r2d2::PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| SlError::Pool(e.to_string()))
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Wipe all local state by dropping and recreating the schema.
    pub fn wipe(&self) -> SlResult<()> {
        warn!("wiping local database - stored credentials will be lost");
        let conn = self.conn()?;
        schema::drop_tables(&conn)?;
        schema::create_tables(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(())
    }
}

/// r2d2 connection customizer that applies PRAGMA settings.
#[derive(Debug)]
struct ConnectionCustomizer {
    wal_mode: bool,
}

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        if self.wal_mode {
            conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        }

        conn.execute_batch(
            "PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;
             PRAGMA foreign_keys=ON;",
        )?;

        Ok(())
    }
}
