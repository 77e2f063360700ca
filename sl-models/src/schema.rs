//! Local database schema definitions and table creation.

use rusqlite::Connection;
use sl_core::error::{SlError, SlResult};
use tracing::info;

/// Create all local tables and indexes if they do not exist.
pub fn create_tables(conn: &Connection) -> SlResult<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| SlError::Database(format!("failed to create schema: {e}")))?;
    info!("local database schema verified");
    Ok(())
}

/// Drop all tables (used for local state wipe).
pub fn drop_tables(conn: &Connection) -> SlResult<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS credentials;
         DROP TABLE IF EXISTS schema_version;",
    )
    .map_err(|e| SlError::Database(format!("failed to drop tables: {e}")))?;
    Ok(())
}

/// Complete SQL schema for the local database.
const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

-- Secure credential store (key-value)
CREATE TABLE IF NOT EXISTS credentials (
    key     TEXT PRIMARY KEY,
    value   TEXT NOT NULL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_drop_and_recreate() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        drop_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }
}
