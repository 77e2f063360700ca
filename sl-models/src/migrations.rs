//! Versioned local database migrations.
//!
//! Migrations run sequentially from the current stored version to the latest.

use rusqlite::Connection;
use sl_core::constants::DB_SCHEMA_VERSION;
use sl_core::error::{SlError, SlResult};
use tracing::info;

/// Run all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> SlResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version >= DB_SCHEMA_VERSION {
        return Ok(());
    }

    info!("running migrations from version {current_version} to {DB_SCHEMA_VERSION}");

    for version in (current_version + 1)..=DB_SCHEMA_VERSION {
        run_migration(conn, version)?;
    }

    set_schema_version(conn, DB_SCHEMA_VERSION)?;
    Ok(())
}

/// Get the current schema version from the database.
fn get_schema_version(conn: &Connection) -> SlResult<i32> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .map_err(|e| SlError::Database(e.to_string()))?;

    if count == 0 {
        conn.execute("INSERT INTO schema_version (version) VALUES (0)", [])
            .map_err(|e| SlError::Database(e.to_string()))?;
        return Ok(0);
    }

    conn.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
        row.get(0)
    })
    .map_err(|e| SlError::Database(e.to_string()))
}

/// Store the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> SlResult<()> {
    conn.execute("UPDATE schema_version SET version = ?1", [version])
        .map_err(|e| SlError::Database(e.to_string()))?;
    Ok(())
}

/// Apply a single migration step.
fn run_migration(_conn: &Connection, version: i32) -> SlResult<()> {
    match version {
        // Version 1 is the baseline schema created by schema::create_tables.
        1 => {
            info!("applied migration 1 (baseline)");
            Ok(())
        }
        other => Err(SlError::Migration(format!("unknown schema version {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        schema::create_tables(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), DB_SCHEMA_VERSION);

        // Re-running is a no-op.
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), DB_SCHEMA_VERSION);
    }
}
