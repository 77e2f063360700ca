//! Secure credential store.
//!
//! A small key-value table holding tokens and identifiers that must not
//! live in the plain-text config file: the backend auth token, the AI API
//! key, and the device push token. Each value is stored as TEXT with
//! upsert semantics.

use rusqlite::{params, Connection};
use sl_core::error::{SlError, SlResult};
use std::collections::HashMap;

/// Credential key-value store backed by the `credentials` table.
pub struct Credentials;

impl Credentials {
    /// Get a value for a key.
    pub fn get(conn: &Connection, key: &str) -> SlResult<Option<String>> {
        match conn.query_row(
            "SELECT value FROM credentials WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        ) {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SlError::Database(e.to_string())),
        }
    }

    /// Set a value for a key (upsert).
    pub fn set(conn: &Connection, key: &str, value: &str) -> SlResult<()> {
        conn.execute(
            "INSERT INTO credentials (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|e| SlError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a credential by key.
    pub fn delete(conn: &Connection, key: &str) -> SlResult<bool> {
        let changed = conn
            .execute("DELETE FROM credentials WHERE key = ?1", [key])
            .map_err(|e| SlError::Database(e.to_string()))?;
        Ok(changed > 0)
    }

    /// Get all stored credential keys and values.
    pub fn get_all(conn: &Connection) -> SlResult<HashMap<String, String>> {
        let mut stmt = conn
            .prepare("SELECT key, value FROM credentials")
            .map_err(|e| SlError::Database(e.to_string()))?;

        let map = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| SlError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(map)
    }

    /// Clear all stored credentials.
    pub fn clear(conn: &Connection) -> SlResult<()> {
        conn.execute("DELETE FROM credentials", [])
            .map_err(|e| SlError::Database(e.to_string()))?;
        Ok(())
    }
}

/// Well-known credential keys.
pub mod keys {
    /// Bearer token for the platform backend.
    pub const BACKEND_AUTH_TOKEN: &str = "backendAuthToken";
    /// API key for the AI provider.
    pub const AI_API_KEY: &str = "aiApiKey";
    /// This device's push token.
    pub const DEVICE_PUSH_TOKEN: &str = "devicePushToken";
    /// Signed-in account uid.
    pub const ACCOUNT_UID: &str = "accountUid";
    /// Signed-in account email.
    pub const ACCOUNT_EMAIL: &str = "accountEmail";

    /// All well-known keys, in display order.
    pub const ALL: &[&str] = &[
        BACKEND_AUTH_TOKEN,
        AI_API_KEY,
        DEVICE_PUSH_TOKEN,
        ACCOUNT_UID,
        ACCOUNT_EMAIL,
    ];
}
