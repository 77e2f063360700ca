//! CLI command implementations and shared helpers.

pub mod status;
pub mod notify;
pub mod admin;
pub mod assistant;
pub mod creds;

use std::sync::Arc;

use sl_api::ApiClient;
use sl_core::config::AppConfig;
use sl_core::error::{SlError, SlResult};
use sl_models::models::credential::keys;
use sl_models::{Credentials, Database};
use sl_services::Caller;

/// Open the local database at the configured path.
pub fn open_database(config: &AppConfig) -> SlResult<Database> {
    let path = config.effective_db_path()?;
    Database::init(&path, &config.storage)
}

/// Build the backend API client. The config-file token wins; otherwise
/// the stored credential is used.
pub fn build_api_client(config: &AppConfig, db: &Database) -> SlResult<Arc<ApiClient>> {
    let mut backend = config.backend.clone();
    if backend.auth_token.is_empty() {
        let conn = db.conn()?;
        if let Some(token) = Credentials::get(&conn, keys::BACKEND_AUTH_TOKEN)? {
            backend.auth_token = token;
        }
    }
    Ok(Arc::new(ApiClient::new(&backend)?))
}

/// Resolve the caller identity from the stored account credentials.
pub fn stored_caller(db: &Database) -> SlResult<Caller> {
    let conn = db.conn()?;
    let uid = Credentials::get(&conn, keys::ACCOUNT_UID)?.ok_or_else(|| {
        SlError::Unauthenticated(
            "no stored account identity; run `sitelink creds set accountUid <uid>`".into(),
        )
    })?;
    let email = Credentials::get(&conn, keys::ACCOUNT_EMAIL)?;
    Ok(Caller::new(uid, email))
}
