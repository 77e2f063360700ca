//! Admin account management functions.
//!
//! Both functions are gated on the caller's stored role being `admin`,
//! perform exactly one mutation against the auth provider, and append
//! exactly one audit log entry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use sl_core::constants::{actions, MIN_PASSWORD_LENGTH};
use sl_core::error::{SlError, SlResult};
use sl_models::AuditLogEntry;

use crate::auth::AuthDirectory;
use crate::caller::{require_admin, require_caller, Caller};
use crate::store::RecordStore;

/// Request to change another user's password.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "targetUid")]
    pub target_uid: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Response to a password change.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
}

/// Request to send a welcome email to an invited account.
#[derive(Debug, Clone, Deserialize)]
pub struct WelcomeEmailRequest {
    pub email: String,
}

/// Response carrying the generated password-setup link.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeEmailResponse {
    pub success: bool,
    pub link: String,
}

/// Admin account management functions.
pub struct AccountFunctions {
    store: Arc<dyn RecordStore>,
    auth: Arc<dyn AuthDirectory>,
}

impl AccountFunctions {
    /// Create the function set with its injected dependencies.
    pub fn new(store: Arc<dyn RecordStore>, auth: Arc<dyn AuthDirectory>) -> Self {
        Self { store, auth }
    }

    /// Change another user's password.
    ///
    /// Checks run in order: caller present, caller is admin, fields valid,
    /// target exists. Then one auth mutation and one audit append.
    pub async fn change_password(
        &self,
        caller: Option<&Caller>,
        request: &ChangePasswordRequest,
    ) -> SlResult<ChangePasswordResponse> {
        let caller = require_caller(caller)?;
        let admin = require_admin(self.store.as_ref(), caller).await?;

        if request.target_uid.trim().is_empty() {
            return Err(SlError::InvalidArgument("targetUid is required".into()));
        }
        if request.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SlError::InvalidArgument(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let target = self
            .store
            .user(&request.target_uid)
            .await
            .map_err(|e| e.or_internal("target user lookup failed"))?
            .ok_or_else(|| {
                SlError::NotFound(format!("user {} does not exist", request.target_uid))
            })?;

        self.auth
            .update_password(&target.id, &request.new_password)
            .await
            .map_err(|e| e.or_internal("password update failed"))?;

        let entry = AuditLogEntry::new(actions::PASSWORD_CHANGE, &admin.id, admin.email.clone())
            .with_target(Some(target.id.clone()), target.email.clone());
        self.store
            .append_audit(&entry)
            .await
            .map_err(|e| e.or_internal("audit append failed"))?;

        info!("password changed for {} by {}", target.id, admin.id);
        Ok(ChangePasswordResponse { success: true })
    }

    /// Generate a password-setup link for an invited account.
    ///
    /// The platform's mail infrastructure sends the actual email; this
    /// function returns the link it would carry.
    pub async fn send_welcome_email(
        &self,
        caller: Option<&Caller>,
        request: &WelcomeEmailRequest,
    ) -> SlResult<WelcomeEmailResponse> {
        let caller = require_caller(caller)?;
        let admin = require_admin(self.store.as_ref(), caller).await?;

        let email = request.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(SlError::InvalidArgument(
                "a valid email address is required".into(),
            ));
        }

        let link = self
            .auth
            .password_reset_link(email)
            .await
            .map_err(|e| e.or_internal("reset link generation failed"))?;

        let entry = AuditLogEntry::new(actions::WELCOME_EMAIL, &admin.id, admin.email.clone())
            .with_target(None, Some(email.to_string()));
        self.store
            .append_audit(&entry)
            .await
            .map_err(|e| e.or_internal("audit append failed"))?;

        info!("welcome email link generated for {email} by {}", admin.id);
        Ok(WelcomeEmailResponse {
            success: true,
            link,
        })
    }
}
