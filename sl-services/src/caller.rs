//! Caller identity and authorization policy.
//!
//! Callable functions receive the authenticated caller (if any) from the
//! transport layer. Role checks go through one policy function so every
//! admin-gated function enforces the same rule.

use sl_core::error::{SlError, SlResult};
use sl_models::User;

use crate::store::RecordStore;

/// The authenticated identity attached to a function call.
#[derive(Debug, Clone)]
pub struct Caller {
    pub uid: String,
    pub email: Option<String>,
}

impl Caller {
    /// Create a caller identity.
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
        }
    }
}

/// Require that a caller identity is present.
pub fn require_caller(caller: Option<&Caller>) -> SlResult<&Caller> {
    caller.ok_or_else(|| SlError::Unauthenticated("no caller identity on request".into()))
}

/// Require that the caller's stored role is `admin`.
///
/// Loads the caller's user record and checks the role field. A caller
/// whose record is missing cannot be verified and is denied.
pub async fn require_admin(store: &dyn RecordStore, caller: &Caller) -> SlResult<User> {
    let record = store
        .user(&caller.uid)
        .await
        .map_err(|e| e.or_internal("failed to load caller record"))?;

    match record {
        Some(user) if user.is_admin() => Ok(user),
        Some(_) => Err(SlError::PermissionDenied(
            "admin role required for this operation".into(),
        )),
        None => Err(SlError::PermissionDenied(
            "caller has no user record".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_caller_missing() {
        let err = require_caller(None).unwrap_err();
        assert_eq!(err.kind(), "unauthenticated");
    }

    #[test]
    fn test_require_caller_present() {
        let caller = Caller::new("u1", None);
        assert_eq!(require_caller(Some(&caller)).unwrap().uid, "u1");
    }
}
