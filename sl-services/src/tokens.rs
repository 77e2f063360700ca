//! Push-token collection.
//!
//! Looks up each recipient's user record and extracts the stored push
//! token, if any. Lookups run concurrently; a missing record, a failed
//! lookup, or a missing token excludes that user without aborting the
//! batch.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::store::RecordStore;

/// Collect the push tokens for a set of user ids.
///
/// Returns tokens in recipient order. Never fails: users that cannot be
/// resolved are skipped.
pub async fn collect_tokens(store: &dyn RecordStore, user_ids: &[String]) -> Vec<String> {
    let lookups = user_ids.iter().map(|id| async move {
        match store.user(id).await {
            Ok(Some(user)) => match user.push_token {
                Some(token) if !token.is_empty() => Some(token),
                _ => {
                    debug!("user {id} has no push token, skipping");
                    None
                }
            },
            Ok(None) => {
                debug!("user {id} not found, skipping");
                None
            }
            Err(e) => {
                warn!("failed to load user {id}: {e}");
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}
