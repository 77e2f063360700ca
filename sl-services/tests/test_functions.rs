//! Integration tests for the admin and assistant callable functions:
//! authorization order, field validation, audit logging, and error kinds.

mod common;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use sl_core::constants::actions;
use sl_models::Role;
use sl_services::accounts::{AccountFunctions, ChangePasswordRequest, WelcomeEmailRequest};
use sl_services::assistant::{
    AssistantFunctions, GenerateTextRequest, SynthesizeSpeechRequest, TranscribeRequest,
};
use sl_services::caller::Caller;

use common::{caller_for, user, FakeAuth, FakeModel, MemoryStore};

fn accounts(store: Arc<MemoryStore>, auth: Arc<FakeAuth>) -> AccountFunctions {
    AccountFunctions::new(store, auth)
}

fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert_user(user("admin-1", Role::Admin, None));
    store.insert_user(user("client-1", Role::Client, None));
    store.insert_user(user("target-1", Role::Contractor, None));
    store
}

fn password_request(target: &str, password: &str) -> ChangePasswordRequest {
    ChangePasswordRequest {
        target_uid: target.into(),
        new_password: password.into(),
    }
}

// ---- change_password ----

#[tokio::test]
async fn change_password_requires_caller() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let err = functions
        .change_password(None, &password_request("target-1", "hunter22"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "unauthenticated");
}

#[tokio::test]
async fn change_password_rejects_non_admin_even_for_valid_target() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("client-1");
    let err = functions
        .change_password(Some(&caller), &password_request("target-1", "hunter22"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "permission-denied");
}

#[tokio::test]
async fn change_password_rejects_unknown_caller_record() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = Caller::new("ghost", None);
    let err = functions
        .change_password(Some(&caller), &password_request("target-1", "hunter22"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "permission-denied");
}

#[tokio::test]
async fn change_password_rejects_short_password() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("admin-1");
    let err = functions
        .change_password(Some(&caller), &password_request("target-1", "12345"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid-argument");
}

#[tokio::test]
async fn change_password_rejects_unknown_target() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("admin-1");
    let err = functions
        .change_password(Some(&caller), &password_request("nobody", "hunter22"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "not-found");
}

#[tokio::test]
async fn change_password_updates_auth_and_appends_audit() {
    let store = seeded_store();
    let auth = Arc::new(FakeAuth::new());
    let functions = accounts(store.clone(), auth.clone());
    let caller = caller_for("admin-1");

    let response = functions
        .change_password(Some(&caller), &password_request("target-1", "hunter22"))
        .await
        .unwrap();
    assert!(response.success);

    // Exactly one auth mutation.
    assert_eq!(auth.updates(), vec![("target-1".into(), "hunter22".into())]);

    // Exactly one audit entry, attributing actor and target.
    let entries = store.audit_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, actions::PASSWORD_CHANGE);
    assert_eq!(entries[0].actor_id, "admin-1");
    assert_eq!(entries[0].target_id.as_deref(), Some("target-1"));
}

// ---- send_welcome_email ----

#[tokio::test]
async fn welcome_email_rejects_non_admin() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("client-1");
    let err = functions
        .send_welcome_email(
            Some(&caller),
            &WelcomeEmailRequest {
                email: "new@example.com".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "permission-denied");
}

#[tokio::test]
async fn welcome_email_rejects_malformed_address() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("admin-1");
    let err = functions
        .send_welcome_email(
            Some(&caller),
            &WelcomeEmailRequest {
                email: "not-an-email".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid-argument");
}

#[tokio::test]
async fn welcome_email_unknown_account_is_not_found() {
    let functions = accounts(seeded_store(), Arc::new(FakeAuth::new()));
    let caller = caller_for("admin-1");
    let err = functions
        .send_welcome_email(
            Some(&caller),
            &WelcomeEmailRequest {
                email: "unknown@example.com".into(),
            },
        )
        .await
        .unwrap_err();
    // NotFound from the auth directory passes through unchanged.
    assert_eq!(err.kind(), "not-found");
}

#[tokio::test]
async fn welcome_email_returns_link_and_appends_audit() {
    let store = seeded_store();
    let auth = Arc::new(FakeAuth::new());
    auth.add_known_email("new@example.com");
    let functions = accounts(store.clone(), auth);
    let caller = caller_for("admin-1");

    let response = functions
        .send_welcome_email(
            Some(&caller),
            &WelcomeEmailRequest {
                email: "new@example.com".into(),
            },
        )
        .await
        .unwrap();
    assert!(response.success);
    assert!(response.link.contains("new@example.com"));

    let entries = store.audit_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, actions::WELCOME_EMAIL);
    assert_eq!(entries[0].target_email.as_deref(), Some("new@example.com"));
}

// ---- assistant functions ----

#[tokio::test]
async fn transcribe_requires_caller() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let err = functions
        .transcribe(
            None,
            &TranscribeRequest {
                audio: BASE64.encode(b"audio"),
                language: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "unauthenticated");
}

#[tokio::test]
async fn transcribe_rejects_missing_audio() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let caller = caller_for("u1");
    let err = functions
        .transcribe(
            Some(&caller),
            &TranscribeRequest {
                audio: "  ".into(),
                language: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid-argument");
}

#[tokio::test]
async fn transcribe_rejects_invalid_base64() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let caller = caller_for("u1");
    let err = functions
        .transcribe(
            Some(&caller),
            &TranscribeRequest {
                audio: "!!not base64!!".into(),
                language: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid-argument");
}

#[tokio::test]
async fn transcribe_returns_text() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let caller = caller_for("u1");
    let response = functions
        .transcribe(
            Some(&caller),
            &TranscribeRequest {
                audio: BASE64.encode(b"five!"),
                language: Some("en".into()),
            },
        )
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.text, "transcript of 5 bytes");
}

#[tokio::test]
async fn generate_text_rejects_empty_prompt() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let caller = caller_for("u1");
    let err = functions
        .generate_text(
            Some(&caller),
            &GenerateTextRequest {
                prompt: "".into(),
                instructions: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid-argument");
}

#[tokio::test]
async fn provider_failure_surfaces_as_internal() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::failing()));
    let caller = caller_for("u1");
    let err = functions
        .generate_text(
            Some(&caller),
            &GenerateTextRequest {
                prompt: "hello".into(),
                instructions: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "internal");
}

#[tokio::test]
async fn synthesize_speech_round_trips_audio() {
    let functions = AssistantFunctions::new(Arc::new(FakeModel::new()));
    let caller = caller_for("u1");
    let response = functions
        .synthesize_speech(
            Some(&caller),
            &SynthesizeSpeechRequest {
                text: "read this aloud".into(),
                voice: None,
            },
        )
        .await
        .unwrap();
    assert!(response.success);
    let bytes = BASE64.decode(response.audio).unwrap();
    assert_eq!(bytes, b"read this aloud");
}
