//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "SiteLink";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default outbound API timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 15_000;

/// Default push gateway endpoint.
pub const DEFAULT_PUSH_GATEWAY_URL: &str = "https://exp.host/--/api/v2/push/send";

/// Prefix carried by every valid device push token.
pub const PUSH_TOKEN_PREFIX: &str = "ExponentPushToken[";

/// Default notification sound.
pub const DEFAULT_NOTIFICATION_SOUND: &str = "default";

/// Default notification delivery priority.
pub const DEFAULT_NOTIFICATION_PRIORITY: &str = "high";

/// Default Android notification channel.
pub const DEFAULT_NOTIFICATION_CHANNEL: &str = "default";

/// Minimum accepted password length for admin password changes.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default AI provider base URL.
pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default audio transcription model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Default text generation model.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

/// Default speech synthesis model.
pub const DEFAULT_SPEECH_MODEL: &str = "tts-1";

/// Default speech synthesis voice.
pub const DEFAULT_SPEECH_VOICE: &str = "alloy";

/// Local database schema version.
pub const DB_SCHEMA_VERSION: i32 = 1;

/// Audit log action name constants.
pub mod actions {
    pub const PASSWORD_CHANGE: &str = "password_change";
    pub const WELCOME_EMAIL: &str = "welcome_email";

    /// All privileged actions recorded in the audit log.
    pub const ALL: &[&str] = &[PASSWORD_CHANGE, WELCOME_EMAIL];
}
