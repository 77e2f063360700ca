//! Device push-token format validation.
//!
//! The push gateway only accepts provider-issued tokens of the form
//! `ExponentPushToken[...]`. Anything else is dropped before submission.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"^ExponentPushToken\[[^\[\]]+\]$").expect("token pattern is valid");
}

/// Whether a candidate token matches the provider-prefix pattern.
pub fn is_valid_push_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        assert!(is_valid_push_token("ExponentPushToken[AbC123-xyz]"));
    }

    #[test]
    fn test_missing_prefix() {
        assert!(!is_valid_push_token("AbC123-xyz"));
        assert!(!is_valid_push_token("FcmToken[AbC123]"));
    }

    #[test]
    fn test_unterminated_token() {
        assert!(!is_valid_push_token("ExponentPushToken[AbC123"));
    }

    #[test]
    fn test_empty_payload() {
        assert!(!is_valid_push_token("ExponentPushToken[]"));
        assert!(!is_valid_push_token(""));
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(!is_valid_push_token("ExponentPushToken[AbC]extra"));
    }
}
