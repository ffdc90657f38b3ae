use serde_json::{Map, Value};

use crate::redact::is_empty_response;
use crate::result::ValidationProcess;
use crate::state::{SecretState, StateTokenError};

/// Resolves a raw state token into a process description.
///
/// The token must be one of the canonical `"Active"` / `"InActive"` strings;
/// anything else is a contract violation by the calling validator and fails
/// with [`StateTokenError`]. Callers holding a [`SecretState`] already should
/// use [`status_message`] directly.
pub fn resolve(service: &str, state_token: &str, payload: Option<Value>) -> Result<ValidationProcess, StateTokenError> {
    let state: SecretState = state_token.parse()?;
    Ok(status_message(service, state, payload))
}

/// Builds the human-readable process description for a resolved state.
///
/// The message reads `The provided secret '<service>' is currently
/// <phrase>.`; the response is the payload when it carries information,
/// otherwise the empty-object placeholder. No side effects.
#[must_use]
pub fn status_message(service: &str, state: SecretState, payload: Option<Value>) -> ValidationProcess {
    let message = format!("The provided secret '{service}' is currently {}.", state.phrase());

    let response = match payload {
        Some(value) if !is_empty_response(&value) => value,
        _ => Value::Object(Map::new()),
    };

    ValidationProcess::new(state, message, response)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn active_message_contains_only_the_active_phrase() {
        let process =
            resolve("npm_access_token", "Active", Some(json!({"ok": true}))).expect("canonical token should resolve");

        assert_eq!(process.state, SecretState::Active);
        assert_eq!(
            process.message,
            "The provided secret 'npm_access_token' is currently active and operational."
        );
        assert!(!process.message.contains("inactive and not operational"));
    }

    #[test]
    fn inactive_message_contains_only_the_inactive_phrase() {
        let process = resolve("npm_access_token", "InActive", None).expect("canonical token should resolve");

        assert_eq!(process.state, SecretState::Inactive);
        assert_eq!(
            process.message,
            "The provided secret 'npm_access_token' is currently inactive and not operational."
        );
    }

    #[test]
    fn non_canonical_tokens_are_contract_violations() {
        for token in ["", "ACTIVE", "unknown"] {
            let err = resolve("npm_access_token", token, None);
            assert!(err.is_err(), "token '{token}' should violate the contract");
        }
    }

    #[test]
    fn payload_is_carried_through_verbatim() {
        let process = status_message("slack_api_token", SecretState::Active, Some(json!({"team": "acme"})));
        assert_eq!(process.response, json!({"team": "acme"}));
    }

    #[test]
    fn missing_payload_becomes_the_empty_object_placeholder() {
        let process = status_message("slack_api_token", SecretState::Inactive, None);
        assert_eq!(process.response, json!({}));
    }

    #[test]
    fn empty_string_payload_becomes_the_empty_object_placeholder() {
        let process = status_message("slack_api_token", SecretState::Active, Some(json!("")));
        assert_eq!(process.response, json!({}));
    }

    #[test]
    fn report_is_left_for_the_builder_to_fill() {
        let process = status_message("npm_access_token", SecretState::Active, None);
        assert!(process.report.is_empty());
    }
}
