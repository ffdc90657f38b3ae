use serde_json::Value;

use crate::result::ValidationResult;

/// Number of leading characters left visible when masking a secret.
const VISIBLE_PREFIX: usize = 5;

/// Blanks out the verbose provider response when the caller opted out of it.
///
/// When `include_response` is false and the result carries a non-empty
/// response, the response is overwritten with an empty string. One-way and
/// idempotent: a later call with `include_response = true` does not restore
/// the original value.
#[must_use]
pub fn apply_response_visibility(mut result: ValidationResult, include_response: bool) -> ValidationResult {
    if !include_response && !is_empty_response(&result.data.validate.response) {
        result.data.validate.response = Value::String(String::new());
    }
    result
}

/// Returns `true` when a response value carries no information: JSON null,
/// an empty string, an empty object, or an empty array.
#[must_use]
pub fn is_empty_response(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Masks a secret for display, keeping the first five characters.
///
/// Secrets of five characters or fewer are returned unchanged.
#[must_use]
pub fn redact_secret(secret: &str) -> String {
    let length = secret.chars().count();
    if length <= VISIBLE_PREFIX {
        return secret.to_string();
    }

    let mut masked: String = secret.chars().take(VISIBLE_PREFIX).collect();
    masked.extend(std::iter::repeat_n('*', length - VISIBLE_PREFIX));
    masked
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::result::{ValidationData, ValidationProcess};
    use crate::state::SecretState;

    fn result_with_response(response: Value) -> ValidationResult {
        ValidationResult::new(
            200,
            "How2Validate",
            ValidationData {
                validate: ValidationProcess {
                    state: SecretState::Active,
                    message: "The provided secret 'npm_access_token' is currently active and operational.".to_string(),
                    response,
                    report: "email@how2validate.com".to_string(),
                },
                provider: "npm".to_string(),
                services: "npm_access_token".to_string(),
            },
        )
    }

    #[test]
    fn clears_response_when_detail_not_requested() {
        let result = result_with_response(json!({"user": "octocat"}));
        let redacted = apply_response_visibility(result, false);
        assert_eq!(redacted.data.validate.response, Value::String(String::new()));
    }

    #[test]
    fn keeps_response_when_detail_requested() {
        let result = result_with_response(json!({"user": "octocat"}));
        let kept = apply_response_visibility(result, true);
        assert_eq!(kept.data.validate.response, json!({"user": "octocat"}));
    }

    #[test]
    fn redaction_is_idempotent() {
        let result = result_with_response(json!({"user": "octocat"}));
        let once = apply_response_visibility(result, false);
        let twice = apply_response_visibility(once.clone(), false);
        assert_eq!(once.data.validate.response, twice.data.validate.response);
    }

    #[test]
    fn redaction_is_one_way() {
        let result = result_with_response(json!({"user": "octocat"}));
        let redacted = apply_response_visibility(result, false);
        let reapplied = apply_response_visibility(redacted, true);

        // A later opt-in must not resurrect the original payload.
        assert_eq!(reapplied.data.validate.response, Value::String(String::new()));
    }

    #[test]
    fn empty_placeholder_is_left_untouched() {
        let result = result_with_response(json!({}));
        let unchanged = apply_response_visibility(result, false);
        assert_eq!(unchanged.data.validate.response, json!({}));
    }

    #[test]
    fn emptiness_covers_null_string_object_and_array() {
        assert!(is_empty_response(&Value::Null));
        assert!(is_empty_response(&json!("")));
        assert!(is_empty_response(&json!({})));
        assert!(is_empty_response(&json!([])));
        assert!(!is_empty_response(&json!("No additional data.")));
        assert!(!is_empty_response(&json!(0)));
        assert!(!is_empty_response(&json!(false)));
    }

    #[test]
    fn long_secrets_keep_only_the_prefix() {
        assert_eq!(redact_secret("npm_abcdefgh"), "npm_a*******");
    }

    #[test]
    fn short_secrets_pass_through() {
        assert_eq!(redact_secret("abc"), "abc");
        assert_eq!(redact_secret("abcde"), "abcde");
        assert_eq!(redact_secret(""), "");
    }
}
