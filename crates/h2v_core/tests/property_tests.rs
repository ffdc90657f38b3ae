//! Property-based tests for `h2v_core`.
//!
//! These tests verify invariants that should hold for all inputs,
//! catching edge cases that hand-written tests might miss.

use h2v_core::prelude::*;
use h2v_core::redact_secret;
use proptest::prelude::*;
use serde_json::json;

fn build(provider: &str, service: &str, report: Option<&str>, outcome: &ProviderCallOutcome) -> ValidationResult {
    let config = AppConfig::default();
    let ctx = BuildContext {
        report,
        quiet: true,
        ..BuildContext::new(provider, service)
    };
    OutcomeBuilder::new(&config).from_outcome(&ctx, outcome)
}

proptest! {
    /// Every result serializes to JSON and back without losing the five
    /// top-level fields or the nested identity fields.
    #[test]
    fn envelope_round_trips_for_arbitrary_identities(
        provider in "\\PC{1,32}",
        service in "\\PC{1,32}",
        body in "\\PC{0,64}",
    ) {
        let outcome = ProviderCallOutcome::Success { status: 200, body };
        let result = build(&provider, &service, None, &outcome);

        let encoded = serde_json::to_string(&result);
        prop_assert!(encoded.is_ok());
        let decoded: Result<ValidationResult, _> = serde_json::from_str(&encoded.unwrap_or_default());
        prop_assert!(decoded.is_ok());

        let back = decoded.unwrap_or(result.clone());
        prop_assert_eq!(back.status, result.status);
        prop_assert_eq!(back.app, result.app);
        prop_assert_eq!(back.timestamp, result.timestamp);
        prop_assert_eq!(back.data.provider, provider);
        prop_assert_eq!(back.data.services, service);
        prop_assert_eq!(back.error.message, result.error.message);
    }

    /// An explicit report address survives verbatim through every outcome class.
    #[test]
    fn report_address_is_preserved_verbatim(report in "[a-z]{1,16}@[a-z]{1,16}\\.com", status in 400u16..600) {
        let outcome = ProviderCallOutcome::HttpFailure { status, body: None };
        let result = build("npm", "npm_access_token", Some(&report), &outcome);
        prop_assert_eq!(result.data.validate.report, report);
    }

    /// Status and state always agree in classification.
    #[test]
    fn classification_is_consistent(status in 100u16..600, body in "\\PC{0,64}") {
        let outcome = if (200..300).contains(&status) {
            ProviderCallOutcome::Success { status, body }
        } else {
            ProviderCallOutcome::HttpFailure { status, body: Some(json!(body)) }
        };
        let result = build("npm", "npm_access_token", None, &outcome);

        if (200..300).contains(&result.status) {
            prop_assert_eq!(result.data.validate.state, SecretState::Active);
        } else {
            prop_assert_eq!(result.data.validate.state, SecretState::Inactive);
        }
    }

    /// Redacting the response is idempotent for any starting payload.
    #[test]
    fn response_redaction_is_idempotent(body in "\\PC{0,64}") {
        let outcome = ProviderCallOutcome::Success { status: 200, body };
        let result = build("npm", "npm_access_token", None, &outcome);

        let once = apply_response_visibility(result, false);
        let twice = apply_response_visibility(once.clone(), false);
        prop_assert_eq!(once.data.validate.response, twice.data.validate.response);
    }

    /// Secret masking never reveals anything past the visible prefix.
    #[test]
    fn masking_hides_the_secret_tail(s in "\\PC{6,100}") {
        let masked = redact_secret(&s);
        prop_assert_eq!(masked.chars().count(), s.chars().count());
        prop_assert!(masked.ends_with('*'));
    }
}
