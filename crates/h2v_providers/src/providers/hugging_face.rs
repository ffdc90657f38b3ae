//! Hugging Face API key and user access token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const HF_WHOAMI_URL: &str = "https://huggingface.co/api/whoami-v2";

static SERVICES: &[ServiceDef] = &[
    ServiceDef {
        id: "hf_org_api_key",
        display_name: "Hugging Face Org API Key",
        enabled: true,
    },
    ServiceDef {
        id: "hf_user_access_token",
        display_name: "Hugging Face User Access Token",
        enabled: true,
    },
];

/// Hugging Face secret validation provider.
///
/// Both the org API key and the user access token authenticate against the
/// same `whoami-v2` endpoint, so one validator serves both services.
pub struct HuggingFaceProvider;

impl Provider for HuggingFaceProvider {
    fn id(&self) -> &'static str {
        "hugging_face"
    }

    fn name(&self) -> &'static str {
        "Hugging Face"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        SERVICES
            .iter()
            .any(|s| s.id == service_id)
            .then_some(&HuggingFaceTokenValidator as &dyn SecretValidator)
    }
}

/// Checks a Hugging Face token against the `whoami-v2` endpoint.
pub struct HuggingFaceTokenValidator;

impl SecretValidator for HuggingFaceTokenValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(HF_WHOAMI_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("Bearer {secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_has_correct_id() {
        assert_eq!(HuggingFaceProvider.id(), "hugging_face");
    }

    #[test]
    fn both_token_services_share_the_whoami_validator() {
        assert!(HuggingFaceProvider.validator("hf_org_api_key").is_some());
        assert!(HuggingFaceProvider.validator("hf_user_access_token").is_some());
        assert!(HuggingFaceProvider.validator("npm_access_token").is_none());
    }

    #[test]
    fn provider_lists_two_services() {
        assert_eq!(HuggingFaceProvider.services().len(), 2);
    }
}
