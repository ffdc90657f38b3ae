//! npm access token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const NPM_USER_URL: &str = "https://registry.npmjs.org/-/npm/v1/user";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "npm_access_token",
    display_name: "npm Access Token",
    enabled: true,
}];

/// npm secret validation provider.
pub struct NpmProvider;

impl Provider for NpmProvider {
    fn id(&self) -> &'static str {
        "npm"
    }

    fn name(&self) -> &'static str {
        "npm"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "npm_access_token").then_some(&NpmAccessTokenValidator as &dyn SecretValidator)
    }
}

/// Checks an npm access token against the registry's user endpoint.
pub struct NpmAccessTokenValidator;

impl SecretValidator for NpmAccessTokenValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(NPM_USER_URL)
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
        assert_eq!(NpmProvider.id(), "npm");
    }

    #[test]
    fn provider_lists_the_access_token_service() {
        assert!(NpmProvider.services().iter().any(|s| s.id == "npm_access_token"));
    }

    #[test]
    fn validator_dispatches_only_on_own_service_ids() {
        assert!(NpmProvider.validator("npm_access_token").is_some());
        assert!(NpmProvider.validator("github_personal_access_token").is_none());
    }
}
