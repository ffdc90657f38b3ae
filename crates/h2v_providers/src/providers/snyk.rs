//! Snyk auth key validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const SNYK_USER_ME_URL: &str = "https://api.snyk.io/v1/user/me";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "snyk_auth_key",
    display_name: "Snyk Auth Key",
    enabled: true,
}];

/// Snyk secret validation provider.
pub struct SnykProvider;

impl Provider for SnykProvider {
    fn id(&self) -> &'static str {
        "snyk"
    }

    fn name(&self) -> &'static str {
        "Snyk"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "snyk_auth_key").then_some(&SnykAuthKeyValidator as &dyn SecretValidator)
    }
}

/// Checks a Snyk auth key against the current-user endpoint.
pub struct SnykAuthKeyValidator;

impl SecretValidator for SnykAuthKeyValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(SNYK_USER_ME_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("token {secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
