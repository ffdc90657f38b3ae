//! SonarCloud token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const SONARCLOUD_VALIDATE_URL: &str = "https://sonarcloud.io/api/authentication/validate";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "sonarcloud_token",
    display_name: "SonarCloud Token",
    enabled: true,
}];

/// SonarCloud secret validation provider.
pub struct SonarCloudProvider;

impl Provider for SonarCloudProvider {
    fn id(&self) -> &'static str {
        "sonarcloud"
    }

    fn name(&self) -> &'static str {
        "SonarCloud"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "sonarcloud_token").then_some(&SonarCloudTokenValidator as &dyn SecretValidator)
    }
}

/// Checks a SonarCloud token against the authentication validate endpoint.
pub struct SonarCloudTokenValidator;

impl SecretValidator for SonarCloudTokenValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(SONARCLOUD_VALIDATE_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("Bearer {secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
