//! Sentry auth token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const SENTRY_ROOT_URL: &str = "https://sentry.io/api/0/";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "sentry_auth_token",
    display_name: "Sentry Auth Token",
    enabled: true,
}];

/// Sentry secret validation provider.
pub struct SentryProvider;

impl Provider for SentryProvider {
    fn id(&self) -> &'static str {
        "sentry"
    }

    fn name(&self) -> &'static str {
        "Sentry"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "sentry_auth_token").then_some(&SentryAuthTokenValidator as &dyn SecretValidator)
    }
}

/// Checks a Sentry auth token against the API root.
pub struct SentryAuthTokenValidator;

impl SecretValidator for SentryAuthTokenValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(SENTRY_ROOT_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("Bearer {secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
