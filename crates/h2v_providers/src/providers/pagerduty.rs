//! PagerDuty API key validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const PAGERDUTY_ABILITIES_URL: &str = "https://api.pagerduty.com/abilities";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "pagerduty_api_key",
    display_name: "PagerDuty API Key",
    enabled: true,
}];

/// PagerDuty secret validation provider.
pub struct PagerDutyProvider;

impl Provider for PagerDutyProvider {
    fn id(&self) -> &'static str {
        "pagerduty"
    }

    fn name(&self) -> &'static str {
        "PagerDuty"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "pagerduty_api_key").then_some(&PagerDutyApiKeyValidator as &dyn SecretValidator)
    }
}

/// Checks a PagerDuty API key against the account abilities endpoint.
pub struct PagerDutyApiKeyValidator;

impl SecretValidator for PagerDutyApiKeyValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(PAGERDUTY_ABILITIES_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("Token token={secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
