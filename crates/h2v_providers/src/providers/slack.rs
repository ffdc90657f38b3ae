//! Slack API token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const SLACK_AUTH_TEST_URL: &str = "https://slack.com/api/auth.test?pretty=1";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "slack_api_token",
    display_name: "Slack API Token",
    enabled: true,
}];

/// Slack secret validation provider.
pub struct SlackProvider;

impl Provider for SlackProvider {
    fn id(&self) -> &'static str {
        "slack"
    }

    fn name(&self) -> &'static str {
        "Slack"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "slack_api_token").then_some(&SlackApiTokenValidator as &dyn SecretValidator)
    }
}

/// Checks a Slack token against the `auth.test` endpoint.
///
/// Note that Slack answers HTTP 200 even for invalid tokens and signals the
/// failure in the JSON body; a 200 here therefore only proves the token
/// reached Slack's API surface, matching the original tool's behaviour.
pub struct SlackApiTokenValidator;

impl SecretValidator for SlackApiTokenValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(SLACK_AUTH_TEST_URL)
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
        assert_eq!(SlackProvider.id(), "slack");
    }

    #[test]
    fn validator_dispatches_only_on_own_service_ids() {
        assert!(SlackProvider.validator("slack_api_token").is_some());
        assert!(SlackProvider.validator("slack_webhook").is_none());
    }
}
