//! Anthropic API key validation.

use h2v_core::ProviderCallOutcome;
use serde_json::json;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "anthropic_api_key",
    display_name: "Anthropic API Key",
    enabled: true,
}];

/// Anthropic secret validation provider.
pub struct AnthropicProvider;

impl Provider for AnthropicProvider {
    fn id(&self) -> &'static str {
        "anthropic"
    }

    fn name(&self) -> &'static str {
        "Anthropic"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "anthropic_api_key").then_some(&AnthropicApiKeyValidator as &dyn SecretValidator)
    }
}

/// Checks an Anthropic API key with a minimal messages request.
///
/// Anthropic has no dedicated introspection endpoint, so a one-message
/// completion call is issued; authentication failures come back as 401
/// before any generation happens.
pub struct AnthropicApiKeyValidator;

impl SecretValidator for AnthropicApiKeyValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let payload = json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 1024,
                "messages": [{"role": "user", "content": "Hello, world"}],
            });

            let sent = client
                .post(ANTHROPIC_MESSAGES_URL)
                .header("x-api-key", secret)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .header("User-Agent", USER_AGENT)
                .json(&payload)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
