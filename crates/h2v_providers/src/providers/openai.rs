//! OpenAI API key validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const OPENAI_ME_URL: &str = "https://api.openai.com/v1/me";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "openai_api_key",
    display_name: "OpenAI API Key",
    enabled: true,
}];

/// OpenAI secret validation provider.
pub struct OpenAiProvider;

impl Provider for OpenAiProvider {
    fn id(&self) -> &'static str {
        "openai"
    }

    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "openai_api_key").then_some(&OpenAiApiKeyValidator as &dyn SecretValidator)
    }
}

/// Checks an OpenAI API key against the `/v1/me` endpoint.
pub struct OpenAiApiKeyValidator;

impl SecretValidator for OpenAiApiKeyValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(OPENAI_ME_URL)
                .header("Authorization", format!("Bearer {secret}"))
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}
