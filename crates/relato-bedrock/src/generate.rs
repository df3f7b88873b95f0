//! Narrative generation via the Bedrock Converse API.
//!
//! Sends the assembled extraction data and context with the editorial
//! system prompt, and parses the response into the three raw register
//! versions. Schema validation happens here, at the boundary: a
//! response that is not JSON is a `SchemaViolation`; a well-formed
//! object missing a field decodes that field as the empty string and
//! the finalizer handles the rest.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use relato_core::models::context::ReportContext;
use relato_core::models::extraction::ExtractedResult;
use relato_core::policy::EthicalPolicy;
use relato_engine::generator::{GenerationError, NarrativeGenerator, RawVersions};

use crate::error::BedrockError;
use crate::prompts;

/// Invoke Bedrock for three-register narrative generation.
pub async fn generate_versions(
    client: &Client,
    model_id: &str,
    policy: &EthicalPolicy,
    context: &ReportContext,
    extracted: &[ExtractedResult],
    has_visual_source: bool,
) -> Result<RawVersions, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = model_id,
        has_visual_source,
        "starting narrative generation"
    );

    let system_prompt = prompts::narrative_system_prompt(policy, has_visual_source);
    let user_message = prompts::narrative_user_message(context, extracted)?;

    let response_text = invoke_converse(client, model_id, &system_prompt, &user_message).await?;

    let raw: RawVersions = serde_json::from_str(&response_text).map_err(|e| {
        BedrockError::SchemaViolation(format!(
            "failed to parse report versions: {e}. Response: {response_text}"
        ))
    })?;

    info!(transaction_id = %transaction_id, "narrative generation complete");
    Ok(raw)
}

/// Core invocation using the Converse API. Returns the concatenated
/// response text.
pub(crate) async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(text)
}

/// The Bedrock-backed narrative collaborator, pluggable into the
/// engine's orchestrator.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    policy: EthicalPolicy,
}

impl BedrockGenerator {
    pub fn new(
        config: &aws_config::SdkConfig,
        model_id: impl Into<String>,
        policy: EthicalPolicy,
    ) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
            policy,
        }
    }
}

impl NarrativeGenerator for BedrockGenerator {
    async fn generate(
        &self,
        context: &ReportContext,
        extracted: &[ExtractedResult],
        has_visual_source: bool,
    ) -> Result<RawVersions, GenerationError> {
        generate_versions(
            &self.client,
            &self.model_id,
            &self.policy,
            context,
            extracted,
            has_visual_source,
        )
        .await
        .map_err(|e| GenerationError::new(e.to_string()))
    }
}
