//! Structured score extraction via the Bedrock Converse API.
//!
//! Turns raw clinical sources (pasted result text, or a photographed
//! score table) into `ExtractedResult` records matching the wire
//! contract the validator depends on. Image payloads arrive as base64,
//! optionally wrapped in a data URL.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ImageBlock, ImageFormat, ImageSource, Message,
    SystemContentBlock,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use relato_core::models::extraction::ExtractedResult;
use relato_core::models::input::{RawInput, SourceKind};

use crate::error::BedrockError;
use crate::prompts::EXTRACTION_SYSTEM_PROMPT;

/// Extract assessment records from a raw clinical source, dispatching
/// on its kind.
pub async fn extract(
    client: &Client,
    model_id: &str,
    input: &RawInput,
) -> Result<Vec<ExtractedResult>, BedrockError> {
    match input.source {
        SourceKind::Text => extract_from_text(client, model_id, &input.content).await,
        SourceKind::Image => extract_from_image(client, model_id, &input.content).await,
    }
}

/// Extract assessment records from pasted result text.
pub async fn extract_from_text(
    client: &Client,
    model_id: &str,
    content: &str,
) -> Result<Vec<ExtractedResult>, BedrockError> {
    info!(model = model_id, content_len = content.len(), "extracting scores from text");

    let user_message = format!(
        "Extraia os dados técnicos desta planilha/resultado de teste.\nTEXTO: {content}"
    );

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(EXTRACTION_SYSTEM_PROMPT.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text = response_text(&response)?;
    parse_extraction(&text)
}

/// Extract assessment records from a photographed or scanned score
/// table. `base64` may be a bare payload or a full data URL.
pub async fn extract_from_image(
    client: &Client,
    model_id: &str,
    base64: &str,
) -> Result<Vec<ExtractedResult>, BedrockError> {
    let payload = strip_data_url_prefix(base64);
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| BedrockError::ImagePayload(e.to_string()))?;

    info!(model = model_id, image_bytes = bytes.len(), "extracting scores from image");

    let image_block = ImageBlock::builder()
        .format(ImageFormat::Jpeg)
        .source(ImageSource::Bytes(aws_smithy_types::Blob::new(bytes)))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Image(image_block))
        .content(ContentBlock::Text(
            "Extraia os dados estruturados desta tabela de avaliação.".to_string(),
        ))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(EXTRACTION_SYSTEM_PROMPT.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text = response_text(&response)?;
    parse_extraction(&text)
}

/// Drop a `data:image/...;base64,` prefix if present.
pub fn strip_data_url_prefix(base64: &str) -> &str {
    match base64.split_once(',') {
        Some((_, payload)) => payload,
        None => base64,
    }
}

fn response_text(
    response: &aws_sdk_bedrockruntime::operation::converse::ConverseOutput,
) -> Result<String, BedrockError> {
    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    Ok(output_message
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
        .join(""))
}

fn parse_extraction(text: &str) -> Result<Vec<ExtractedResult>, BedrockError> {
    serde_json::from_str(text).map_err(|e| {
        BedrockError::SchemaViolation(format!(
            "failed to parse extraction results: {e}. Response: {text}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(
            strip_data_url_prefix("data:image/jpeg;base64,AAAA"),
            "AAAA"
        );
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
    }

    #[test]
    fn extraction_array_parses_into_records() {
        let json = r#"[{
            "instrument": "WISC-IV",
            "category": "Cognitivo",
            "scores": [{ "label": "QI Total", "value": "105" }],
            "classification": "Médio"
        }]"#;
        let records = parse_extraction(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instrument, "WISC-IV");
    }

    #[test]
    fn non_json_extraction_is_a_schema_violation() {
        let err = parse_extraction("desculpe, não consegui").unwrap_err();
        assert!(matches!(err, BedrockError::SchemaViolation(_)));
    }
}
