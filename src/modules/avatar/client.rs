// src/modules/avatar/client.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{to_data_url, AvatarError, AvatarGenerator};
use crate::config::AvatarConfig;

/// Generative content API client, asking for a single image.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

impl GenerateContentResponse {
    /// First inline image in the first candidate, as a data URL.
    pub fn first_inline_image(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| to_data_url(inline.mime_type.as_deref(), &inline.data))
    }
}

impl GeminiClient {
    pub fn new(config: &AvatarConfig) -> Result<Self, AvatarError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl AvatarGenerator for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, AvatarError> {
        let api_key = self.api_key.as_deref().ok_or(AvatarError::MissingApiKey)?;

        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self.client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateContentResponse = response.json().await?;
        tracing::info!(candidates = body.candidates.len(), "avatar response received");

        body.first_inline_image().ok_or(AvatarError::NoImageData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let config = AvatarConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            model: "image-model".to_string(),
            ..AvatarConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();

        assert_eq!(client.url(), "https://example.test/v1beta/models/image-model:generateContent");
    }

    #[test]
    fn test_first_inline_image_skips_text_parts() {
        let body = parse(r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here is your cat" },
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "inlineData": { "mimeType": "image/png", "data": "REVG" } }
                    ]
                }
            }]
        }"#);

        assert_eq!(body.first_inline_image().as_deref(), Some("data:image/png;base64,QUJD"));
    }

    #[test]
    fn test_only_first_candidate_is_considered() {
        let body = parse(r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "no image" } ] } },
                { "content": { "parts": [ { "inlineData": { "data": "QUJD" } } ] } }
            ]
        }"#);

        assert_eq!(body.first_inline_image(), None);
    }

    #[test]
    fn test_empty_responses_have_no_image() {
        assert_eq!(parse("{}").first_inline_image(), None);
        assert_eq!(parse(r#"{ "candidates": [ {} ] }"#).first_inline_image(), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = GeminiClient::new(&AvatarConfig::default()).unwrap();

        let result = client.generate("a tired cat").await;

        assert!(matches!(result, Err(AvatarError::MissingApiKey)));
    }
}
