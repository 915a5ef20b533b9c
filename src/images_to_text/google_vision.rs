use super::OcrEngine;
use crate::config::OcrConfig;
use crate::error::ExtractError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;

/// Google Cloud Vision OCR over its REST API
pub struct GoogleVisionEngine {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleVisionEngine {
    /// Create a Google Vision engine from configuration
    pub fn new(config: &OcrConfig) -> Result<Self, ExtractError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                ExtractError::OcrUnavailable(
                    "GOOGLE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleVisionEngine {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs OCR on raw image bytes
    pub async fn recognize_bytes(&self, image_data: &[u8]) -> Result<String, ExtractError> {
        let base64_image = STANDARD.encode(image_data);
        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);

        let request_body = json!({
            "requests": [{
                "image": {
                    "content": base64_image
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }]
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self
            .client
            .post(&url)
            .header("Accept-Encoding", "identity")
            .json(&request_body)
            .send()
            .await?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(ExtractError::Recognition(format!(
                "Google Vision API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("Google Vision API response: {:?}", response_body);

        if let Some(message) = response_body["responses"][0]["error"]["message"].as_str() {
            return Err(ExtractError::Recognition(message.to_string()));
        }

        // A label with no text comes back without a fullTextAnnotation
        let text = response_body["responses"][0]["fullTextAnnotation"]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        debug!("Extracted text from image: {} characters", text.len());

        Ok(text)
    }
}

#[async_trait]
impl OcrEngine for GoogleVisionEngine {
    fn engine_name(&self) -> &str {
        "google_vision"
    }

    async fn version(&self) -> Result<String, ExtractError> {
        // An empty batch costs nothing but still has the key checked
        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "requests": [] }))
            .send()
            .await
            .map_err(|e| {
                ExtractError::OcrUnavailable(format!("cannot reach Google Vision: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractError::OcrUnavailable(format!(
                "Google Vision rejected the API key ({}): {}",
                status, error_text
            )));
        }

        Ok("v1".to_string())
    }

    async fn recognize(&self, image_path: &Path) -> Result<String, ExtractError> {
        let image_data = tokio::fs::read(image_path).await?;
        self.recognize_bytes(&image_data).await
    }
}
