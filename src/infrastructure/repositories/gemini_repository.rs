use super::llm_repository::LanguageModelRepository;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini implementation of the language-model repository
pub struct GeminiRepository {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiRepository {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }
}

#[async_trait]
impl LanguageModelRepository for GeminiRepository {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseModalities": ["TEXT"]
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status.as_u16(),
                error = %error_text,
                "Gemini API call failed"
            );
            return Err(format!("Gemini API error ({}): {}", status.as_u16(), error_text));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

        let mut text = String::new();
        if let Some(candidate) = api_response.candidates.as_deref().and_then(|c| c.first()) {
            for part in &candidate.content.parts {
                if let Some(part_text) = &part.text {
                    text.push_str(part_text);
                }
            }
        }

        if text.is_empty() {
            return Err("Gemini response contained no text".to_string());
        }

        tracing::debug!(
            latency_ms = start_time.elapsed().as_millis(),
            response_length = text.len(),
            "Gemini response received"
        );

        Ok(text)
    }
}
