use crate::error::{ApiError, Result};
use crate::models::catalog;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Client for Google's Generative Language API.
///
/// Constructed with `api_key: None` when no credential was configured; in
/// that mode every request reports the AI path as unavailable without
/// touching the network. Failures of any kind are logged and swallowed so a
/// broken AI path never takes a request down with it.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_api_base_url.clone(),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask Gemini for a recommendation. `None` means the AI path is
    /// unavailable, either because no key is configured or because this
    /// particular call failed. A single best-effort attempt, no retries.
    pub async fn recommend(&self, prompt: &str) -> Option<String> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                debug!("Skipping AI recommendation: no API key configured");
                return None;
            }
        };

        match self.generate(api_key, prompt).await {
            Ok(text) => {
                info!("Successfully generated recommendation");
                Some(text)
            }
            Err(err) => {
                error!("Error generating AI recommendation: {}", err);
                None
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        info!("Generating recommendation for prompt: {}", prompt);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_instruction(prompt)?,
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ExternalService(format!(
                "Gemini API returned status {}",
                status
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        extract_text(body)
            .ok_or_else(|| ApiError::ExternalService("Gemini response had no candidates".into()))
    }
}

/// Build the instruction text sent to the model: the user prompt plus the
/// full catalog serialized as JSON, with a request for per-book explanations.
fn build_instruction(prompt: &str) -> Result<String> {
    let books = serde_json::to_string(catalog())?;
    Ok(format!(
        "You are a book recommendation assistant. Based on this user prompt: '{prompt}', \
         recommend books from this database: {books}. \
         Return only the books that best match the user's request, along with a brief \
         explanation of why you're recommending each book."
    ))
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
}
