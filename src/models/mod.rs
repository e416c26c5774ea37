use serde::{Deserialize, Deserializer, Serialize};

// Re-export types from book.rs
pub use book::{catalog, Book};

mod book;

fn deserialize_prompt<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybePrompt {
        String(String),
        // A non-string prompt is treated like an absent one
        Other(serde_json::Value),
    }

    match MaybePrompt::deserialize(deserializer)? {
        MaybePrompt::String(s) => Ok(s),
        MaybePrompt::Other(_) => Ok(String::new()),
    }
}

/// Request body for `POST /recommend`. A missing or non-string `prompt`
/// collapses to the empty string, which the handler rejects with the
/// "Please enter a prompt" response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default, deserialize_with = "deserialize_prompt")]
    pub prompt: String,
}

/// The three success shapes of `POST /recommend`. Serialized untagged so the
/// wire format carries only the fields of the chosen variant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    /// Catalog matches, with the AI text when the Gemini call succeeded.
    Books {
        books: Vec<Book>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ai_recommendation: Option<String>,
    },
    /// Nothing matched and no AI text was available.
    Message { message: String },
}
