use crate::models::{Book, RecommendResponse};
use crate::services::{catalog, GeminiClient};
use tracing::info;

pub const NO_MATCHES_MESSAGE: &str =
    "No books found matching your prompt. Try something else!";

/// Runs both lookup strategies for a prompt and merges their results.
pub struct RecommendationService {
    gemini: GeminiClient,
}

impl RecommendationService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    /// The two strategies are independent: the catalog search cannot fail,
    /// and a failed Gemini call degrades this request to catalog-only
    /// results rather than erroring.
    pub async fn recommend(&self, prompt: &str) -> RecommendResponse {
        let ai_recommendation = self.gemini.recommend(prompt).await;
        let matches = catalog::find_matching_books(prompt);
        merge(matches, ai_recommendation)
    }
}

/// Merge precedence: any AI text wins (with whatever matched, possibly
/// nothing), then bare matches, then the no-results message.
fn merge(matches: Vec<Book>, ai_recommendation: Option<String>) -> RecommendResponse {
    if ai_recommendation.is_some() {
        info!("Returning AI recommendation with matches");
        RecommendResponse::Books {
            books: matches,
            ai_recommendation,
        }
    } else if !matches.is_empty() {
        info!("Returning direct matches");
        RecommendResponse::Books {
            books: matches,
            ai_recommendation: None,
        }
    } else {
        info!("No matches found");
        RecommendResponse::Message {
            message: NO_MATCHES_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_matches() -> Vec<Book> {
        vec![crate::models::catalog()[1].clone()]
    }

    #[test]
    fn ai_text_always_included_when_present() {
        let response = merge(some_matches(), Some("Read 1984.".to_string()));
        match response {
            RecommendResponse::Books {
                books,
                ai_recommendation,
            } => {
                assert_eq!(books.len(), 1);
                assert_eq!(ai_recommendation.as_deref(), Some("Read 1984."));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn ai_text_wins_even_with_no_matches() {
        let response = merge(vec![], Some("Try poetry instead.".to_string()));
        match response {
            RecommendResponse::Books {
                books,
                ai_recommendation,
            } => {
                assert!(books.is_empty());
                assert!(ai_recommendation.is_some());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn bare_matches_without_ai() {
        let response = merge(some_matches(), None);
        match response {
            RecommendResponse::Books {
                books,
                ai_recommendation,
            } => {
                assert_eq!(books[0].title, "1984");
                assert!(ai_recommendation.is_none());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn nothing_at_all_yields_the_message() {
        match merge(vec![], None) {
            RecommendResponse::Message { message } => {
                assert_eq!(message, NO_MATCHES_MESSAGE);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn failed_gemini_call_degrades_that_request_to_catalog_only() {
        // Key configured, but the base URL is unreachable: only this
        // request's AI path degrades, catalog matches still come back
        let gemini = GeminiClient::new(
            Some("test-key".to_string()),
            "gemini-pro",
            "http://127.0.0.1:1",
        );
        let service = RecommendationService::new(gemini);
        match service.recommend("Orwell").await {
            RecommendResponse::Books {
                books,
                ai_recommendation,
            } => {
                assert_eq!(books.len(), 1);
                assert_eq!(books[0].title, "1984");
                assert!(ai_recommendation.is_none());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn service_degrades_to_catalog_results_without_a_key() {
        let service =
            RecommendationService::new(GeminiClient::new(None, "gemini-pro", "http://127.0.0.1:0"));
        match service.recommend("Orwell").await {
            RecommendResponse::Books {
                books,
                ai_recommendation,
            } => {
                assert_eq!(books.len(), 1);
                assert_eq!(books[0].title, "1984");
                assert!(ai_recommendation.is_none());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
