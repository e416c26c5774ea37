pub mod catalog;
pub mod gemini;
pub mod recommendation;

// Re-export public types
pub use gemini::GeminiClient;
pub use recommendation::{RecommendationService, NO_MATCHES_MESSAGE};
