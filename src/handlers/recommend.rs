use crate::{
    error::ApiError,
    models::RecommendRequest,
    services::RecommendationService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use tracing::info;

/// `POST /recommend` — run catalog search plus a best-effort Gemini call and
/// merge the results.
///
/// An empty prompt (including a missing or non-string `prompt` field) gets a
/// 200 with an `error` body rather than a 4xx; downstream clients already
/// depend on that shape.
pub async fn recommend(
    request: Json<RecommendRequest>,
    recommendation_service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let prompt = &request.prompt;
    info!("Received recommendation request for prompt: {}", prompt);

    if prompt.is_empty() {
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "error": "Please enter a prompt"
        })));
    }

    let response = recommendation_service.recommend(prompt).await;
    Ok(HttpResponse::Ok().json(response))
}
