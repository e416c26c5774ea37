use actix_web::{get, HttpResponse};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "madreaders-api",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
