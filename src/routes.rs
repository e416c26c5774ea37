use actix_web::web;

use crate::error::ApiError;
use crate::handlers::{health_check, recommend};

/// Configure all routes for the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(web::resource("/recommend").route(web::post().to(recommend)));
}

/// JSON extractor configuration: a body that fails to parse surfaces as the
/// generic error shape with a failure status instead of actix's default 400.
pub fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidPayload(err.to_string()).into())
}
