use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto an HTTP response. Invalid arguments are the
/// caller's fault; everything else is logged and reported as a 500.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidArgument(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        ServiceError::Repository(e) => {
            error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
