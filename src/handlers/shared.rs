use actix_web::{HttpRequest, HttpResponse, error::InternalError};
use serde::{Deserialize, Serialize};

/// Envelope used for error bodies.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl ApiResponse<()> {
    // Error response (no data)
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

/// Turn body and path extraction failures into 400 responses with the same
/// envelope as service errors.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    log::warn!("{}", message);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message)),
    )
    .into()
}

pub fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid path parameter: {}", err);
    log::warn!("{}", message);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message)),
    )
    .into()
}
