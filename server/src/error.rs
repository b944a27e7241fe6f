use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use store::store::request_manager::RequestManagerError;
use thiserror::Error;

/// Failures a route handler can surface, each mapped to an HTTP status and
/// a JSON body. Store failures used to be silently dropped upstream of this
/// rewrite; here they become explicit 500s.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("store request failed: {0}")]
    Store(#[from] RequestManagerError),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
