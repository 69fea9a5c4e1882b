use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use studynotes_common::{LlmError, StudyNotesError};

/// Error returned from route handlers, rendered as `{ "error": message }`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] StudyNotesError);

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self(StudyNotesError::Llm(err))
    }
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        Self(StudyNotesError::invalid_input(format!("Malformed upload: {}", err)))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.0.to_string() }))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
