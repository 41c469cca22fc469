use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::auth::errors::AuthError;
use service::blog::errors::BlogError;

/// JSON error envelope with the HTTP status the service outcome maps to.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.title, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

/// Absence of the target maps to 404; failed preconditions (missing related
/// entity, ownership mismatch, validation) map to 400; persistence faults
/// surface as 500.
impl From<BlogError> for JsonApiError {
    fn from(e: BlogError) -> Self {
        match e {
            BlogError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            BlogError::Validation(_) | BlogError::MissingRelation(_) | BlogError::OwnerMismatch => {
                Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string()))
            }
            BlogError::Repository(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string()))
            }
            AuthError::Conflict => {
                Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string()))
            }
            AuthError::Unauthorized => {
                Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string()))
            }
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}
