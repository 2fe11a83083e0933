use artcert_core::error::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RegistryError`] and request validation failures. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from a registry operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request body failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Registry(err) => classify_registry_error(err),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a registry error into an HTTP status, error code, and message.
///
/// - Missing assets map to 404, duplicate ids to 409.
/// - Store and encoding failures map to 500 with a sanitized message.
fn classify_registry_error(err: &RegistryError) -> (StatusCode, &'static str, String) {
    match err {
        RegistryError::AssetNotFound { .. } => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        RegistryError::AssetAlreadyExists { .. } => {
            (StatusCode::CONFLICT, "CONFLICT", err.to_string())
        }
        RegistryError::StoreRead(_)
        | RegistryError::StoreWrite(_)
        | RegistryError::Serialization { .. }
        | RegistryError::Deserialization { .. } => {
            tracing::error!(error = %err, "Registry error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
