use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Name is required")]
    NameRequired,

    #[error("Item not found")]
    ItemNotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Body returned for every failed request
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl RegistryError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            RegistryError::NameRequired => "VALIDATION_ERROR",
            RegistryError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            RegistryError::InvalidBody(_) => "INVALID_BODY",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::NameRequired => StatusCode::BAD_REQUEST,
            RegistryError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            message: self.to_string(),
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match &self {
            RegistryError::ItemNotFound(id) => {
                tracing::debug!(item_id = %id, code = self.to_error_code(), "Item lookup failed")
            },
            RegistryError::NameRequired => {
                tracing::warn!(code = self.to_error_code(), "Rejected item without a name")
            },
            RegistryError::InvalidBody(reason) => tracing::warn!(
                code = self.to_error_code(),
                reason = %reason,
                "Rejected request body"
            ),
        }
        (self.status_code(), Json(self.to_error_response())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_api_contract() {
        assert_eq!(RegistryError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            RegistryError::ItemNotFound("42".to_string()).to_string(),
            "Item not found"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RegistryError::NameRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::ItemNotFound("1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_value(RegistryError::NameRequired.to_error_response()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Name is required"})
        );
    }

    #[test]
    fn test_invalid_body_is_client_error() {
        let err = RegistryError::InvalidBody("expected value".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid request body: expected value");
        assert_eq!(err.to_error_code(), "INVALID_BODY");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RegistryError::NameRequired.to_error_code(), "VALIDATION_ERROR");
        assert_eq!(
            RegistryError::ItemNotFound("x".to_string()).to_error_code(),
            "ITEM_NOT_FOUND"
        );
    }
}
