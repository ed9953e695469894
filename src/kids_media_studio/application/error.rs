use thiserror::Error;
use crate::domain::error::DomainError; // ドメインエラーをラップするため
use crate::infrastructure::error::InfrastructureError; // InfrastructureError をラップするため

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Request rejected: {0}")]
    BadRequest(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),

    #[error("Underlying error: {source:?}")]
    AnyhowError {
        #[from]
        source: anyhow::Error,
    }
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApplicationError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApplicationError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::DomainError(_) => StatusCode::BAD_REQUEST,
            ApplicationError::InfrastructureError(infra_err) => match infra_err {
                InfrastructureError::ExternalApiError(_) | InfrastructureError::ReqwestError(_) => StatusCode::BAD_GATEWAY,
                InfrastructureError::MissingCredentials(_) => StatusCode::SERVICE_UNAVAILABLE,
                InfrastructureError::DecodingError(_) | InfrastructureError::Base64DecodeError(_) => StatusCode::BAD_REQUEST,
                InfrastructureError::DomainErrorWrapper(_) => StatusCode::BAD_REQUEST,
                InfrastructureError::ImageLibError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                InfrastructureError::FileStorageError(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApplicationError::AnyhowError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// IntoResponse implementation for ApplicationError
use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            ApplicationError::InfrastructureError(infra_err) => {
                tracing::error!(error = ?infra_err, status = %status, "infrastructure failure");
                infra_err.to_string()
            }
            ApplicationError::AnyhowError { source } => {
                tracing::error!(error = ?source, "unhandled error");
                "An unexpected error occurred.".to_string()
            }
            other => {
                tracing::warn!(error = %other, status = %status, "request failed");
                other.to_string()
            }
        };
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApplicationError::from(DomainError::invalid("seed out of bounds")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApplicationError::UpstreamUnavailable("no media".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApplicationError::from(InfrastructureError::MissingCredentials("key".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApplicationError::from(InfrastructureError::FileStorageError("none".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApplicationError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ApplicationError::BadRequest("missing field `x`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
