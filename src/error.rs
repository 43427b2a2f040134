use crate::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use thiserror::Error;

pub const REQUIRED_MESSAGE: &str = "Type and value are required.";
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Type must be one of: email, number, username.";
pub const INVALID_VALUE_MESSAGE: &str = "Value must be a string.";
pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be valid JSON.";
pub const UPSTREAM_MESSAGE: &str = "Error checking data breach.";
pub const INDETERMINATE_MESSAGE: &str = "Breach status could not be determined.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("unsupported identifier type: {0}")]
    UnsupportedType(String),
    #[error("value must be a string, got {0}")]
    InvalidValue(&'static str),
}

/// Anything that went wrong talking to the provider or reading its answer.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed provider payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Malformed(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("Indeterminate result: {0}")]
    Indeterminate(String),
}

impl BreachError {
    pub fn status(&self) -> StatusCode {
        match self {
            BreachError::Validation(_) | BreachError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            BreachError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BreachError::Indeterminate(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the caller. Upstream causes stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            BreachError::Validation(ValidationError::Missing(_)) => REQUIRED_MESSAGE,
            BreachError::Validation(ValidationError::UnsupportedType(_)) => {
                UNSUPPORTED_TYPE_MESSAGE
            }
            BreachError::Validation(ValidationError::InvalidValue(_)) => INVALID_VALUE_MESSAGE,
            BreachError::MalformedBody(_) => MALFORMED_BODY_MESSAGE,
            BreachError::Upstream(_) => UPSTREAM_MESSAGE,
            BreachError::Indeterminate(_) => INDETERMINATE_MESSAGE,
        }
    }
}

impl IntoResponse for BreachError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
