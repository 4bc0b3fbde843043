use crate::io_struct::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("failed to reach completion API: {0}")]
    UpstreamTransport(#[from] reqwest::Error),
    #[error("completion API returned status {status}: {body}")]
    UpstreamProtocol { status: u16, body: String },
    #[error("completion API returned no choices")]
    EmptyUpstreamResponse,
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;

impl RelayError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RelayError::UpstreamTransport(e) if e.is_timeout())
    }

    /// Message shown to callers. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::Validation(msg) => msg.clone(),
            RelayError::UpstreamTransport(_) if self.is_timeout() => {
                "AI service timed out".to_string()
            }
            RelayError::UpstreamTransport(_) => "Error contacting AI service".to_string(),
            RelayError::UpstreamProtocol { .. } => "AI service error".to_string(),
            RelayError::EmptyUpstreamResponse => "AI service returned no answer".to_string(),
            RelayError::Configuration(_) => "Server misconfigured".to_string(),
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamTransport(_) if self.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamTransport(_)
            | RelayError::UpstreamProtocol { .. }
            | RelayError::EmptyUpstreamResponse => StatusCode::BAD_GATEWAY,
            RelayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}
