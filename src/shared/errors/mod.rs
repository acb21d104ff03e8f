//! Error Types
//!
//! Gateway and use case error types for the gallery.

use thiserror::Error;

/// Gateway-level errors for photo data access failures
///
/// The type is `Clone` so an injected error can be handed back verbatim on
/// every call of the fake gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Invalid base URL '{base_url}' given")]
    InvalidBaseUrl { base_url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    /// HTTP status code of the failed response, when one was received
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the upstream service answered 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the error was raised while constructing a gateway
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidBaseUrl { .. } | Self::Client(_))
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Gateway(e) if e.is_configuration() => "CONFIGURATION_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        UseCaseError::Validation(messages)
    }
}
