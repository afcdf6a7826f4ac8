//! Stripe error types.

/// Errors that can occur when talking to Stripe.
///
/// These are passed through to callers untouched: cashier does not retry or
/// reinterpret anything Stripe reports.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error ({status}): {error_type} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error type (`card_error`, `invalid_request_error`, ...).
        error_type: String,
        /// Error message.
        message: String,
        /// Error code (`card_declined`, `resource_missing`, ...).
        code: Option<String>,
        /// Parameter that caused the error.
        param: Option<String>,
    },

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// The Stripe error code, for API errors that carry one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
