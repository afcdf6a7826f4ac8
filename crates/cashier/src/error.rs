//! Error types for cashier.

use cashier_stripe::StripeError;

/// Result type for cashier operations.
pub type Result<T> = std::result::Result<T, CashierError>;

/// Errors that can occur in cashier operations.
#[derive(Debug, thiserror::Error)]
pub enum CashierError {
    /// The caller passed input that cannot be sent to Stripe.
    ///
    /// Raised before any remote call is made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Stripe (or the network on the way to it) failed.
    #[error(transparent)]
    Stripe(#[from] StripeError),

    /// The user record could not be saved after linking.
    ///
    /// The Stripe customer exists and its id is already set on the in-memory
    /// user. Call `save()` on the user again; linking again returns
    /// `AlreadyLinked` without persisting anything.
    #[error("failed to persist user: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CashierError {
    /// Whether the error was raised locally, before talking to Stripe.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
