//! The local user collaborator.

use crate::ids::CustomerId;

/// A local user record that can be billed through Stripe.
///
/// Implemented by the application's own user model. Cashier only reads the
/// email and customer id, writes the customer id once, and asks the record to
/// persist itself right after.
pub trait ChargeableUser {
    /// Error returned when the record cannot be persisted.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Email address used when creating the Stripe customer.
    fn email(&self) -> Option<&str>;

    /// Stripe customer id, once the user has been linked.
    fn stripe_customer_id(&self) -> Option<&CustomerId>;

    /// Record the Stripe customer id on the user.
    fn set_stripe_customer_id(&mut self, id: CustomerId);

    /// Persist the user record.
    ///
    /// # Errors
    ///
    /// Returns the application's persistence error.
    fn save(&mut self) -> Result<(), Self::Error>;
}
