//! The remote payment service seam.

use async_trait::async_trait;

use cashier_core::{
    Charge, ChargeParams, Customer, CustomerParams, List, Plan, PlanListParams, PlanParams,
    Subscription, SubscriptionParams,
};

use crate::error::StripeError;

/// Operations cashier needs from the payment service.
///
/// [`crate::StripeClient`] talks to the real Stripe API; tests substitute an
/// in-memory implementation. Every method is exactly one remote call.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a customer.
    async fn create_customer(&self, params: &CustomerParams) -> Result<Customer, StripeError>;

    /// Create a charge.
    async fn create_charge(&self, params: &ChargeParams) -> Result<Charge, StripeError>;

    /// Fetch one page of plans.
    async fn list_plans(&self, params: &PlanListParams) -> Result<List<Plan>, StripeError>;

    /// Create a plan.
    async fn create_plan(&self, params: &PlanParams) -> Result<Plan, StripeError>;

    /// Subscribe a customer to a plan.
    async fn create_subscription(
        &self,
        params: &SubscriptionParams,
    ) -> Result<Subscription, StripeError>;
}
