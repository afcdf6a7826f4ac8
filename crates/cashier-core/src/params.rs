//! Request parameters for the create and list endpoints.
//!
//! These are transport-neutral; the gateway decides how they are encoded.

use crate::ids::{CustomerId, PlanId, ProductId};
use crate::plan::PlanInterval;

/// Largest page size Stripe allows on list endpoints.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Parameters for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerParams {
    /// Customer email.
    pub email: String,
    /// Card token (`tok_...`) attached as the default payment source.
    pub source: String,
    /// Customer name, sent only when present.
    pub name: Option<String>,
}

/// Parameters for creating a charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeParams {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Currency (e.g., "usd").
    pub currency: String,
    /// Description shown on the charge.
    pub description: String,
    /// Customer to charge.
    pub customer: Option<CustomerId>,
}

/// Query parameters for one page of the plan listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanListParams {
    /// Restrict to plans of this product.
    pub product: ProductId,
    /// Restrict to active plans.
    pub active: bool,
    /// Page size (1-100).
    pub limit: u8,
    /// Cursor: return plans after this one.
    pub starting_after: Option<PlanId>,
}

impl PlanListParams {
    /// First page of the active plans for `product`, at the maximum page size.
    #[must_use]
    pub fn active_for_product(product: ProductId) -> Self {
        Self {
            product,
            active: true,
            limit: MAX_PAGE_SIZE,
            starting_after: None,
        }
    }

    /// Continue the listing after `plan`.
    #[must_use]
    pub fn starting_after(mut self, plan: PlanId) -> Self {
        self.starting_after = Some(plan);
        self
    }
}

/// Parameters for creating a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanParams {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Currency (e.g., "usd").
    pub currency: String,
    /// Billing interval.
    pub interval: PlanInterval,
    /// Number of intervals between billings.
    pub interval_count: u32,
    /// Product the plan belongs to.
    pub product: ProductId,
    /// Internal display name.
    pub nickname: Option<String>,
}

/// Parameters for subscribing a customer to a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionParams {
    /// Customer to subscribe.
    pub customer: CustomerId,
    /// Plan of the single subscription item.
    pub plan: PlanId,
}
