//! Plan lookup and creation.

use cashier_core::{
    ParseIntervalError, Plan, PlanCriteria, PlanInterval, PlanListParams, PlanParams, ProductId,
};
use cashier_stripe::PaymentGateway;

use crate::cashier::Cashier;
use crate::error::{CashierError, Result};

/// Description of a plan to create.
///
/// The interval is a raw string and is validated by [`Cashier::create_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSpec {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Billing interval name (`day`, `week`, `month` or `year`).
    pub interval: String,
    /// Number of intervals between billings (default: 1).
    pub interval_count: u32,
    /// Product the plan belongs to.
    pub product: ProductId,
    /// Internal display name.
    pub nickname: Option<String>,
    /// Currency; the cashier's currency when unset.
    pub currency: Option<String>,
}

impl PlanSpec {
    /// A plan billed every single `interval`.
    #[must_use]
    pub fn new(amount: i64, interval: impl Into<String>, product: ProductId) -> Self {
        Self {
            amount,
            interval: interval.into(),
            interval_count: 1,
            product,
            nickname: None,
            currency: None,
        }
    }

    /// Set the interval count.
    #[must_use]
    pub fn with_interval_count(mut self, interval_count: u32) -> Self {
        self.interval_count = interval_count;
        self
    }

    /// Set the nickname.
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set the currency (stored lowercase).
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into().to_lowercase());
        self
    }
}

impl<G: PaymentGateway> Cashier<G> {
    /// Find the first active plan of `product` matching `criteria` exactly.
    ///
    /// Pages through the product's active plans 100 at a time, in the order
    /// Stripe returns them, and stops at the first match. The interval is not
    /// validated here: an unknown interval just never matches.
    ///
    /// Returns `Ok(None)` once Stripe reports no further pages.
    ///
    /// # Errors
    ///
    /// Returns [`CashierError::Stripe`] if any page request fails.
    pub async fn find_plan(
        &self,
        product: &ProductId,
        criteria: &PlanCriteria,
    ) -> Result<Option<Plan>> {
        let mut params = PlanListParams::active_for_product(product.clone());
        let mut page_number = 0_u32;

        loop {
            let page = self.gateway.list_plans(&params).await?;
            page_number += 1;

            tracing::debug!(
                product_id = %product,
                page = page_number,
                plans = page.data.len(),
                has_more = page.has_more,
                "Scanning Stripe plan page"
            );

            let cursor = page.data.last().map(|plan| plan.id.clone());
            if let Some(plan) = page.data.into_iter().find(|plan| criteria.matches(plan)) {
                tracing::debug!(plan_id = %plan.id, "Found matching plan");
                return Ok(Some(plan));
            }

            // An empty page leaves nothing to continue after.
            let (true, Some(cursor)) = (page.has_more, cursor) else {
                return Ok(None);
            };
            params = params.starting_after(cursor);
        }
    }

    /// Create a plan from `spec`.
    ///
    /// # Errors
    ///
    /// - [`CashierError::InvalidInput`] if the interval is not one of `day`,
    ///   `week`, `month` or `year` (nothing is sent).
    /// - [`CashierError::Stripe`] if plan creation fails.
    pub async fn create_plan(&self, spec: PlanSpec) -> Result<Plan> {
        let interval: PlanInterval = spec
            .interval
            .parse()
            .map_err(|e: ParseIntervalError| CashierError::InvalidInput(e.to_string()))?;

        let params = PlanParams {
            amount: spec.amount,
            currency: spec.currency.unwrap_or_else(|| self.currency.clone()),
            interval,
            interval_count: spec.interval_count,
            product: spec.product,
            nickname: spec.nickname,
        };
        let plan = self.gateway.create_plan(&params).await?;

        tracing::info!(
            plan_id = %plan.id,
            product_id = %params.product,
            amount = params.amount,
            interval = %params.interval,
            interval_count = params.interval_count,
            "Created Stripe plan"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_spec_defaults() {
        let spec = PlanSpec::new(900, "month", "prod_1".parse().unwrap());
        assert_eq!(spec.interval_count, 1);
        assert_eq!(spec.currency, None);
        assert_eq!(spec.nickname, None);
    }

    #[test]
    fn plan_spec_builder() {
        let spec = PlanSpec::new(900, "week", "prod_1".parse().unwrap())
            .with_interval_count(2)
            .with_nickname("Biweekly")
            .with_currency("EUR");

        assert_eq!(spec.interval_count, 2);
        assert_eq!(spec.nickname.as_deref(), Some("Biweekly"));
        assert_eq!(spec.currency.as_deref(), Some("eur"));
    }
}
