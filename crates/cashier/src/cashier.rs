//! The `Cashier` facade: customers, charges and subscriptions.

use cashier_core::{
    Charge, ChargeParams, ChargeableUser, Customer, CustomerParams, PlanId, Subscription,
    SubscriptionParams,
};
use cashier_stripe::{PaymentGateway, StripeClient};

use crate::config::{CashierConfig, DEFAULT_CURRENCY};
use crate::error::{CashierError, Result};

/// Billing helper bound to one payment gateway.
///
/// Holds no state besides the gateway and the currency used for charges and
/// new plans; every method is independent.
#[derive(Debug, Clone)]
pub struct Cashier<G = StripeClient> {
    pub(crate) gateway: G,
    pub(crate) currency: String,
}

/// What [`Cashier::link_user_to_customer`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The user already had a customer id; nothing was sent or changed.
    AlreadyLinked,
    /// A customer was created and its id saved on the user.
    Linked(Customer),
}

impl Cashier<StripeClient> {
    /// Create a cashier talking to the live Stripe API.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&CashierConfig::new(api_key))
    }

    /// Create a cashier from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn from_config(config: &CashierConfig) -> Result<Self> {
        let client = StripeClient::with_options(&config.api_key, config.client_options())?;
        Ok(Self::with_gateway(client).with_currency(&config.currency))
    }
}

impl<G> Cashier<G> {
    /// Create a cashier on top of any gateway implementation.
    #[must_use]
    pub fn with_gateway(gateway: G) -> Self {
        Self {
            gateway,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Set the currency used for charges and new plans (stored lowercase).
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Currency used for charges and new plans.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl<G: PaymentGateway> Cashier<G> {
    /// Create a Stripe customer for `user` and remember its id on the user.
    ///
    /// Does nothing if the user already has a customer id. Otherwise creates
    /// the customer with the user's email, `card_token` as the payment source
    /// and `name` when given, then sets the id and saves the user.
    ///
    /// # Errors
    ///
    /// - [`CashierError::InvalidInput`] if the user has no email (nothing is sent).
    /// - [`CashierError::Stripe`] if customer creation fails.
    /// - [`CashierError::Persistence`] if saving the user fails.
    pub async fn link_user_to_customer<U: ChargeableUser>(
        &self,
        user: &mut U,
        card_token: &str,
        name: Option<&str>,
    ) -> Result<LinkOutcome> {
        if let Some(customer_id) = user.stripe_customer_id() {
            tracing::debug!(customer_id = %customer_id, "User already linked to Stripe customer");
            return Ok(LinkOutcome::AlreadyLinked);
        }

        let email = user
            .email()
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                CashierError::InvalidInput(
                    "cannot create Stripe customer without an email address".into(),
                )
            })?;

        let params = CustomerParams {
            email: email.to_string(),
            source: card_token.to_string(),
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
        };
        let customer = self.gateway.create_customer(&params).await?;

        user.set_stripe_customer_id(customer.id.clone());
        user.save().map_err(|e| CashierError::Persistence(Box::new(e)))?;

        tracing::info!(customer_id = %customer.id, "Linked user to Stripe customer");
        Ok(LinkOutcome::Linked(customer))
    }

    /// Charge `user` `amount` minor units in the configured currency.
    ///
    /// The user's customer id is sent when present; Stripe decides whether
    /// the charge can go through.
    ///
    /// # Errors
    ///
    /// Returns [`CashierError::Stripe`] if Stripe rejects the charge.
    pub async fn create_charge<U: ChargeableUser>(
        &self,
        user: &U,
        amount: i64,
        description: &str,
    ) -> Result<Charge> {
        let params = ChargeParams {
            amount,
            currency: self.currency.clone(),
            description: description.to_string(),
            customer: user.stripe_customer_id().cloned(),
        };

        tracing::debug!(
            amount = params.amount,
            currency = %params.currency,
            customer_id = ?params.customer,
            "Creating Stripe charge"
        );
        Ok(self.gateway.create_charge(&params).await?)
    }

    /// Subscribe `user` to `plan`.
    ///
    /// # Errors
    ///
    /// - [`CashierError::InvalidInput`] if the user has not been linked to a
    ///   Stripe customer yet (nothing is sent).
    /// - [`CashierError::Stripe`] if subscription creation fails.
    pub async fn create_subscription<U: ChargeableUser>(
        &self,
        user: &U,
        plan: &PlanId,
    ) -> Result<Subscription> {
        let customer = user.stripe_customer_id().cloned().ok_or_else(|| {
            CashierError::InvalidInput(
                "user has no Stripe customer id; call link_user_to_customer first".into(),
            )
        })?;

        let params = SubscriptionParams {
            customer,
            plan: plan.clone(),
        };
        let subscription = self.gateway.create_subscription(&params).await?;

        tracing::info!(
            subscription_id = %subscription.id,
            customer_id = %params.customer,
            plan_id = %params.plan,
            "Created Stripe subscription"
        );
        Ok(subscription)
    }
}
