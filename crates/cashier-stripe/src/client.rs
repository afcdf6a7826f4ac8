//! Stripe API client implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use cashier_core::{
    Charge, ChargeParams, Customer, CustomerParams, List, Plan, PlanListParams, PlanParams,
    Subscription, SubscriptionParams,
};

use crate::error::StripeError;
use crate::gateway::PaymentGateway;
use crate::wire::{self, Form, StripeErrorResponse};

/// Stripe API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// Stripe API client.
///
/// The secret key is scoped to this instance and sent as the basic-auth
/// username on every request.
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    /// Create a new Stripe client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StripeError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a new Stripe client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, StripeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(StripeError::Configuration(
                "Stripe API key must not be empty".into(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base: options.api_base.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, form: &Form) -> Result<T, StripeError> {
        tracing::debug!(method = "POST", path = %path, "Sending Stripe request");

        let response = self
            .client
            .post(format!("{}{}", self.api_base, path))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .form(form)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &Form) -> Result<T, StripeError> {
        tracing::debug!(method = "GET", path = %path, "Sending Stripe request");

        let response = self
            .client
            .get(format!("{}{}", self.api_base, path))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .query(query)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        match serde_json::from_str::<StripeErrorResponse>(&body) {
            Ok(stripe_error) => {
                tracing::debug!(
                    status = status.as_u16(),
                    error_type = %stripe_error.error.error_type,
                    code = ?stripe_error.error.code,
                    "Stripe returned an error"
                );
                Err(StripeError::Api {
                    status: status.as_u16(),
                    error_type: stripe_error.error.error_type,
                    message: stripe_error.error.message,
                    code: stripe_error.error.code,
                    param: stripe_error.error.param,
                })
            }
            Err(_) => Err(StripeError::Api {
                status: status.as_u16(),
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
                param: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_customer(&self, params: &CustomerParams) -> Result<Customer, StripeError> {
        self.post("/customers", &wire::customer_form(params)).await
    }

    async fn create_charge(&self, params: &ChargeParams) -> Result<Charge, StripeError> {
        self.post("/charges", &wire::charge_form(params)).await
    }

    async fn list_plans(&self, params: &PlanListParams) -> Result<List<Plan>, StripeError> {
        self.get("/plans", &wire::plan_list_query(params)).await
    }

    async fn create_plan(&self, params: &PlanParams) -> Result<Plan, StripeError> {
        self.post("/plans", &wire::plan_form(params)).await
    }

    async fn create_subscription(
        &self,
        params: &SubscriptionParams,
    ) -> Result<Subscription, StripeError> {
        self.post("/subscriptions", &wire::subscription_form(params)).await
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL (default: `https://api.stripe.com/v1`).
    pub api_base: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API base, such as a local mock server.
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = StripeClient::new("sk_test_xxx").unwrap();
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn client_trims_trailing_slash() {
        let options = ClientOptions::with_api_base("http://localhost:12111/v1/");
        let client = StripeClient::with_options("sk_test_xxx", options).unwrap();
        assert_eq!(client.api_base(), "http://localhost:12111/v1");
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = StripeClient::new("  ").unwrap_err();
        assert!(matches!(err, StripeError::Configuration(_)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = StripeClient::new("sk_test_secret").unwrap();
        assert!(!format!("{client:?}").contains("sk_test_secret"));
    }
}
