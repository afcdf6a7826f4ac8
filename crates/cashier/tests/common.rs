//! Common test utilities for cashier integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use cashier::{Cashier, ChargeableUser, CustomerId, PaymentGateway, StripeError};
use cashier_core::{
    Charge, ChargeParams, Customer, CustomerParams, List, Plan, PlanInterval, PlanListParams,
    PlanParams, Subscription, SubscriptionParams,
};

/// In-memory gateway that records every request and replays scripted plan pages.
#[derive(Default)]
pub struct RecordingGateway {
    pub customer_requests: Mutex<Vec<CustomerParams>>,
    pub charge_requests: Mutex<Vec<ChargeParams>>,
    pub plan_list_requests: Mutex<Vec<PlanListParams>>,
    pub plan_requests: Mutex<Vec<PlanParams>>,
    pub subscription_requests: Mutex<Vec<SubscriptionParams>>,
    plan_pages: Mutex<VecDeque<List<Plan>>>,
    failure_status: Option<u16>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these pages, in order, to successive `list_plans` calls.
    pub fn with_plan_pages(pages: Vec<List<Plan>>) -> Self {
        Self {
            plan_pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    /// Fail every call with a Stripe API error carrying `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            failure_status: Some(status),
            ..Self::default()
        }
    }

    /// Number of requests of any kind seen so far.
    pub fn total_calls(&self) -> usize {
        self.customer_requests.lock().unwrap().len()
            + self.charge_requests.lock().unwrap().len()
            + self.plan_list_requests.lock().unwrap().len()
            + self.plan_requests.lock().unwrap().len()
            + self.subscription_requests.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), StripeError> {
        match self.failure_status {
            Some(status) => Err(StripeError::Api {
                status,
                error_type: "api_error".into(),
                message: "scripted failure".into(),
                code: Some("scripted".into()),
                param: None,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_customer(&self, params: &CustomerParams) -> Result<Customer, StripeError> {
        self.customer_requests.lock().unwrap().push(params.clone());
        self.check_failure()?;

        Ok(Customer {
            id: "cus_test_1".parse().unwrap(),
            email: Some(params.email.clone()),
            name: params.name.clone(),
            created: 1_700_000_000,
        })
    }

    async fn create_charge(&self, params: &ChargeParams) -> Result<Charge, StripeError> {
        self.charge_requests.lock().unwrap().push(params.clone());
        self.check_failure()?;

        Ok(Charge {
            id: "ch_test_1".parse().unwrap(),
            amount: params.amount,
            currency: params.currency.clone(),
            description: Some(params.description.clone()),
            customer: params.customer.clone(),
            status: "succeeded".into(),
            paid: true,
            created: 1_700_000_000,
        })
    }

    async fn list_plans(&self, params: &PlanListParams) -> Result<List<Plan>, StripeError> {
        self.plan_list_requests.lock().unwrap().push(params.clone());
        self.check_failure()?;

        Ok(self
            .plan_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| List::new(Vec::new(), false)))
    }

    async fn create_plan(&self, params: &PlanParams) -> Result<Plan, StripeError> {
        self.plan_requests.lock().unwrap().push(params.clone());
        self.check_failure()?;

        Ok(Plan {
            id: "plan_test_1".parse().unwrap(),
            amount: Some(params.amount),
            currency: params.currency.clone(),
            interval: params.interval,
            interval_count: params.interval_count,
            product: params.product.clone(),
            active: true,
            nickname: params.nickname.clone(),
            created: 1_700_000_000,
        })
    }

    async fn create_subscription(
        &self,
        params: &SubscriptionParams,
    ) -> Result<Subscription, StripeError> {
        self.subscription_requests.lock().unwrap().push(params.clone());
        self.check_failure()?;

        Ok(Subscription {
            id: "sub_test_1".parse().unwrap(),
            customer: params.customer.clone(),
            status: "active".into(),
            plan: None,
            created: 1_700_000_000,
        })
    }
}

/// Error returned by [`TestUser::save`] when told to fail.
#[derive(Debug, thiserror::Error)]
#[error("database unavailable")]
pub struct SaveError;

/// In-memory user record.
#[derive(Debug, Default)]
pub struct TestUser {
    pub email: Option<String>,
    pub customer_id: Option<CustomerId>,
    pub saves: usize,
    pub fail_save: bool,
}

impl TestUser {
    pub fn with_email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            ..Self::default()
        }
    }

    pub fn linked(customer_id: &str) -> Self {
        Self {
            email: Some("customer@example.com".to_string()),
            customer_id: Some(customer_id.parse().unwrap()),
            ..Self::default()
        }
    }
}

impl ChargeableUser for TestUser {
    type Error = SaveError;

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn stripe_customer_id(&self) -> Option<&CustomerId> {
        self.customer_id.as_ref()
    }

    fn set_stripe_customer_id(&mut self, id: CustomerId) {
        self.customer_id = Some(id);
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        if self.fail_save {
            return Err(SaveError);
        }
        self.saves += 1;
        Ok(())
    }
}

/// An active plan of `prod_1`.
pub fn plan(id: &str, amount: i64, interval: PlanInterval, interval_count: u32) -> Plan {
    Plan {
        id: id.parse().unwrap(),
        amount: Some(amount),
        currency: "usd".into(),
        interval,
        interval_count,
        product: "prod_1".parse().unwrap(),
        active: true,
        nickname: None,
        created: 1_700_000_000,
    }
}

pub fn cashier_with(gateway: RecordingGateway) -> Cashier<RecordingGateway> {
    Cashier::with_gateway(gateway)
}
