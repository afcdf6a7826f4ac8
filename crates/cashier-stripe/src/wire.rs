//! Stripe wire format: form bodies, list queries and the error envelope.

use serde::Deserialize;

use cashier_core::{ChargeParams, CustomerParams, PlanListParams, PlanParams, SubscriptionParams};

/// Form-encoded request fields, in the order they are sent.
pub(crate) type Form = Vec<(&'static str, String)>;

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorResponse {
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

pub(crate) fn customer_form(params: &CustomerParams) -> Form {
    let mut form = vec![
        ("email", params.email.clone()),
        ("source", params.source.clone()),
    ];
    if let Some(name) = &params.name {
        form.push(("name", name.clone()));
    }
    form
}

pub(crate) fn charge_form(params: &ChargeParams) -> Form {
    let mut form = vec![
        ("amount", params.amount.to_string()),
        ("currency", params.currency.clone()),
        ("description", params.description.clone()),
    ];
    if let Some(customer) = &params.customer {
        form.push(("customer", customer.to_string()));
    }
    form
}

pub(crate) fn plan_list_query(params: &PlanListParams) -> Form {
    let mut query = vec![
        ("active", params.active.to_string()),
        ("product", params.product.to_string()),
        ("limit", params.limit.to_string()),
    ];
    if let Some(cursor) = &params.starting_after {
        query.push(("starting_after", cursor.to_string()));
    }
    query
}

pub(crate) fn plan_form(params: &PlanParams) -> Form {
    let mut form = vec![
        ("amount", params.amount.to_string()),
        ("currency", params.currency.clone()),
        ("interval", params.interval.to_string()),
        ("interval_count", params.interval_count.to_string()),
        ("product", params.product.to_string()),
    ];
    if let Some(nickname) = &params.nickname {
        form.push(("nickname", nickname.clone()));
    }
    form
}

pub(crate) fn subscription_form(params: &SubscriptionParams) -> Form {
    vec![
        ("customer", params.customer.to_string()),
        ("items[0][plan]", params.plan.to_string()),
    ]
}
