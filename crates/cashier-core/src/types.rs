//! Stripe object types returned by the remote API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ChargeId, CustomerId, SubscriptionId};
use crate::plan::Plan;

/// Stripe customer object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: CustomerId,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Customer name.
    #[serde(default)]
    pub name: Option<String>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

/// Stripe charge object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID.
    pub id: ChargeId,
    /// Amount in minor currency units.
    pub amount: i64,
    /// Currency (e.g., "usd").
    #[serde(default)]
    pub currency: String,
    /// Description shown on the charge.
    #[serde(default)]
    pub description: Option<String>,
    /// Customer that was charged.
    #[serde(default)]
    pub customer: Option<CustomerId>,
    /// Status (succeeded, pending, failed).
    #[serde(default)]
    pub status: String,
    /// Whether the charge succeeded or was authorized.
    #[serde(default)]
    pub paid: bool,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

impl Charge {
    /// Creation time as a UTC timestamp, if Stripe reported a valid one.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Stripe subscription object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// Subscribed customer.
    pub customer: CustomerId,
    /// Status (active, incomplete, trialing, ...).
    #[serde(default)]
    pub status: String,
    /// The plan, when the subscription has a single item.
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

/// Stripe list response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T> {
    /// Data items, in the order Stripe returned them.
    pub data: Vec<T>,
    /// Whether there are more items after the last one.
    #[serde(default)]
    pub has_more: bool,
    /// URL for the list endpoint.
    #[serde(default)]
    pub url: Option<String>,
}

impl<T> List<T> {
    /// A list holding `data` and signalling whether more pages follow.
    #[must_use]
    pub fn new(data: Vec<T>, has_more: bool) -> Self {
        Self {
            data,
            has_more,
            url: None,
        }
    }
}
