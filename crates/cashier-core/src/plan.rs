//! Subscription plan types.
//!
//! A plan is a recurring billing template: an amount charged every
//! `interval_count` intervals for a given product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{PlanId, ProductId};

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    /// Billed daily.
    Day,
    /// Billed weekly.
    Week,
    /// Billed monthly.
    Month,
    /// Billed yearly.
    Year,
}

impl PlanInterval {
    /// Every interval Stripe accepts, in ascending length.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Return the wire name of the interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

/// Error returned when a string is not one of the allowed billing intervals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid interval `{0}`, expected one of: day, week, month, year")]
pub struct ParseIntervalError(pub String);

fn default_interval_count() -> u32 {
    1
}

/// Stripe plan object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,
    /// Amount in minor currency units. Stripe reports `null` for tiered plans.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Three-letter ISO currency code, lowercase.
    #[serde(default)]
    pub currency: String,
    /// Billing interval.
    pub interval: PlanInterval,
    /// Number of intervals between billings.
    #[serde(default = "default_interval_count")]
    pub interval_count: u32,
    /// Product the plan belongs to.
    pub product: ProductId,
    /// Whether the plan can be used for new subscriptions.
    #[serde(default)]
    pub active: bool,
    /// Internal display name.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

impl Plan {
    /// Creation time as a UTC timestamp, if Stripe reported a valid one.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Exact-match criteria used when looking up an existing plan.
///
/// The interval is kept as a raw string: lookup never rejects an interval,
/// an unknown one simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCriteria {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Billing interval name.
    pub interval: String,
    /// Number of intervals between billings (default: 1).
    pub interval_count: u32,
}

impl PlanCriteria {
    /// Criteria for a plan billed every single `interval`.
    #[must_use]
    pub fn new(amount: i64, interval: impl Into<String>) -> Self {
        Self {
            amount,
            interval: interval.into(),
            interval_count: default_interval_count(),
        }
    }

    /// Set the interval count.
    #[must_use]
    pub fn with_interval_count(mut self, interval_count: u32) -> Self {
        self.interval_count = interval_count;
        self
    }

    /// Whether `plan` has exactly this amount, interval and interval count.
    #[must_use]
    pub fn matches(&self, plan: &Plan) -> bool {
        plan.amount == Some(self.amount)
            && plan.interval.as_str() == self.interval
            && plan.interval_count == self.interval_count
    }
}
