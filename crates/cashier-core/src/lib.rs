//! Core types for cashier.
//!
//! This crate provides the types shared by the Stripe gateway and the
//! `Cashier` facade:
//!
//! - **Identifiers**: `CustomerId`, `PlanId`, `ProductId`, `ChargeId`, `SubscriptionId`
//! - **Stripe objects**: `Customer`, `Charge`, `Plan`, `Subscription`, `List`
//! - **Plans**: `PlanInterval`, `PlanCriteria`
//! - **Request parameters**: `CustomerParams`, `ChargeParams`, `PlanListParams`, ...
//! - **Collaborators**: `ChargeableUser`
//!
//! # Amounts
//!
//! All amounts are `i64` in minor currency units (cents for USD), exactly as
//! Stripe transmits them. Nothing here does arithmetic on money.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;
pub mod params;
pub mod plan;
pub mod types;
pub mod user;

pub use ids::{ChargeId, CustomerId, IdError, PlanId, ProductId, SubscriptionId};
pub use params::{
    ChargeParams, CustomerParams, PlanListParams, PlanParams, SubscriptionParams, MAX_PAGE_SIZE,
};
pub use plan::{ParseIntervalError, Plan, PlanCriteria, PlanInterval};
pub use types::{Charge, Customer, List, Subscription};
pub use user::ChargeableUser;
