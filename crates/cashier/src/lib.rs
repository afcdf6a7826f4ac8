//! Cashier: Stripe billing for application users.
//!
//! Links local users to Stripe customers, charges them, and manages
//! subscription plans. All payment logic lives in Stripe; this crate shapes
//! parameters, validates the few things that must be checked locally, and
//! passes Stripe's errors through unchanged.
//!
//! # Example
//!
//! ```no_run
//! use cashier::{Cashier, CashierConfig, PlanCriteria};
//!
//! # async fn example() -> Result<(), cashier::CashierError> {
//! let cashier = Cashier::from_config(&CashierConfig::from_env()?)?;
//!
//! let product = "prod_123".parse().unwrap();
//! match cashier.find_plan(&product, &PlanCriteria::new(2000, "month")).await? {
//!     Some(plan) => println!("reusing plan {}", plan.id),
//!     None => println!("no matching plan"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cashier;
pub mod config;
pub mod error;
mod plans;

pub use crate::cashier::{Cashier, LinkOutcome};
pub use config::CashierConfig;
pub use error::{CashierError, Result};
pub use plans::PlanSpec;

pub use cashier_core::{
    Charge, ChargeableUser, Customer, CustomerId, Plan, PlanCriteria, PlanId, PlanInterval,
    ProductId, Subscription,
};
pub use cashier_stripe::{PaymentGateway, StripeClient, StripeError};
