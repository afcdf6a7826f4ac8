//! Stripe gateway for cashier.
//!
//! This crate provides the [`PaymentGateway`] seam and a [`StripeClient`]
//! that implements it against the Stripe REST API (form-encoded requests,
//! basic auth with the secret key).
//!
//! # Example
//!
//! ```no_run
//! use cashier_stripe::{PaymentGateway, StripeClient};
//! use cashier_core::PlanListParams;
//!
//! # async fn example() -> Result<(), cashier_stripe::StripeError> {
//! let client = StripeClient::new("sk_test_...")?;
//!
//! let page = client
//!     .list_plans(&PlanListParams::active_for_product("prod_123".parse().unwrap()))
//!     .await?;
//! println!("{} plans, more: {}", page.data.len(), page.has_more);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod gateway;
mod wire;

pub use client::{ClientOptions, StripeClient, DEFAULT_API_BASE};
pub use error::StripeError;
pub use gateway::PaymentGateway;
