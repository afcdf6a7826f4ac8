//! Identifier types for Stripe objects.
//!
//! Stripe identifiers are opaque strings (`cus_...`, `plan_...`, `prod_...`).
//! They are wrapped in newtypes so that a customer id can never be passed
//! where a plan id is expected. The prefix is not checked: Stripe owns the
//! format, and test fixtures routinely use arbitrary ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define an opaque string identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as string, rejecting empty input)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`, `AsRef<str>`
macro_rules! stripe_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.to_string().try_into()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.trim().is_empty() {
                    return Err(IdError::Empty);
                }
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

stripe_id_type!(CustomerId, "A Stripe customer identifier (`cus_...`).\n\nThis is the remote customer id persisted on the local user record.");
stripe_id_type!(PlanId, "A Stripe plan identifier.");
stripe_id_type!(ProductId, "A Stripe product identifier (`prod_...`).");
stripe_id_type!(ChargeId, "A Stripe charge identifier (`ch_...`).");
stripe_id_type!(SubscriptionId, "A Stripe subscription identifier (`sub_...`).");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is empty or whitespace.
    #[error("identifier must not be empty")]
    Empty,
}
