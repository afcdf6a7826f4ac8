//! Cashier configuration.

use serde::Deserialize;
use std::path::Path;

use cashier_stripe::{ClientOptions, DEFAULT_API_BASE};

use crate::error::{CashierError, Result};

/// Default currency for charges and new plans.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Paths searched for a Stripe secrets file when no key is in the environment.
const SECRET_PATHS: [&str; 2] = [".secrets/stripe.json", "../.secrets/stripe.json"];

/// Cashier configuration.
#[derive(Clone)]
pub struct CashierConfig {
    /// Stripe secret API key.
    pub api_key: String,

    /// Stripe API base URL (default: `https://api.stripe.com/v1`).
    pub api_base: String,

    /// Currency used for charges and new plans (default: "usd").
    pub currency: String,

    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for CashierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashierConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
}

impl CashierConfig {
    /// Configuration with default values for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timeout_seconds: 30,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the currency (stored lowercase, as Stripe reports it).
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }

    /// Load configuration from environment variables and secrets files.
    ///
    /// The key is read from `STRIPE_API_KEY` (or `STRIPE_SECRET_KEY`), falling
    /// back to `.secrets/stripe.json`. Blank values are skipped. `STRIPE_API_BASE`,
    /// `CASHIER_CURRENCY` and `CASHIER_TIMEOUT_SECONDS` override the defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key can be found.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), &SECRET_PATHS[..])
    }

    /// Resolve configuration through `lookup` (an environment reader) and the
    /// given secrets-file search paths.
    fn from_lookup<F, P>(lookup: F, secret_paths: &[P]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        P: AsRef<Path>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = var("STRIPE_API_KEY")
            .or_else(|| var("STRIPE_SECRET_KEY"))
            .or_else(|| load_api_key_from_secrets(secret_paths))
            .ok_or_else(|| {
                CashierError::Configuration(
                    "STRIPE_API_KEY not set and no .secrets/stripe.json found".into(),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Some(api_base) = var("STRIPE_API_BASE") {
            config.api_base = api_base;
        }
        if let Some(currency) = var("CASHIER_CURRENCY") {
            config = config.with_currency(currency);
        }
        if let Some(timeout) = var("CASHIER_TIMEOUT_SECONDS").and_then(|s| s.parse().ok()) {
            config.timeout_seconds = timeout;
        }

        tracing::debug!(config = ?config, "Cashier configuration loaded");
        Ok(config)
    }

    /// Load configuration from a JSON secrets file (`{"api_key": "sk_..."}`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CashierError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: StripeSecrets = serde_json::from_str(&contents).map_err(|e| {
            CashierError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;

        Ok(Self::new(secrets.api_key))
    }

    /// HTTP client options derived from this configuration.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            api_base: self.api_base.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

fn load_api_key_from_secrets<P: AsRef<Path>>(paths: &[P]) -> Option<String> {
    paths.iter().find_map(|path| {
        let path = path.as_ref();
        let config = CashierConfig::from_secrets_file(path).ok()?;
        if config.api_key.trim().is_empty() {
            return None;
        }
        tracing::info!(path = %path.display(), "Loaded Stripe secrets from file");
        Some(config.api_key)
    })
}
