use std::str::FromStr;

use thiserror::Error;

use crate::services::pricing_service::{PricingOptions, SameDayPolicy};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_PAGE_SIZE: usize = 9;
const DEFAULT_JWT_SECRET: &str = "default_secret";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown same-day pricing policy `{0}` (expected `zero` or `minimum-one-unit`)")]
    UnknownSameDayPolicy(String),
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the API over the in-memory store.
    pub mongo_uri: Option<String>,
    pub jwt_secret: String,
    pub page_size: usize,
    pub pricing: PricingOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            mongo_uri: None,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pricing: PricingOptions::default(),
        }
    }
}

impl AppConfig {
    /// Create the config from environment variables or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let same_day_policy = match std::env::var("PRICING_SAME_DAY_POLICY") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<SameDayPolicy>()
                .map_err(|_| ConfigError::UnknownSameDayPolicy(raw))?,
            _ => defaults.pricing.same_day_policy,
        };

        let page_size = match env_parsed::<usize>("CATALOG_PAGE_SIZE") {
            Some(0) => {
                log::warn!("CATALOG_PAGE_SIZE must be positive, using {}", defaults.page_size);
                defaults.page_size
            }
            Some(size) => size,
            None => defaults.page_size,
        };

        let service_fee_percent = env_parsed::<f64>("BOOKING_SERVICE_FEE_PERCENT")
            .filter(|pct| pct.is_finite() && *pct >= 0.0)
            .unwrap_or(defaults.pricing.service_fee_percent);

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                log::warn!("JWT_SECRET is not set; bearer tokens are checked against the built-in development secret");
                defaults.jwt_secret
            }
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_parsed("PORT").unwrap_or(defaults.port),
            mongo_uri: std::env::var("MONGODB_URI")
                .ok()
                .filter(|uri| !uri.trim().is_empty()),
            jwt_secret,
            page_size,
            pricing: PricingOptions {
                same_day_policy,
                service_fee_percent,
            },
        })
    }
}

impl AppConfig {
    /// True while tokens are verified with the built-in development secret.
    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring malformed {}={:?}", key, raw);
            None
        }
    }
}
