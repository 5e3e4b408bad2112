use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, info};
use validator::{Validate, ValidationError};

use crate::services::pricing::PricingPolicy;
use crate::services::shop::ShopSettings;
use crate::services::warranties::WarrantyPolicy;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "APP";
const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 30;
const DEFAULT_BUSY_THRESHOLD: f64 = 0.8;
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Subscription pricing configuration
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Monthly base fee per shop, covering the first bay
    #[serde(default = "default_base_price")]
    #[validate(custom = "validate_non_negative_amount")]
    pub base_price: Decimal,

    /// Monthly fee for every bay after the first
    #[serde(default = "default_per_bay_price")]
    #[validate(custom = "validate_non_negative_amount")]
    pub per_bay_price: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: default_base_price(),
            per_bay_price: default_per_bay_price(),
        }
    }
}

/// Warranty classification configuration
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WarrantyConfig {
    /// Days before expiration at which a warranty counts as expiring (inclusive)
    #[serde(default = "default_expiring_window_days")]
    #[validate(range(min = 0, max = 3650))]
    pub expiring_window_days: i64,
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: default_expiring_window_days(),
        }
    }
}

/// Per-shop operating configuration
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ShopConfig {
    /// Hourly labor rate
    #[serde(default = "default_labor_rate")]
    #[validate(custom = "validate_non_negative_amount")]
    pub labor_rate: Decimal,

    /// Sales tax rate (as decimal, e.g., 0.0825 for 8.25%)
    #[serde(default = "default_tax_rate")]
    #[validate(custom = "validate_tax_rate")]
    pub tax_rate: Decimal,

    /// Symbol prefixed to formatted amounts
    #[serde(default = "default_currency_symbol")]
    #[validate(length(min = 1, max = 4))]
    pub currency_symbol: String,

    /// Bay utilization at which an open shop is reported as busy
    #[serde(default = "default_busy_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub busy_threshold: f64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            labor_rate: default_labor_rate(),
            tax_rate: default_tax_rate(),
            currency_symbol: default_currency_symbol(),
            busy_threshold: default_busy_threshold(),
        }
    }
}

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    #[serde(default)]
    #[validate]
    pub pricing: PricingConfig,

    #[serde(default)]
    #[validate]
    pub warranty: WarrantyConfig,

    #[serde(default)]
    #[validate]
    pub shop: ShopConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            pricing: PricingConfig::default(),
            warranty: WarrantyConfig::default(),
            shop: ShopConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy::new(self.pricing.base_price, self.pricing.per_bay_price)
    }

    pub fn warranty_policy(&self) -> WarrantyPolicy {
        WarrantyPolicy {
            expiring_window_days: self.warranty.expiring_window_days,
        }
    }

    /// Logs the effective settings. Call once a subscriber is installed.
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            base_price = %self.pricing.base_price,
            per_bay_price = %self.pricing.per_bay_price,
            expiring_window_days = self.warranty.expiring_window_days,
            tax_rate = %self.shop.tax_rate,
            "Configuration loaded"
        );
    }

    pub fn shop_settings(&self) -> ShopSettings {
        ShopSettings {
            labor_rate: self.shop.labor_rate,
            tax_rate: self.shop.tax_rate,
            currency_symbol: self.shop.currency_symbol.clone(),
            busy_threshold: self.shop.busy_threshold,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl From<AppConfigError> for crate::errors::ServiceError {
    fn from(err: AppConfigError) -> Self {
        crate::errors::ServiceError::ConfigError(err.to_string())
    }
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_base_price() -> Decimal {
    dec!(149)
}

fn default_per_bay_price() -> Decimal {
    dec!(29)
}

fn default_expiring_window_days() -> i64 {
    DEFAULT_EXPIRING_WINDOW_DAYS
}

fn default_labor_rate() -> Decimal {
    dec!(125)
}

fn default_tax_rate() -> Decimal {
    dec!(0.0825)
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_busy_threshold() -> f64 {
    DEFAULT_BUSY_THRESHOLD
}

fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        let mut err = ValidationError::new("non_negative_amount");
        err.message = Some("amounts must not be negative".into());
        return Err(err);
    }
    Ok(())
}

fn validate_tax_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < Decimal::ZERO || *rate > Decimal::ONE {
        let mut err = ValidationError::new("tax_rate");
        err.message = Some("tax_rate must be between 0.0 and 1.0".into());
        return Err(err);
    }
    Ok(())
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("shopdesk={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    // Logs go to stderr so command output on stdout stays machine-readable.
    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Loads configuration from `config/` and `APP__*` environment variables.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    debug!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        debug!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Loads `<dir>/default` and `<dir>/<run_env>` (both optional), then environment overrides.
pub fn load_config_from(dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    let config = Config::builder()
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(run_env)).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    debug!("Configuration loaded successfully");
    Ok(app_config)
}
