//! Application configuration loaded from environment variables.

use domain::DonutCounts;

use crate::error::{Result, ServiceError};

/// Shop configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DONUT_SHOP_OPENING_STOCK`: stock seeded at start, as `CODE:COUNT,...` (default: empty)
/// - `DONUT_SHOP_TOP_N`: entries in the report's top-donuts list (default: `2`)
/// - `DONUT_SHOP_RENDER_METRICS`: `true` or `1` to print metrics after the report (default: off)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub opening_stock: String,
    pub top_n: usize,
    pub render_metrics: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            opening_stock: lookup("DONUT_SHOP_OPENING_STOCK").unwrap_or(defaults.opening_stock),
            top_n: lookup("DONUT_SHOP_TOP_N")
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(defaults.top_n),
            render_metrics: lookup("DONUT_SHOP_RENDER_METRICS")
                .map(|flag| matches!(flag.trim(), "true" | "1"))
                .unwrap_or(defaults.render_metrics),
        }
    }

    /// Parses the configured opening stock.
    pub fn opening_stock(&self) -> Result<DonutCounts> {
        self.opening_stock.parse().map_err(ServiceError::Config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            opening_stock: String::new(),
            top_n: 2,
            render_metrics: false,
        }
    }
}
