//! Shared donut shop service with structured logging and Prometheus metrics.
//!
//! Wraps the single-threaded [`domain::DonutShop`] in a clonable async handle,
//! parses order lines for the `donut-shop` binary and assembles the JSON
//! report it prints.

pub mod config;
pub mod error;
pub mod intake;
pub mod report;
pub mod service;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use intake::OrderLine;
pub use report::ShopReport;
pub use service::{IntakeSummary, SharedShop};
