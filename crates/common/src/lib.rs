//! Shared identifier types for the donut shop workspace.

pub mod types;

pub use types::{DeliveryId, OrderId};
