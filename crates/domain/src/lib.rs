//! Domain layer for the donut shop.
//!
//! This crate provides:
//! - The closed [`DonutKind`] catalog and its descriptor codes
//! - [`Order`] parsing from `CODE:COUNT` descriptors into [`DonutCounts`]
//! - Tiered per-donut pricing
//! - The [`DonutShop`] aggregate, which fills orders into [`Delivery`] records

pub mod catalog;
pub mod customer;
pub mod delivery;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod shop;

pub use catalog::DonutKind;
pub use customer::Customer;
pub use delivery::{Delivery, Donut};
pub use error::{Result, ShopError};
pub use money::Money;
pub use order::{DonutCounts, Order};
pub use pricing::{PRICE_TIERS, PriceTier, price_for};
pub use shop::DonutShop;
