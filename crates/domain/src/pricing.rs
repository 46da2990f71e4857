//! Tiered per-donut pricing.
//!
//! The unit price of every donut in an order depends on the order's total
//! size, not on the kinds ordered.

use std::ops::RangeInclusive;

use crate::error::ShopError;
use crate::money::Money;

const SINGLE: u64 = 1;
const DOUBLE: u64 = 2;
const HALF_DOZEN: u64 = 6;
const DOZEN: u64 = 12;
const BAKERS_DOZEN: u64 = 13;

/// A contiguous range of order sizes sharing one unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTier {
    pub order_sizes: RangeInclusive<u64>,
    pub unit_price: Money,
}

impl PriceTier {
    const fn new(start: u64, end: u64, cents: i64) -> Self {
        Self {
            order_sizes: RangeInclusive::new(start, end),
            unit_price: Money::from_cents(cents),
        }
    }

    /// Returns true if an order of `order_size` donuts falls in this tier.
    pub fn covers(&self, order_size: u64) -> bool {
        self.order_sizes.contains(&order_size)
    }
}

/// The shop's price list, ordered by range.
pub const PRICE_TIERS: [PriceTier; 5] = [
    PriceTier::new(0, SINGLE, 150),
    PriceTier::new(DOUBLE, HALF_DOZEN - 1, 135),
    PriceTier::new(HALF_DOZEN, DOZEN - 1, 125),
    PriceTier::new(DOZEN, DOZEN, 100),
    PriceTier::new(BAKERS_DOZEN, DOZEN * 100, 95),
];

/// Returns the unit price for an order of `order_size` donuts.
///
/// First matching tier wins.
pub fn price_for(order_size: u64) -> Result<Money, ShopError> {
    PRICE_TIERS
        .iter()
        .find(|tier| tier.covers(order_size))
        .map(|tier| tier.unit_price)
        .ok_or(ShopError::UnsatisfiableOrder { order_size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0, 150),
            (1, 150),
            (2, 135),
            (5, 135),
            (6, 125),
            (11, 125),
            (12, 100),
            (13, 95),
            (1200, 95),
        ];
        for (size, cents) in cases {
            assert_eq!(price_for(size), Ok(Money::from_cents(cents)), "size {size}");
        }
    }

    #[test]
    fn test_oversized_order_is_unsatisfiable() {
        assert_eq!(
            price_for(1201),
            Err(ShopError::UnsatisfiableOrder { order_size: 1201 })
        );
    }

    #[test]
    fn test_price_never_increases_with_size() {
        let mut previous = price_for(0).unwrap();
        for size in 1..=1200 {
            let price = price_for(size).unwrap();
            assert!(price <= previous, "price rose at size {size}");
            previous = price;
        }
    }

    #[test]
    fn test_tiers_are_contiguous() {
        for pair in PRICE_TIERS.windows(2) {
            assert_eq!(pair[0].order_sizes.end() + 1, *pair[1].order_sizes.start());
        }
    }
}
