//! Deliveries: the immutable record of a filled order.

use std::sync::Arc;

use chrono::NaiveDate;
use common::DeliveryId;
use serde::Serialize;

use crate::catalog::DonutKind;
use crate::money::Money;
use crate::order::{DonutCounts, Order};

/// A single priced donut handed over in a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Donut {
    pub kind: DonutKind,
    pub unit_price: Money,
}

impl Donut {
    pub fn new(kind: DonutKind, unit_price: Money) -> Self {
        Self { kind, unit_price }
    }
}

/// The donuts delivered for one order.
///
/// Only the shop's fulfillment routine creates deliveries; once created they
/// never change.
#[derive(Debug, Serialize)]
pub struct Delivery {
    id: DeliveryId,
    order: Arc<Order>,
    donuts: Vec<Donut>,
}

impl Delivery {
    pub(crate) fn new(order: Arc<Order>, donuts: Vec<Donut>) -> Self {
        Self {
            id: DeliveryId::new(),
            order,
            donuts,
        }
    }

    pub fn id(&self) -> DeliveryId {
        self.id
    }

    /// Returns the order this delivery filled.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Returns the name of the customer the delivery was made to.
    pub fn customer_name(&self) -> &str {
        self.order.customer_name()
    }

    /// Returns the delivery date, which is always the order date.
    pub fn date(&self) -> NaiveDate {
        self.order.date()
    }

    /// Returns true if the delivery was made on `date`.
    pub fn delivered_on(&self, date: NaiveDate) -> bool {
        self.date() == date
    }

    pub fn donuts(&self) -> &[Donut] {
        &self.donuts
    }

    pub fn total_donuts(&self) -> u64 {
        self.donuts.len() as u64
    }

    /// Returns the sum of every donut's unit price.
    pub fn total_price(&self) -> Money {
        self.donuts.iter().map(|d| d.unit_price).sum()
    }

    /// Returns the delivered donuts grouped back into counts per kind.
    pub fn counts(&self) -> DonutCounts {
        self.donuts.iter().map(|d| (d.kind, 1)).collect()
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Delivery(order={}, donuts={})", self.order, self.counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(descriptor: &str, cents: i64) -> Delivery {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let order = Arc::new(Order::parse("Ted Smith", date, descriptor).unwrap());
        let price = Money::from_cents(cents);
        let donuts = order
            .counts()
            .expand()
            .map(|kind| Donut::new(kind, price))
            .collect();
        Delivery::new(order, donuts)
    }

    #[test]
    fn test_totals() {
        let delivery = delivery("BC:2,BA:1,B:2", 135);
        assert_eq!(delivery.total_donuts(), 5);
        assert_eq!(delivery.total_price(), Money::from_cents(675));
        assert_eq!(delivery.customer_name(), "Ted Smith");
    }

    #[test]
    fn test_delivered_on_matches_order_date() {
        let delivery = delivery("G:1", 150);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(delivery.delivered_on(date));
        assert!(!delivery.delivered_on(date.succ_opt().unwrap()));
    }

    #[test]
    fn test_display_groups_donuts() {
        let delivery = delivery("G:1,BC:1", 135);
        assert_eq!(
            delivery.to_string(),
            "Delivery(order=Order(customer=Customer(name='Ted Smith'), date=2024-03-01, \
             counts={BOSTON_CREAM=1, GLAZED=1}), donuts={BOSTON_CREAM=1, GLAZED=1})"
        );
    }
}
