//! Customer donuts read model: per-customer totals and kinds ordered.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use domain::{Delivery, DonutKind};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};

/// What one customer has received so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerActivity {
    pub name: String,
    pub total_donuts: u64,
    pub kinds: BTreeSet<DonutKind>,
}

/// Read model view of donuts delivered per customer.
///
/// Customers keep the order in which they were first seen, either through
/// [`CustomerDonutsView::register_customer`] or through their first delivery.
#[derive(Debug, Clone, Default)]
pub struct CustomerDonutsView {
    customers: Vec<CustomerActivity>,
    index: HashMap<String, usize>,
    position: ProjectionPosition,
}

impl CustomerDonutsView {
    /// Creates a new empty customer donuts view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a customer with no deliveries yet, keeping registration order.
    pub fn register_customer(&mut self, name: &str) {
        self.slot(name);
    }

    /// Gets activity for a specific customer.
    pub fn get_customer(&self, name: &str) -> Option<&CustomerActivity> {
        self.index.get(name).map(|&i| &self.customers[i])
    }

    /// Gets every customer, in registration order.
    pub fn customers(&self) -> &[CustomerActivity] {
        &self.customers
    }

    /// Returns the customer with the most donuts delivered.
    ///
    /// The earliest-registered customer wins a tie.
    pub fn top_customer(&self) -> Option<&CustomerActivity> {
        self.customers.iter().fold(None, |best, candidate| match best {
            Some(b) if b.total_donuts >= candidate.total_donuts => Some(b),
            _ => Some(candidate),
        })
    }

    /// Groups customer names under every kind they have ordered.
    ///
    /// A customer appears under each kind they ordered, in registration order.
    pub fn customers_by_kind(&self) -> BTreeMap<DonutKind, Vec<&str>> {
        let mut groups: BTreeMap<DonutKind, Vec<&str>> = BTreeMap::new();
        for customer in &self.customers {
            for kind in &customer.kinds {
                groups.entry(*kind).or_default().push(&customer.name);
            }
        }
        groups
    }

    fn slot(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.customers.len();
        self.customers.push(CustomerActivity {
            name: name.to_string(),
            total_donuts: 0,
            kinds: BTreeSet::new(),
        });
        self.index.insert(name.to_string(), slot);
        slot
    }
}

impl Projection for CustomerDonutsView {
    fn name(&self) -> &'static str {
        "CustomerDonutsView"
    }

    fn handle(&mut self, delivery: &Delivery) {
        let slot = self.slot(delivery.customer_name());
        let activity = &mut self.customers[slot];
        activity.total_donuts += delivery.total_donuts();
        activity
            .kinds
            .extend(delivery.donuts().iter().map(|donut| donut.kind));
        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }

    fn reset(&mut self) {
        self.customers.clear();
        self.index.clear();
        self.position = ProjectionPosition::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::DonutShop;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_totals_and_kinds_per_customer() {
        let mut shop = DonutShop::new();
        shop.deliver_order("Ted Smith", date(), "BC:2,G:1").unwrap();
        shop.deliver_order("Ted Smith", date(), "J:3").unwrap();

        let mut view = CustomerDonutsView::new();
        view.catch_up(shop.deliveries());

        let ted = view.get_customer("Ted Smith").unwrap();
        assert_eq!(ted.total_donuts, 6);
        assert_eq!(
            ted.kinds.iter().copied().collect::<Vec<_>>(),
            vec![DonutKind::BostonCream, DonutKind::Glazed, DonutKind::Jelly]
        );
    }

    #[test]
    fn test_top_customer_tie_goes_to_first_registered() {
        let mut shop = DonutShop::new();
        shop.deliver_order("Mary Williams", date(), "G:2").unwrap();
        shop.deliver_order("Ted Smith", date(), "BC:2").unwrap();

        let mut view = CustomerDonutsView::new();
        view.catch_up(shop.deliveries());

        assert_eq!(view.top_customer().unwrap().name, "Mary Williams");
    }

    #[test]
    fn test_registered_customer_without_deliveries_counts_as_zero() {
        let mut view = CustomerDonutsView::new();
        view.register_customer("Window Shopper");

        let top = view.top_customer().unwrap();
        assert_eq!(top.name, "Window Shopper");
        assert_eq!(top.total_donuts, 0);
        assert!(view.customers_by_kind().is_empty());
    }

    #[test]
    fn test_empty_view_has_no_top_customer() {
        assert!(CustomerDonutsView::new().top_customer().is_none());
    }

    #[test]
    fn test_customers_by_kind_is_multi_valued() {
        let mut shop = DonutShop::new();
        shop.deliver_order("Ted Smith", date(), "BC:1,G:1").unwrap();
        shop.deliver_order("Mary Williams", date(), "G:1").unwrap();

        let mut view = CustomerDonutsView::new();
        view.catch_up(shop.deliveries());
        let groups = view.customers_by_kind();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&DonutKind::BostonCream], vec!["Ted Smith"]);
        assert_eq!(groups[&DonutKind::Glazed], vec!["Ted Smith", "Mary Williams"]);
    }
}
