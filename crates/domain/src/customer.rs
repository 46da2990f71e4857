//! Customers and their delivery history.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::catalog::DonutKind;
use crate::delivery::Delivery;

/// A customer of the shop, identified by name.
///
/// Two customers with the same name are the same customer.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    deliveries: Vec<Arc<Delivery>>,
}

impl Customer {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deliveries: Vec::new(),
        }
    }

    pub(crate) fn record_delivery(&mut self, delivery: Arc<Delivery>) {
        self.deliveries.push(delivery);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the customer's name is exactly `name`.
    pub fn named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Returns the deliveries made to this customer, oldest first.
    pub fn deliveries(&self) -> &[Arc<Delivery>] {
        &self.deliveries
    }

    pub fn total_donuts_ordered(&self) -> u64 {
        self.deliveries.iter().map(|d| d.total_donuts()).sum()
    }

    /// Returns every kind this customer has received at least one of.
    pub fn donut_kinds_ordered(&self) -> BTreeSet<DonutKind> {
        self.deliveries
            .iter()
            .flat_map(|d| d.donuts().iter().map(|donut| donut.kind))
            .collect()
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Customer(name='{}')", self.name)
    }
}
