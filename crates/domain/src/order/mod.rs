//! Orders and the donut counts they request.

mod counts;
mod descriptor;

pub use counts::DonutCounts;

use chrono::NaiveDate;
use common::OrderId;
use serde::Serialize;

use crate::error::ShopError;

/// A customer's request for donuts on a given date.
///
/// The requested counts are fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    customer: String,
    date: NaiveDate,
    counts: DonutCounts,
}

impl Order {
    /// Creates an order from already-parsed counts.
    pub fn new(customer: impl Into<String>, date: NaiveDate, counts: DonutCounts) -> Self {
        Self {
            id: OrderId::new(),
            customer: customer.into(),
            date,
            counts,
        }
    }

    /// Creates an order by parsing a `CODE:COUNT,...` descriptor.
    pub fn parse(
        customer: impl Into<String>,
        date: NaiveDate,
        descriptor: &str,
    ) -> Result<Self, ShopError> {
        let counts = DonutCounts::parse(descriptor)?;
        Ok(Self::new(customer, date, counts))
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the name of the customer who placed the order.
    pub fn customer_name(&self) -> &str {
        &self.customer
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the requested counts.
    pub fn counts(&self) -> &DonutCounts {
        &self.counts
    }

    /// Returns the total number of donuts requested across all kinds.
    pub fn total_donuts(&self) -> u64 {
        self.counts.total()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order(customer=Customer(name='{}'), date={}, counts={})",
            self.customer, self.date, self.counts
        )
    }
}
