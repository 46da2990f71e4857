//! Daily revenue read model: delivery value summed per date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{Delivery, Money};

use crate::projection::{Projection, ProjectionPosition};

/// Read model view summing delivery value by delivery date.
#[derive(Debug, Clone, Default)]
pub struct DailyRevenueView {
    by_date: BTreeMap<NaiveDate, Money>,
    position: ProjectionPosition,
}

impl DailyRevenueView {
    /// Creates a new empty daily revenue view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total value of deliveries made on `date`.
    pub fn value_for(&self, date: NaiveDate) -> Money {
        self.by_date.get(&date).copied().unwrap_or_default()
    }

    /// Returns every date with deliveries and its total, oldest first.
    pub fn daily_totals(&self) -> &BTreeMap<NaiveDate, Money> {
        &self.by_date
    }

    /// Returns the earliest and latest delivery dates, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((*first, *last))
    }
}

impl Projection for DailyRevenueView {
    fn name(&self) -> &'static str {
        "DailyRevenueView"
    }

    fn handle(&mut self, delivery: &Delivery) {
        *self.by_date.entry(delivery.date()).or_default() += delivery.total_price();
        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }

    fn reset(&mut self) {
        self.by_date.clear();
        self.position = ProjectionPosition::zero();
    }
}
