//! Price statistics read model: unit prices of donuts delivered in a date range.

use chrono::NaiveDate;
use domain::{Delivery, Money};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};

/// Summary statistics over donut unit prices.
///
/// `min`, `max` and `average` are `None` until at least one price is seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceStatistics {
    pub count: u64,
    pub sum: Money,
    pub min: Option<Money>,
    pub max: Option<Money>,
    /// Mean unit price in dollars.
    pub average: Option<f64>,
}

impl PriceStatistics {
    /// Folds one unit price into the statistics.
    pub fn accept(&mut self, price: Money) {
        self.count += 1;
        self.sum += price;
        self.min = Some(self.min.map_or(price, |m| m.min(price)));
        self.max = Some(self.max.map_or(price, |m| m.max(price)));
        self.average = Some(self.sum.as_dollars_f64() / self.count as f64);
    }

    /// Returns true if no prices have been seen.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Read model view of unit prices for deliveries dated within `from..=to`.
#[derive(Debug, Clone)]
pub struct PriceStatisticsView {
    from: NaiveDate,
    to: NaiveDate,
    statistics: PriceStatistics,
    position: ProjectionPosition,
}

impl PriceStatisticsView {
    /// Creates a view over deliveries dated from `from` to `to`, inclusive.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            statistics: PriceStatistics::default(),
            position: ProjectionPosition::zero(),
        }
    }

    pub fn statistics(&self) -> PriceStatistics {
        self.statistics
    }

    fn covers(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl Projection for PriceStatisticsView {
    fn name(&self) -> &'static str {
        "PriceStatisticsView"
    }

    fn handle(&mut self, delivery: &Delivery) {
        if self.covers(delivery.date()) {
            for donut in delivery.donuts() {
                self.statistics.accept(donut.unit_price);
            }
        }
        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }

    fn reset(&mut self) {
        self.statistics = PriceStatistics::default();
        self.position = ProjectionPosition::zero();
    }
}
