//! Donut sales read model: delivered donuts counted per kind.

use std::collections::BTreeMap;

use domain::{Delivery, DonutKind};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};

/// How many donuts of one kind have been delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonutSales {
    pub kind: DonutKind,
    pub count: u64,
}

/// Read model view counting delivered donuts by kind.
#[derive(Debug, Clone, Default)]
pub struct DonutSalesView {
    sold: BTreeMap<DonutKind, u64>,
    position: ProjectionPosition,
}

impl DonutSalesView {
    /// Creates a new empty donut sales view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many donuts of `kind` have been delivered.
    pub fn sold(&self, kind: DonutKind) -> u64 {
        self.sold.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the number of kinds with at least one delivery.
    pub fn kind_count(&self) -> usize {
        self.sold.len()
    }

    /// Returns the `limit` best-selling kinds, highest count first.
    ///
    /// Equal counts are ordered by kind declaration order.
    pub fn top(&self, limit: usize) -> Vec<DonutSales> {
        let mut sales: Vec<_> = self
            .sold
            .iter()
            .map(|(&kind, &count)| DonutSales { kind, count })
            .collect();
        // Stable sort keeps the map's kind order among ties.
        sales.sort_by(|a, b| b.count.cmp(&a.count));
        sales.truncate(limit);
        sales
    }
}

impl Projection for DonutSalesView {
    fn name(&self) -> &'static str {
        "DonutSalesView"
    }

    fn handle(&mut self, delivery: &Delivery) {
        for donut in delivery.donuts() {
            *self.sold.entry(donut.kind).or_insert(0) += 1;
        }
        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }

    fn reset(&mut self) {
        self.sold.clear();
        self.position = ProjectionPosition::zero();
    }
}
