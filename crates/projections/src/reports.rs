//! Reporting queries over a [`DonutShop`].
//!
//! Every report replays the shop's delivery log through a fresh view, so the
//! answers always reflect the full history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{Customer, DonutKind, DonutShop, Money};

use crate::projection::Projection;
use crate::views::{
    CustomerDonutsView, DailyRevenueView, DonutSales, DonutSalesView, PriceStatistics,
    PriceStatisticsView,
};

/// Read-side queries answered from a shop's delivery history.
pub trait ShopReports {
    /// The `n` most delivered kinds, highest count first.
    fn top_donuts(&self, n: usize) -> Vec<DonutSales>;

    /// Total value of the deliveries made on `date`.
    fn total_delivery_value_for(&self, date: NaiveDate) -> Money;

    /// The customer with the most donuts delivered, if any customer exists.
    fn top_customer(&self) -> Option<&Customer>;

    /// Customers grouped under every kind they have ordered.
    fn customers_by_donut_types_ordered(&self) -> BTreeMap<DonutKind, Vec<&Customer>>;

    /// Unit price statistics for donuts delivered from `from` to `to`, inclusive.
    fn donut_price_statistics(&self, from: NaiveDate, to: NaiveDate) -> PriceStatistics;
}

impl ShopReports for DonutShop {
    fn top_donuts(&self, n: usize) -> Vec<DonutSales> {
        let mut view = DonutSalesView::new();
        view.catch_up(self.deliveries());
        view.top(n)
    }

    fn total_delivery_value_for(&self, date: NaiveDate) -> Money {
        let mut view = DailyRevenueView::new();
        view.catch_up(self.deliveries());
        view.value_for(date)
    }

    fn top_customer(&self) -> Option<&Customer> {
        let view = customer_view(self);
        let top = view.top_customer()?;
        self.customer(&top.name)
    }

    fn customers_by_donut_types_ordered(&self) -> BTreeMap<DonutKind, Vec<&Customer>> {
        let view = customer_view(self);
        view.customers_by_kind()
            .into_iter()
            .map(|(kind, names)| {
                let customers = names
                    .into_iter()
                    .filter_map(|name| self.customer(name))
                    .collect();
                (kind, customers)
            })
            .collect()
    }

    fn donut_price_statistics(&self, from: NaiveDate, to: NaiveDate) -> PriceStatistics {
        let mut view = PriceStatisticsView::new(from, to);
        view.catch_up(self.deliveries());
        view.statistics()
    }
}

/// Builds a customer view that includes customers who have no deliveries yet.
fn customer_view(shop: &DonutShop) -> CustomerDonutsView {
    let mut view = CustomerDonutsView::new();
    for customer in shop.customers() {
        view.register_customer(customer.name());
    }
    view.catch_up(shop.deliveries());
    view
}
