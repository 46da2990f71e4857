//! The summary report printed by the `donut-shop` binary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{DonutKind, DonutShop, Money};
use projections::{
    CustomerActivity, CustomerDonutsView, DailyRevenueView, DonutSales, DonutSalesView,
    PriceStatistics, PriceStatisticsView, ProjectionProcessor,
};
use serde::Serialize;

/// Every report the shop offers, computed in one pass over its deliveries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopReport {
    pub orders: usize,
    pub deliveries: usize,
    pub top_donuts: Vec<DonutSales>,
    pub revenue_by_date: BTreeMap<NaiveDate, Money>,
    pub top_customer: Option<CustomerActivity>,
    pub customers_by_kind: BTreeMap<DonutKind, Vec<String>>,
    /// Unit price statistics over the whole delivery history.
    pub price_statistics: PriceStatistics,
}

impl ShopReport {
    /// Builds the report for `shop`, listing at most `top_n` best-selling kinds.
    #[tracing::instrument(skip(shop), fields(deliveries = shop.deliveries().len()))]
    pub fn build(shop: &DonutShop, top_n: usize) -> Self {
        let deliveries = shop.deliveries();
        let dates = deliveries.iter().map(|d| d.date());
        let (from, to) = match (dates.clone().min(), dates.max()) {
            (Some(from), Some(to)) => (from, to),
            _ => (NaiveDate::MAX, NaiveDate::MIN),
        };

        let mut sales = DonutSalesView::new();
        let mut revenue = DailyRevenueView::new();
        let mut customers = CustomerDonutsView::new();
        let mut prices = PriceStatisticsView::new(from, to);
        for customer in shop.customers() {
            customers.register_customer(customer.name());
        }

        {
            let mut processor = ProjectionProcessor::new();
            processor.register(&mut sales);
            processor.register(&mut revenue);
            processor.register(&mut customers);
            processor.register(&mut prices);
            processor.run_catch_up(deliveries);
        }

        let customers_by_kind = customers
            .customers_by_kind()
            .into_iter()
            .map(|(kind, names)| (kind, names.into_iter().map(str::to_string).collect()))
            .collect();

        Self {
            orders: shop.orders().len(),
            deliveries: deliveries.len(),
            top_donuts: sales.top(top_n),
            revenue_by_date: revenue.daily_totals().clone(),
            top_customer: customers.top_customer().cloned(),
            customers_by_kind,
            price_statistics: prices.statistics(),
        }
    }
}
