//! Read models and reports over the donut shop's delivery history.
//!
//! - [`Projection`] trait for folding deliveries into read models
//! - [`ProjectionProcessor`] for feeding the delivery log to several projections
//! - Four views: donut sales, daily revenue, customer donuts, price statistics
//! - [`ShopReports`] extension trait answering the shop's reporting queries

pub mod processor;
pub mod projection;
pub mod reports;
pub mod views;

pub use processor::ProjectionProcessor;
pub use projection::{Projection, ProjectionPosition};
pub use reports::ShopReports;
pub use views::{
    CustomerActivity, CustomerDonutsView, DailyRevenueView, DonutSales, DonutSalesView,
    PriceStatistics, PriceStatisticsView,
};
