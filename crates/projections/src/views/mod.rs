//! Read model views over the shop's delivery log.

pub mod customer_donuts;
pub mod daily_revenue;
pub mod donut_sales;
pub mod price_statistics;

pub use customer_donuts::{CustomerActivity, CustomerDonutsView};
pub use daily_revenue::DailyRevenueView;
pub use donut_sales::{DonutSales, DonutSalesView};
pub use price_statistics::{PriceStatistics, PriceStatisticsView};
