//! Clonable async handle around a shared [`DonutShop`].

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{Delivery, DonutCounts, DonutKind, DonutShop};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::intake::OrderLine;
use crate::report::ShopReport;

/// Tally of an intake run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntakeSummary {
    pub delivered: usize,
    pub rejected: usize,
    pub skipped: usize,
}

/// Shared donut shop.
///
/// Mutations take the write lock; reports take the read lock. Clones share
/// the same shop.
#[derive(Clone, Default)]
pub struct SharedShop {
    shop: Arc<RwLock<DonutShop>>,
}

impl SharedShop {
    /// Creates a shop with empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shop seeded with `stock`.
    pub fn with_stock(stock: &DonutCounts) -> Self {
        Self {
            shop: Arc::new(RwLock::new(DonutShop::with_stock(stock))),
        }
    }

    /// Adds `count` donuts of `kind` to inventory.
    #[tracing::instrument(skip(self))]
    pub async fn restock(&self, kind: DonutKind, count: u64) {
        self.shop.write().await.restock(kind, count);
    }

    /// Takes and fills an order.
    #[tracing::instrument(skip(self))]
    pub async fn deliver_order(
        &self,
        customer_name: &str,
        date: NaiveDate,
        descriptor: &str,
    ) -> Result<Arc<Delivery>> {
        let delivery = self
            .shop
            .write()
            .await
            .deliver_order(customer_name, date, descriptor)?;
        Ok(delivery)
    }

    /// Fills the order described by an intake line.
    pub async fn submit(&self, line: &OrderLine) -> Result<Arc<Delivery>> {
        self.deliver_order(&line.customer, line.date, &line.descriptor)
            .await
    }

    /// Reads order lines from `reader` and fills each one.
    ///
    /// A line that cannot be parsed or filled is logged and counted as
    /// rejected; intake carries on with the next line. Only read failures
    /// stop the run.
    #[tracing::instrument(skip_all)]
    pub async fn ingest<R>(&self, reader: R) -> Result<IntakeSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut summary = IntakeSummary::default();
        let mut lines = reader.lines();
        let mut line_number = 0usize;

        while let Some(raw) = lines.next_line().await? {
            line_number += 1;
            let outcome = match OrderLine::parse(&raw) {
                Ok(None) => {
                    summary.skipped += 1;
                    continue;
                }
                Ok(Some(line)) => self.submit(&line).await.map(|_| ()),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(()) => summary.delivered += 1,
                Err(err) => {
                    summary.rejected += 1;
                    tracing::warn!(line = line_number, error = %err, "order line rejected");
                }
            }
        }

        tracing::info!(
            delivered = summary.delivered,
            rejected = summary.rejected,
            "intake complete"
        );
        Ok(summary)
    }

    /// Returns a copy of the current inventory.
    pub async fn inventory(&self) -> DonutCounts {
        self.shop.read().await.inventory().clone()
    }

    /// Returns the number of deliveries made so far.
    pub async fn delivery_count(&self) -> usize {
        self.shop.read().await.deliveries().len()
    }

    /// Builds the full shop report.
    pub async fn report(&self, top_n: usize) -> ShopReport {
        let shop = self.shop.read().await;
        ShopReport::build(&shop, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use domain::{Money, ShopError};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_restock_and_deliver() {
        let shop = SharedShop::new();
        shop.restock(DonutKind::Glazed, 5).await;

        let delivery = shop.deliver_order("Ted Smith", date(), "G:2").await.unwrap();
        assert_eq!(delivery.total_price(), Money::from_cents(270));
        assert_eq!(
            shop.inventory().await.occurrences_of(DonutKind::Glazed),
            3
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let shop = SharedShop::new();
        let other = shop.clone();
        other.deliver_order("Ted Smith", date(), "BC:1").await.unwrap();

        assert_eq!(shop.delivery_count().await, 1);
    }

    #[tokio::test]
    async fn test_rejection_surfaces_shop_error() {
        let shop = SharedShop::new();
        let err = shop
            .deliver_order("Ted Smith", date(), "XX:1")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Shop(ShopError::UnknownCode { .. })
        ));
    }

    #[tokio::test]
    async fn test_ingest_counts_outcomes() {
        let input = "\
# morning orders
2024-03-15;Ted Smith;BC:2,BA:1,B:2

2024-03-15;Mary Williams;BC:1,G:1
2024-03-15;Bad Order;QQ:1
not a line
";
        let shop = SharedShop::new();
        let summary = shop.ingest(input.as_bytes()).await.unwrap();

        assert_eq!(
            summary,
            IntakeSummary {
                delivered: 2,
                rejected: 2,
                skipped: 2,
            }
        );
        assert_eq!(shop.delivery_count().await, 2);
    }
}
