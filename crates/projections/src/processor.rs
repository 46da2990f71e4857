//! Projection processor for feeding the delivery log to several projections.

use std::sync::Arc;

use domain::Delivery;

use crate::projection::Projection;

/// Delivers the shop's delivery log to a set of projections in one pass.
///
/// The processor supports:
/// - Catch-up: hands each projection the deliveries it has not yet seen
/// - Single delivery: hands a new delivery to every projection
/// - Rebuild: resets every projection and replays the log from scratch
#[derive(Default)]
pub struct ProjectionProcessor<'a> {
    projections: Vec<&'a mut dyn Projection>,
}

impl<'a> ProjectionProcessor<'a> {
    /// Creates a processor with no projections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a projection with this processor.
    pub fn register(&mut self, projection: &'a mut dyn Projection) {
        self.projections.push(projection);
    }

    /// Returns the number of registered projections.
    pub fn projection_count(&self) -> usize {
        self.projections.len()
    }

    /// Walks the log once, handing each delivery to every projection whose
    /// position is behind it.
    #[tracing::instrument(skip_all, fields(log_len = log.len()))]
    pub fn run_catch_up(&mut self, log: &[Arc<Delivery>]) {
        for (index, delivery) in log.iter().enumerate() {
            let delivery_number = index as u64 + 1;
            for projection in self.projections.iter_mut() {
                if projection.position().deliveries_processed < delivery_number {
                    projection.handle(delivery);
                    metrics::counter!("projections_deliveries_processed").increment(1);
                }
            }
        }

        tracing::debug!(
            deliveries = log.len(),
            projections = self.projections.len(),
            "catch-up complete"
        );
    }

    /// Hands a single delivery to every registered projection.
    pub fn process_delivery(&mut self, delivery: &Delivery) {
        for projection in self.projections.iter_mut() {
            projection.handle(delivery);
        }
    }

    /// Resets every projection and replays the whole log.
    #[tracing::instrument(skip_all)]
    pub fn rebuild_all(&mut self, log: &[Arc<Delivery>]) {
        for projection in self.projections.iter_mut() {
            tracing::debug!(projection = projection.name(), "resetting projection");
            projection.reset();
        }
        self.run_catch_up(log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionPosition;
    use chrono::NaiveDate;
    use domain::DonutShop;

    /// A simple counting projection for testing.
    #[derive(Default)]
    struct CountingProjection {
        count: u64,
        position: ProjectionPosition,
    }

    impl Projection for CountingProjection {
        fn name(&self) -> &'static str {
            "CountingProjection"
        }

        fn handle(&mut self, _delivery: &Delivery) {
            self.count += 1;
            self.position = self.position.advance();
        }

        fn position(&self) -> ProjectionPosition {
            self.position
        }

        fn reset(&mut self) {
            self.count = 0;
            self.position = ProjectionPosition::zero();
        }
    }

    fn shop_with_deliveries(n: usize) -> DonutShop {
        let mut shop = DonutShop::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for _ in 0..n {
            shop.deliver_order("Ted Smith", date, "G:1").unwrap();
        }
        shop
    }

    #[test]
    fn test_catch_up_processes_all_deliveries() {
        let shop = shop_with_deliveries(3);
        let mut counting = CountingProjection::default();

        let mut processor = ProjectionProcessor::new();
        processor.register(&mut counting);
        assert_eq!(processor.projection_count(), 1);
        processor.run_catch_up(shop.deliveries());

        assert_eq!(counting.count, 3);
        assert_eq!(counting.position().deliveries_processed, 3);
    }

    #[test]
    fn test_catch_up_skips_already_processed() {
        let shop = shop_with_deliveries(3);
        let mut ahead = CountingProjection::default();
        ahead.catch_up(&shop.deliveries()[..2]);
        let mut fresh = CountingProjection::default();

        let mut processor = ProjectionProcessor::new();
        processor.register(&mut ahead);
        processor.register(&mut fresh);
        processor.run_catch_up(shop.deliveries());

        assert_eq!(ahead.count, 3);
        assert_eq!(fresh.count, 3);
    }

    #[test]
    fn test_rebuild_resets_and_replays() {
        let shop = shop_with_deliveries(2);
        let mut counting = CountingProjection::default();

        let mut processor = ProjectionProcessor::new();
        processor.register(&mut counting);
        processor.run_catch_up(shop.deliveries());
        processor.process_delivery(&shop.deliveries()[0]);
        processor.rebuild_all(shop.deliveries());

        assert_eq!(counting.count, 2);
    }
}
