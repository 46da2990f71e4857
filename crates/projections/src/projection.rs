//! Core projection trait and position tracking.

use std::sync::Arc;

use domain::Delivery;

/// Tracks how many deliveries a projection has processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionPosition {
    /// Number of deliveries processed by this projection.
    pub deliveries_processed: u64,
}

impl ProjectionPosition {
    /// Creates a new position at zero.
    pub fn zero() -> Self {
        Self {
            deliveries_processed: 0,
        }
    }

    /// Advances the position by one delivery.
    pub fn advance(&self) -> Self {
        Self {
            deliveries_processed: self.deliveries_processed + 1,
        }
    }
}

impl std::fmt::Display for ProjectionPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position({})", self.deliveries_processed)
    }
}

/// A projection folds the shop's delivery log into a read model.
///
/// The delivery log is append-only, so a projection only needs to remember
/// how far into it it has read.
pub trait Projection {
    /// Returns the name of this projection.
    fn name(&self) -> &'static str;

    /// Handles a single delivery, updating the read model.
    fn handle(&mut self, delivery: &Delivery);

    /// Returns the current position of this projection.
    fn position(&self) -> ProjectionPosition;

    /// Resets the projection to its initial state.
    fn reset(&mut self);

    /// Handles every delivery in `log` this projection has not yet seen.
    fn catch_up(&mut self, log: &[Arc<Delivery>]) {
        let seen = self.position().deliveries_processed as usize;
        for delivery in log.iter().skip(seen) {
            self.handle(delivery);
        }
    }
}
