//! The donut shop aggregate: inventory, customers, orders and deliveries.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::DonutKind;
use crate::customer::Customer;
use crate::delivery::{Delivery, Donut};
use crate::error::ShopError;
use crate::money::Money;
use crate::order::{DonutCounts, Order};
use crate::pricing;

/// A donut shop.
///
/// Holds the current donut inventory and the full history of customers,
/// orders and deliveries. Prices depend on how many donuts an order asks
/// for, and deliveries are made on the order date. If there are not enough
/// donuts on hand to fill an order, the shortfall is made first.
#[derive(Debug, Default)]
pub struct DonutShop {
    inventory: DonutCounts,
    /// Customers in registration order.
    customers: Vec<Customer>,
    customer_index: HashMap<String, usize>,
    orders: Vec<Arc<Order>>,
    deliveries: Vec<Arc<Delivery>>,
}

// Query methods
impl DonutShop {
    /// Creates a shop with an empty inventory and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shop whose inventory starts at `stock`.
    pub fn with_stock(stock: &DonutCounts) -> Self {
        let mut shop = Self::new();
        shop.restock_all(stock);
        shop
    }

    /// Returns the donuts currently on hand.
    pub fn inventory(&self) -> &DonutCounts {
        &self.inventory
    }

    /// Returns every customer, in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by exact name.
    pub fn customer(&self, name: &str) -> Option<&Customer> {
        self.customer_index.get(name).map(|&i| &self.customers[i])
    }

    /// Returns every order taken, including ones that could not be filled.
    pub fn orders(&self) -> &[Arc<Order>] {
        &self.orders
    }

    /// Returns every delivery made, oldest first.
    pub fn deliveries(&self) -> &[Arc<Delivery>] {
        &self.deliveries
    }
}

// Command methods
impl DonutShop {
    /// Makes `count` more donuts of `kind`.
    #[tracing::instrument(skip(self))]
    pub fn restock(&mut self, kind: DonutKind, count: u64) {
        self.inventory.add_occurrences(kind, count);
    }

    /// Makes every count in `stock`.
    pub fn restock_all(&mut self, stock: &DonutCounts) {
        for (kind, count) in stock.iter() {
            self.restock(kind, count);
        }
    }

    /// Takes an order from `customer_name` and delivers it.
    ///
    /// The customer is registered on first contact. The order is recorded
    /// before it is filled, so an order that cannot be priced stays in the
    /// order history; any donuts made to cover it stay in inventory.
    #[tracing::instrument(skip(self))]
    pub fn deliver_order(
        &mut self,
        customer_name: &str,
        date: NaiveDate,
        descriptor: &str,
    ) -> Result<Arc<Delivery>, ShopError> {
        let slot = self.get_or_create_customer(customer_name);
        let result = self
            .create_order(customer_name, date, descriptor)
            .and_then(|order| self.fill_order(slot, order));

        match &result {
            Ok(delivery) => {
                metrics::counter!("donut_shop_orders_delivered_total").increment(1);
                tracing::info!(
                    customer = customer_name,
                    %date,
                    donuts = delivery.total_donuts(),
                    total_price = %delivery.total_price(),
                    "order delivered"
                );
            }
            Err(err) => {
                metrics::counter!("donut_shop_orders_rejected_total", "reason" => rejection_reason(err))
                    .increment(1);
                tracing::warn!(customer = customer_name, %date, error = %err, "order rejected");
            }
        }
        result
    }

    fn get_or_create_customer(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.customer_index.get(name) {
            return slot;
        }
        let slot = self.customers.len();
        self.customers.push(Customer::new(name));
        self.customer_index.insert(name.to_string(), slot);
        tracing::debug!(customer = name, "registered new customer");
        slot
    }

    fn create_order(
        &mut self,
        customer_name: &str,
        date: NaiveDate,
        descriptor: &str,
    ) -> Result<Arc<Order>, ShopError> {
        let order = Arc::new(Order::parse(customer_name, date, descriptor)?);
        self.orders.push(Arc::clone(&order));
        Ok(order)
    }

    fn fill_order(&mut self, slot: usize, order: Arc<Order>) -> Result<Arc<Delivery>, ShopError> {
        for (kind, requested) in order.counts().iter() {
            self.make_missing_donuts(kind, requested);
        }

        let order_size = order.total_donuts();
        metrics::histogram!("donut_shop_order_size").record(order_size as f64);
        let price = pricing::price_for(order_size)?;

        let delivery = Arc::new(Self::create_delivery(Arc::clone(&order), price));
        self.customers[slot].record_delivery(Arc::clone(&delivery));
        self.deliveries.push(Arc::clone(&delivery));

        // Backfill above left at least `requested` of every kind on hand, and
        // nothing touches inventory in between, so removal cannot fall short.
        for (kind, requested) in order.counts().iter() {
            let removed = self.inventory.remove_occurrences(kind, requested);
            debug_assert!(removed, "backfill leaves enough {kind} on hand");
        }

        Ok(delivery)
    }

    fn make_missing_donuts(&mut self, kind: DonutKind, requested: u64) {
        let on_hand = self.inventory.occurrences_of(kind);
        if on_hand < requested {
            let missing = requested - on_hand;
            tracing::debug!(%kind, on_hand, missing, "making missing donuts");
            metrics::counter!("donut_shop_donuts_backfilled_total").increment(missing);
            self.restock(kind, missing);
        }
    }

    fn create_delivery(order: Arc<Order>, price: Money) -> Delivery {
        let donuts = order
            .counts()
            .expand()
            .map(|kind| Donut::new(kind, price))
            .collect();
        Delivery::new(order, donuts)
    }
}

fn rejection_reason(err: &ShopError) -> &'static str {
    match err {
        ShopError::UnknownCode { .. } => "unknown_code",
        ShopError::MalformedOrder { .. } => "malformed_order",
        ShopError::UnsatisfiableOrder { .. } => "unsatisfiable_order",
    }
}

impl std::fmt::Display for DonutShop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DonutShop(donuts={}, deliveries=[", self.inventory)?;
        for (i, delivery) in self.deliveries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{delivery}")?;
        }
        f.write_str("])")
    }
}
