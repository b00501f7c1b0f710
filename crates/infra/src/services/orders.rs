use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use brewhall_core::{DomainError, DomainResult, OrderId, UserId};
use brewhall_orders::{compute_total, Order};

use crate::store::Database;

/// The order lifecycle engine.
///
/// Placement and cancellation touch the ledger and an order together, so each
/// runs as a single store transaction: either every inventory movement and
/// the order write commit, or none do.
#[derive(Clone)]
pub struct OrderService {
    db: Arc<Database>,
}

impl OrderService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Place an order for the authenticated user identified by `username`.
    ///
    /// Resolves every line against the catalog, reserves stock, prices the
    /// order against the current tax rate, and persists the decremented
    /// ledger together with the new `PLACED` order.
    pub fn place_order(
        &self,
        username: &str,
        items: BTreeMap<String, u32>,
        tip: Option<f64>,
    ) -> DomainResult<Order> {
        let tip = tip.unwrap_or(0.0);

        self.db.transact(|state| {
            Order::validate_request(&items, tip)?;

            let customer = state
                .user_by_identifier(username)
                .cloned()
                .ok_or_else(|| {
                    DomainError::not_found(format!("user not found for username: {username}"))
                })?;

            if state.ledgers.is_empty() {
                return Err(DomainError::not_found("inventory is empty or not found"));
            }

            // Resolve lines before touching stock; the map is name-keyed so
            // iteration (and thus error precedence) is deterministic.
            let mut lines = Vec::with_capacity(items.len());
            for (name, &quantity) in &items {
                let item = state
                    .item_by_name(name)
                    .ok_or_else(|| DomainError::not_found(format!("item not found: {name}")))?;
                lines.push((item.id(), name.clone(), quantity, item.price()));
            }

            let ledger = &mut state.ledgers[0];
            let mut subtotal = 0.0;
            for (item_id, name, quantity, price) in &lines {
                ledger.reserve(*item_id, name, *quantity)?;
                subtotal += price * f64::from(*quantity);
            }

            let rate = state
                .tax_rates
                .first()
                .ok_or_else(|| DomainError::not_found("tax rate not found"))?
                .rate();

            let order = Order::place(
                OrderId::new(),
                customer.id(),
                customer.name(),
                items.clone(),
                tip,
                compute_total(subtotal, rate, tip),
                Utc::now(),
            )?;

            state.orders.insert(order.id(), order.clone());
            tracing::info!(
                order_id = %order.id(),
                customer = customer.username(),
                total = order.total_price(),
                "order placed"
            );
            Ok(order)
        })
    }

    /// `PLACED → FULFILLED`.
    pub fn fulfill_order(&self, id: OrderId) -> DomainResult<Order> {
        self.update_status(id, |order| order.fulfill())
    }

    /// `FULFILLED → PICKED_UP`.
    pub fn pickup_order(&self, id: OrderId) -> DomainResult<Order> {
        self.update_status(id, |order| order.pickup())
    }

    /// `PLACED → CANCELLED`, returning every reserved quantity to the ledger
    /// in the same transaction.
    pub fn cancel_order(&self, id: OrderId) -> DomainResult<Order> {
        self.db.transact(|state| {
            let mut order = state
                .orders
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("order not found with id: {id}")))?;
            order.cancel()?;

            let mut lines = Vec::with_capacity(order.items().len());
            for (name, &quantity) in order.items() {
                let item = state.item_by_name(name).ok_or_else(|| {
                    DomainError::not_found(format!("item not found in inventory: {name}"))
                })?;
                lines.push((item.id(), quantity));
            }

            let ledger = state
                .ledgers
                .first_mut()
                .ok_or_else(|| DomainError::not_found("inventory is empty or not found"))?;
            for (item_id, quantity) in lines {
                ledger.restock(item_id, quantity);
            }

            state.orders.insert(id, order.clone());
            tracing::info!(order_id = %id, "order cancelled, stock returned");
            Ok(order)
        })
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<Order> {
        self.db.read(|state| {
            state
                .orders
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("order not found with id: {id}")))
        })
    }

    pub fn get_all_orders(&self) -> DomainResult<Vec<Order>> {
        self.db.read(|state| Ok(sorted_by_age(state.orders.values().cloned())))
    }

    pub fn get_orders_for_customer(&self, customer_id: UserId) -> DomainResult<Vec<Order>> {
        self.db.read(|state| {
            Ok(sorted_by_age(
                state
                    .orders
                    .values()
                    .filter(|order| order.customer_id() == customer_id)
                    .cloned(),
            ))
        })
    }

    /// All `PICKED_UP` orders, optionally restricted to those whose item map
    /// contains `item_name` (exact key match, case-sensitive). An empty or
    /// absent filter applies no restriction.
    pub fn view_order_history(&self, item_name: Option<&str>) -> DomainResult<Vec<Order>> {
        let filter = item_name.filter(|name| !name.is_empty());
        self.db.read(|state| {
            Ok(sorted_by_age(
                state
                    .orders
                    .values()
                    .filter(|order| order.status() == brewhall_orders::OrderStatus::PickedUp)
                    .filter(|order| filter.is_none_or(|name| order.contains_item(name)))
                    .cloned(),
            ))
        })
    }

    fn update_status(
        &self,
        id: OrderId,
        apply: impl FnOnce(&mut Order) -> DomainResult<()>,
    ) -> DomainResult<Order> {
        self.db.transact(|state| {
            let mut order = state
                .orders
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("order not found with id: {id}")))?;
            apply(&mut order)?;
            state.orders.insert(id, order.clone());
            tracing::info!(order_id = %id, status = %order.status(), "order status updated");
            Ok(order)
        })
    }
}

fn sorted_by_age(orders: impl Iterator<Item = Order>) -> Vec<Order> {
    let mut orders: Vec<_> = orders.collect();
    orders.sort_by_key(|order| (order.created_at(), *order.id().as_uuid()));
    orders
}
