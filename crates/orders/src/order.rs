use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brewhall_core::{DomainError, DomainResult, OrderId, UserId};

/// Order lifecycle status.
///
/// The only legal transitions are `Placed → Fulfilled → PickedUp` and
/// `Placed → Cancelled`; `PickedUp` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Fulfilled,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Placed, OrderStatus::Fulfilled)
                | (OrderStatus::Placed, OrderStatus::Cancelled)
                | (OrderStatus::Fulfilled, OrderStatus::PickedUp)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::PickedUp | OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Fulfilled => "FULFILLED",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// Total price for an order: `subtotal * (1 + rate) + tip`.
pub fn compute_total(subtotal: f64, rate: f64, tip: f64) -> f64 {
    subtotal + subtotal * rate + tip
}

/// A customer order.
///
/// The item map is keyed by item *name* as it read at placement time, and the
/// quantities and computed total are fixed at placement: the only mutation an
/// order admits afterwards is a status transition. Fields are private so that
/// invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: UserId,
    customer_name: String,
    items: BTreeMap<String, u32>,
    tip: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    total_price: f64,
}

impl Order {
    /// Create a freshly priced order in `Placed` status.
    ///
    /// The caller (the lifecycle engine) has already reserved stock and
    /// computed `total_price`; this constructor only enforces the shape
    /// invariants of the order itself.
    pub fn place(
        id: OrderId,
        customer_id: UserId,
        customer_name: impl Into<String>,
        items: BTreeMap<String, u32>,
        tip: f64,
        total_price: f64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::validate_request(&items, tip)?;

        Ok(Self {
            id,
            customer_id,
            customer_name: customer_name.into(),
            items,
            tip,
            status: OrderStatus::Placed,
            created_at,
            total_price,
        })
    }

    /// Shape validation for a placement request, shared with the lifecycle
    /// engine so malformed requests are rejected before any stock is touched.
    pub fn validate_request(items: &BTreeMap<String, u32>, tip: f64) -> DomainResult<()> {
        if items.is_empty() {
            return Err(DomainError::validation(
                "the order must contain at least one item",
            ));
        }
        if items.values().any(|&qty| qty == 0) {
            return Err(DomainError::validation("item quantities must be positive"));
        }
        if !tip.is_finite() || tip < 0.0 {
            return Err(DomainError::validation("tip cannot be negative"));
        }
        Ok(())
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> UserId {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &BTreeMap<String, u32> {
        &self.items
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn tip(&self) -> f64 {
        self.tip
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// `Placed → Fulfilled`: the order is prepared and ready for pickup.
    pub fn fulfill(&mut self) -> DomainResult<()> {
        self.transition(OrderStatus::Fulfilled)
    }

    /// `Fulfilled → PickedUp`: the order left the counter.
    pub fn pickup(&mut self) -> DomainResult<()> {
        self.transition(OrderStatus::PickedUp)
    }

    /// `Placed → Cancelled`: the caller is responsible for returning the
    /// reserved stock to the ledger in the same transaction.
    pub fn cancel(&mut self) -> DomainResult<()> {
        self.transition(OrderStatus::Cancelled)
    }

    fn transition(&mut self, next: OrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::state(format!(
                "cannot transition from {} to {}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
