use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use brewhall_core::{DomainError, DomainResult, InventoryId, ItemId};

/// The single stock ledger: item identity → quantity on hand.
///
/// Exactly one ledger record exists system-wide; it is created lazily on
/// first access and never deleted during normal operation. Quantities are
/// `u32`, so non-negativity holds by construction: `reserve` is the only
/// way stock goes down and it refuses to go below zero.
///
/// Entries are keyed by durable `ItemId`, not by name; the wire
/// representation resolves ids to names at the service boundary. Orders, by
/// contrast, store names, so the ledger following item identity through a
/// rename does not rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger {
    id: InventoryId,
    items: HashMap<ItemId, u32>,
}

impl InventoryLedger {
    /// Create an empty ledger (used by the idempotent bootstrap).
    pub fn empty(id: InventoryId) -> Self {
        Self {
            id,
            items: HashMap::new(),
        }
    }

    pub fn with_contents(id: InventoryId, items: HashMap<ItemId, u32>) -> Self {
        Self { id, items }
    }

    pub fn id(&self) -> InventoryId {
        self.id
    }

    pub fn items(&self) -> &HashMap<ItemId, u32> {
        &self.items
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains_key(&item)
    }

    /// Quantity on hand; a missing entry reads as 0.
    pub fn quantity_of(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// Register a newly created item at quantity 0.
    pub fn add_item(&mut self, item: ItemId) -> DomainResult<()> {
        if self.items.contains_key(&item) {
            return Err(DomainError::state(format!(
                "item {item} already exists in the inventory"
            )));
        }
        self.items.insert(item, 0);
        Ok(())
    }

    /// Re-key the entry for an updated item, preserving its quantity.
    ///
    /// Item metadata changes (rename, reprice) must not reset stock.
    pub fn adjust_for_updated_item(&mut self, item: ItemId) -> DomainResult<()> {
        let quantity = self.items.remove(&item).ok_or_else(|| {
            DomainError::not_found(format!("item {item} not found in the inventory"))
        })?;
        self.items.insert(item, quantity);
        Ok(())
    }

    /// Remove an item's entry entirely (item deletion). Returns the quantity
    /// that was on hand, or `None` if the item was not tracked.
    pub fn remove_item(&mut self, item: ItemId) -> Option<u32> {
        self.items.remove(&item)
    }

    /// Reserve `quantity` units for an order, failing without mutation when
    /// stock is insufficient. `name` is only used in the error message.
    pub fn reserve(&mut self, item: ItemId, name: &str, quantity: u32) -> DomainResult<()> {
        let available = self.quantity_of(item);
        if quantity > available {
            return Err(DomainError::state(format!(
                "insufficient inventory for item: {name}. Available: {available}, Required: {quantity}"
            )));
        }
        self.items.insert(item, available - quantity);
        Ok(())
    }

    /// Return `quantity` units to stock (order cancellation). A missing entry
    /// starts at 0.
    pub fn restock(&mut self, item: ItemId, quantity: u32) {
        let current = self.quantity_of(item);
        self.items.insert(item, current.saturating_add(quantity));
    }

    /// Replace the entire item → quantity mapping (full overwrite, not merge).
    pub fn replace_contents(&mut self, items: HashMap<ItemId, u32>) {
        self.items = items;
    }
}
