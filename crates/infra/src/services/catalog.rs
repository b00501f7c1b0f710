use std::sync::Arc;

use brewhall_catalog::Item;
use brewhall_core::{DomainError, DomainResult, InventoryId, ItemId};
use brewhall_inventory::InventoryLedger;

use crate::store::{CafeState, Database};

/// Catalog maintenance: thin CRUD over items, kept in lockstep with the
/// ledger (every item exists in the ledger from creation to deletion).
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<Database>,
}

impl CatalogService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Add a new item and register it in the ledger at quantity 0.
    pub fn add_item(&self, name: &str, description: &str, price: f64) -> DomainResult<Item> {
        self.db.transact(|state| {
            let item = Item::new(ItemId::new(), name, description, price)?;
            if state.item_by_name(item.name()).is_some() {
                return Err(DomainError::conflict(format!(
                    "an item named '{}' already exists",
                    item.name()
                )));
            }

            state.items.insert(item.id(), item.clone());
            ledger_or_bootstrap(state).add_item(item.id())?;
            tracing::info!(item_id = %item.id(), name = item.name(), "item added to catalog");
            Ok(item)
        })
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<Item> {
        self.db.read(|state| {
            state
                .items
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("item with id {id} not found")))
        })
    }

    pub fn list_items(&self) -> DomainResult<Vec<Item>> {
        self.db.read(|state| {
            let mut items: Vec<_> = state.items.values().cloned().collect();
            items.sort_by(|a, b| a.name().cmp(b.name()));
            Ok(items)
        })
    }

    /// Update an item's fields, keeping its ledger entry (and stock) intact.
    pub fn update_item(
        &self,
        id: ItemId,
        name: &str,
        description: &str,
        price: f64,
    ) -> DomainResult<Item> {
        self.db.transact(|state| {
            let name_taken = state
                .item_by_name(name.trim())
                .is_some_and(|other| other.id() != id);
            if name_taken {
                return Err(DomainError::conflict(format!(
                    "an item named '{}' already exists",
                    name.trim()
                )));
            }

            let item = state
                .items
                .get_mut(&id)
                .ok_or_else(|| DomainError::not_found(format!("item with id {id} not found")))?;
            item.update(name, description, price)?;
            let updated = item.clone();

            let ledger = state
                .ledgers
                .first_mut()
                .ok_or_else(|| DomainError::not_found("inventory is empty or not found"))?;
            ledger.adjust_for_updated_item(id)?;

            tracing::info!(item_id = %id, name = updated.name(), "item updated");
            Ok(updated)
        })
    }

    /// Delete an item. Its ledger entry is cleared first so the ledger never
    /// references a missing item; an item the ledger does not track reads as
    /// a conflict.
    pub fn delete_item(&self, id: ItemId) -> DomainResult<()> {
        self.db.transact(|state| {
            let item = state
                .items
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("item with id {id} not found")))?;

            let ledger = state
                .ledgers
                .first_mut()
                .ok_or_else(|| DomainError::not_found("inventory is empty or not found"))?;
            if ledger.remove_item(id).is_none() {
                return Err(DomainError::conflict(format!(
                    "item with name '{}' does not exist in the inventory",
                    item.name()
                )));
            }

            state.items.remove(&id);
            tracing::info!(item_id = %id, name = item.name(), "item deleted");
            Ok(())
        })
    }
}

/// The catalog bootstraps the ledger lazily: adding the first item may be the
/// first inventory access the system ever sees.
fn ledger_or_bootstrap(state: &mut CafeState) -> &mut InventoryLedger {
    if state.ledgers.is_empty() {
        let ledger = InventoryLedger::empty(InventoryId::new());
        tracing::info!(inventory_id = %ledger.id(), "inventory ledger bootstrapped");
        state.ledgers.push(ledger);
    }
    &mut state.ledgers[0]
}
