use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use brewhall_core::{DomainError, DomainResult, InventoryId, ItemId};
use brewhall_inventory::InventoryLedger;

use crate::store::{CafeState, Database};

/// Wire representation of the ledger: item *names* mapped to quantities.
///
/// Internally the ledger is keyed by `ItemId`; names are resolved at this
/// boundary so renames follow the item without resetting its stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub id: InventoryId,
    pub items: BTreeMap<String, u32>,
}

/// Maintains the singleton stock ledger.
#[derive(Clone)]
pub struct InventoryService {
    db: Arc<Database>,
}

impl InventoryService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Return the ledger, creating and persisting an empty one if none exists
    /// (idempotent bootstrap). More than one ledger record is an invariant
    /// violation and reads as a conflict.
    pub fn get(&self) -> DomainResult<InventoryView> {
        self.db.transact(|state| {
            match state.ledgers.len() {
                0 => {
                    let ledger = InventoryLedger::empty(InventoryId::new());
                    tracing::info!(inventory_id = %ledger.id(), "inventory ledger bootstrapped");
                    state.ledgers.push(ledger);
                }
                1 => {}
                n => {
                    return Err(DomainError::conflict(format!(
                        "expected a single inventory record, found {n}"
                    )));
                }
            }
            let ledger = &state.ledgers[0];
            Ok(view_of(state, ledger))
        })
    }

    /// Create the single ledger with initial contents.
    pub fn create(&self, items: BTreeMap<String, u32>) -> DomainResult<InventoryView> {
        self.db.transact(|state| {
            if !state.ledgers.is_empty() {
                return Err(DomainError::state(
                    "cannot create inventory: an inventory already exists",
                ));
            }
            let contents = resolve_contents(state, &items)?;
            let ledger = InventoryLedger::with_contents(InventoryId::new(), contents);
            let view = view_of(state, &ledger);
            state.ledgers.push(ledger);
            Ok(view)
        })
    }

    /// Replace the entire item → quantity mapping of the ledger with `id`
    /// (full overwrite, not merge). Every name is re-resolved against the
    /// catalog.
    pub fn update(&self, id: InventoryId, items: BTreeMap<String, u32>) -> DomainResult<InventoryView> {
        self.db.transact(|state| {
            let contents = resolve_contents(state, &items)?;

            let index = state
                .ledgers
                .iter()
                .position(|ledger| ledger.id() == id)
                .ok_or_else(|| {
                    DomainError::not_found(format!("inventory not found with id: {id}"))
                })?;
            state.ledgers[index].replace_contents(contents);

            Ok(view_of(state, &state.ledgers[index]))
        })
    }
}

/// Resolve a name-keyed mapping into the ledger's id-keyed form.
fn resolve_contents(
    state: &CafeState,
    items: &BTreeMap<String, u32>,
) -> DomainResult<HashMap<ItemId, u32>> {
    let mut contents = HashMap::with_capacity(items.len());
    for (name, &quantity) in items {
        let item = state
            .item_by_name(name)
            .ok_or_else(|| DomainError::not_found(format!("item not found: {name}")))?;
        contents.insert(item.id(), quantity);
    }
    Ok(contents)
}

/// Resolve the ledger's id-keyed entries back to names for the wire.
pub(crate) fn view_of(state: &CafeState, ledger: &InventoryLedger) -> InventoryView {
    let mut items = BTreeMap::new();
    for (&item_id, &quantity) in ledger.items() {
        match state.items.get(&item_id) {
            Some(item) => {
                items.insert(item.name().to_string(), quantity);
            }
            None => {
                // Item deletion clears its ledger entry first, so this points
                // at a store inconsistency rather than a user mistake.
                tracing::warn!(%item_id, "ledger entry references unknown item; omitted from view");
            }
        }
    }
    InventoryView {
        id: ledger.id(),
        items,
    }
}
