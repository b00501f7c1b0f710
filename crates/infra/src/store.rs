//! In-memory transactional store.
//!
//! The persistence collaborator the domain expects is "atomic read-modify-write
//! over Order/Inventory/TaxRate records". This module provides it with a single
//! `RwLock`-guarded state snapshot and copy-on-write transactions.
//!
//! ## Transaction Semantics
//!
//! `Database::transact` runs the closure against a **working copy** of the
//! state while holding the write lock:
//!
//! - On `Ok`, the working copy replaces the live state: every mutation the
//!   closure made commits together.
//! - On `Err`, the working copy is dropped: no partial write is ever
//!   observable, no rollback bookkeeping is needed.
//!
//! Because the write lock is held for the duration of the closure, concurrent
//! transactions are fully serialized. Two simultaneous placements over the
//! same stock therefore cannot both read the old quantity and oversubscribe
//! it; the second sees the first's decrement (or its abort). This is the
//! "serializable transaction" option for the singleton-ledger race, with no
//! optimistic-version retry loop to get wrong.
//!
//! ## Singleton Records
//!
//! The inventory ledger and the tax rate are "singleton rows": collections
//! expected to hold exactly one record. They are stored as `Vec`s rather than
//! `Option`s so the "more than one record" invariant violation is
//! representable and can be surfaced as a conflict instead of silently
//! collapsing.

use std::collections::HashMap;
use std::sync::RwLock;

use brewhall_auth::UserAccount;
use brewhall_catalog::Item;
use brewhall_core::{DomainError, DomainResult, ItemId, OrderId, UserId};
use brewhall_inventory::InventoryLedger;
use brewhall_orders::Order;
use brewhall_tax::TaxRate;

/// The full persisted state of the café backend.
#[derive(Debug, Clone, Default)]
pub struct CafeState {
    pub items: HashMap<ItemId, Item>,
    pub ledgers: Vec<InventoryLedger>,
    pub tax_rates: Vec<TaxRate>,
    pub orders: HashMap<OrderId, Order>,
    pub users: HashMap<UserId, UserAccount>,
}

impl CafeState {
    /// Resolve an item by its unique name (exact, case-sensitive).
    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.values().find(|item| item.name() == name)
    }

    /// Resolve a user account by username or email.
    pub fn user_by_identifier(&self, identifier: &str) -> Option<&UserAccount> {
        self.users
            .values()
            .find(|account| account.matches_identifier(identifier))
    }
}

/// Shared store handle. Cheap to clone behind an `Arc`.
#[derive(Debug, Default)]
pub struct Database {
    inner: RwLock<CafeState>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access under the shared lock.
    pub fn read<R>(&self, f: impl FnOnce(&CafeState) -> DomainResult<R>) -> DomainResult<R> {
        let state = self
            .inner
            .read()
            .map_err(|_| DomainError::internal("store lock poisoned"))?;
        f(&state)
    }

    /// Run `f` as a serializable, all-or-nothing transaction.
    ///
    /// Mutations commit only if `f` returns `Ok`; any error discards every
    /// change the closure made.
    pub fn transact<R>(
        &self,
        f: impl FnOnce(&mut CafeState) -> DomainResult<R>,
    ) -> DomainResult<R> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| DomainError::internal("store lock poisoned"))?;

        let mut working = state.clone();
        let result = f(&mut working)?;
        *state = working;
        Ok(result)
    }
}
