//! `brewhall-inventory` — the singleton stock ledger.

pub mod ledger;

pub use ledger::InventoryLedger;
