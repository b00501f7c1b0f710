//! `brewhall-orders` — customer orders and their lifecycle state machine.

pub mod order;

pub use order::{compute_total, Order, OrderStatus};
