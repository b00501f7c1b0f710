//! `brewhall-tax` — the single mutable tax-rate value.

pub mod rate;

pub use rate::TaxRate;
