use serde::{Deserialize, Serialize};

use brewhall_core::{DomainError, DomainResult, TaxRateId};

/// The system tax rate: a single record holding a rate in `[0, 1]`.
///
/// Created once at startup with [`TaxRate::DEFAULT_RATE`]; mutated only by an
/// explicit admin-set operation; read on every order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    id: TaxRateId,
    rate: f64,
}

impl TaxRate {
    /// Rate seeded at system initialization (2%).
    pub const DEFAULT_RATE: f64 = 0.02;

    pub fn new(id: TaxRateId, rate: f64) -> DomainResult<Self> {
        Self::validate(rate)?;
        Ok(Self { id, rate })
    }

    /// Check a candidate rate without touching any record.
    pub fn validate(rate: f64) -> DomainResult<()> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(DomainError::validation("tax rate must be between 0 and 1"));
        }
        Ok(())
    }

    pub fn id(&self) -> TaxRateId {
        self.id
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Overwrite the rate. Fails with a validation error outside `[0, 1]`,
    /// leaving the current rate untouched.
    pub fn set(&mut self, rate: f64) -> DomainResult<()> {
        Self::validate(rate)?;
        self.rate = rate;
        Ok(())
    }
}
