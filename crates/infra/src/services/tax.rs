use std::sync::Arc;

use brewhall_core::{DomainError, DomainResult, TaxRateId};
use brewhall_tax::TaxRate;

use crate::store::Database;

/// The tax policy: a single mutable rate consumed at order-pricing time.
#[derive(Clone)]
pub struct TaxRateService {
    db: Arc<Database>,
}

impl TaxRateService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create the tax rate record with the default rate if it does not exist
    /// yet. Part of system initialization; idempotent.
    pub fn ensure_default(&self) -> DomainResult<()> {
        self.db.transact(|state| {
            if state.tax_rates.is_empty() {
                let rate = TaxRate::new(TaxRateId::new(), TaxRate::DEFAULT_RATE)?;
                tracing::info!(rate = rate.rate(), "seeded default tax rate");
                state.tax_rates.push(rate);
            }
            Ok(())
        })
    }

    pub fn get_rate(&self) -> DomainResult<f64> {
        self.db.read(|state| {
            state
                .tax_rates
                .first()
                .map(TaxRate::rate)
                .ok_or_else(|| DomainError::state("no tax rate exists in the system"))
        })
    }

    /// Overwrite the single record's value.
    ///
    /// Range validation comes first so a malformed rate reads as bad input
    /// even when the record is missing.
    pub fn set_rate(&self, rate: f64) -> DomainResult<f64> {
        self.db.transact(|state| {
            TaxRate::validate(rate)?;
            let record = state
                .tax_rates
                .first_mut()
                .ok_or_else(|| DomainError::state("no tax rate exists in the system to update"))?;
            record.set(rate)?;
            tracing::info!(rate, "tax rate updated");
            Ok(record.rate())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TaxRateService {
        TaxRateService::new(Arc::new(Database::new()))
    }

    #[test]
    fn get_without_record_is_a_state_error() {
        let tax = service();
        assert!(matches!(tax.get_rate(), Err(DomainError::State(_))));
    }

    #[test]
    fn ensure_default_creates_exactly_one_record() {
        let tax = service();
        tax.ensure_default().unwrap();
        tax.ensure_default().unwrap();
        assert_eq!(tax.get_rate().unwrap(), TaxRate::DEFAULT_RATE);
    }

    #[test]
    fn out_of_range_rate_is_rejected_and_rate_is_unchanged() {
        let tax = service();
        tax.ensure_default().unwrap();
        tax.set_rate(0.05).unwrap();

        let err = tax.set_rate(1.5).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(tax.get_rate().unwrap(), 0.05);
    }

    #[test]
    fn set_without_record_is_a_state_error() {
        let tax = service();
        assert!(matches!(tax.set_rate(0.1), Err(DomainError::State(_))));
        // Validation still wins over the missing record.
        assert!(matches!(tax.set_rate(-0.1), Err(DomainError::Validation(_))));
    }
}
