use serde::{Deserialize, Serialize};

use brewhall_core::{DomainError, DomainResult, ItemId};

/// A sellable item: unique name, description, positive price.
///
/// Items are immutable once referenced by an order line except through an
/// explicit update. Orders store item *names*, not ids, so a later rename
/// does not retroactively affect placed orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    /// Price in dollars. Must be positive and finite.
    price: f64,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.trim().to_string(),
            description: description.into(),
            price,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Apply an explicit update, re-running the same validation as creation.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        validate_price(price)?;
        self.name = name.trim().to_string();
        self.description = description.into();
        self.price = price;
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("item name cannot be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::validation(
            "price must be non-zero and positive",
        ));
    }
    Ok(())
}
