use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for access checks.
///
/// Roles are opaque strings at this layer; the café ships with exactly three
/// (`customer`, `staff`, `admin`) and routes declare which of them they accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn customer() -> Self {
        Self::new("customer")
    }

    pub fn staff() -> Self {
        Self::new("staff")
    }

    pub fn admin() -> Self {
        Self::new("admin")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
