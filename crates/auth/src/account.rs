use serde::{Deserialize, Serialize};

use brewhall_core::{DomainError, DomainResult, UserId};

use crate::Role;

/// A user account in the directory (customer, staff, or admin).
///
/// The directory is what order placement resolves the *authenticated*
/// username against: the customer on an order always comes from the token,
/// never from client-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    name: String,
    username: String,
    email: String,
    roles: Vec<Role>,
}

impl UserAccount {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<Role>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let username = username.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("display name cannot be empty"));
        }
        if username.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            roles,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// True when `identifier` matches either the username or the email.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username == identifier || self.email == identifier.to_lowercase()
    }
}
