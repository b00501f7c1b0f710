use std::sync::Arc;

use brewhall_auth::{Role, UserAccount};
use brewhall_core::{DomainError, DomainResult, UserId};

use crate::store::Database;

/// Directory of user accounts (customers, staff, the admin).
///
/// Order placement resolves the authenticated username through this
/// directory; account management itself is a thin admin surface.
#[derive(Clone)]
pub struct UserDirectoryService {
    db: Arc<Database>,
}

impl UserDirectoryService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn create_user(
        &self,
        name: &str,
        username: &str,
        email: &str,
        roles: Vec<Role>,
    ) -> DomainResult<UserAccount> {
        self.db.transact(|state| {
            let taken = state.users.values().any(|existing| {
                existing.matches_identifier(username) || existing.matches_identifier(email)
            });
            if taken {
                return Err(DomainError::conflict(
                    "an account with that username or email already exists",
                ));
            }

            let account = UserAccount::new(UserId::new(), name, username, email, roles)?;
            state.users.insert(account.id(), account.clone());
            tracing::info!(user_id = %account.id(), username = account.username(), "user account created");
            Ok(account)
        })
    }

    /// Resolve an account by username or email.
    pub fn find_by_identifier(&self, identifier: &str) -> DomainResult<UserAccount> {
        self.db.read(|state| {
            state.user_by_identifier(identifier).cloned().ok_or_else(|| {
                DomainError::not_found(format!("user not found for username: {identifier}"))
            })
        })
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<UserAccount> {
        self.db.read(|state| {
            state
                .users
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("user not found with id: {id}")))
        })
    }

    pub fn list_users(&self) -> DomainResult<Vec<UserAccount>> {
        self.db.read(|state| {
            let mut users: Vec<_> = state.users.values().cloned().collect();
            users.sort_by(|a, b| a.username().cmp(b.username()));
            Ok(users)
        })
    }

    /// Seed the default admin account if no account matches its username yet.
    /// Part of system initialization; idempotent.
    pub fn ensure_admin(&self, username: &str, email: &str) -> DomainResult<()> {
        self.db.transact(|state| {
            if state.user_by_identifier(username).is_some() {
                return Ok(());
            }
            let account =
                UserAccount::new(UserId::new(), "Admin", username, email, vec![Role::admin()])?;
            tracing::info!(username = account.username(), "seeded default admin account");
            state.users.insert(account.id(), account);
            Ok(())
        })
    }
}
