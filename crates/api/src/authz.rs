//! Route-level role checks.
//!
//! Roles come from the validated token; each route declares which roles it
//! accepts (see the route table in the crate's route modules). There is no
//! implicit role hierarchy: an admin is not a customer.

use brewhall_auth::Role;
use brewhall_core::{DomainError, DomainResult};

use crate::context::PrincipalContext;

/// Require the principal to hold at least one of `allowed`.
pub fn require_any_role(principal: &PrincipalContext, allowed: &[Role]) -> DomainResult<()> {
    if allowed.iter().any(|role| principal.has_role(role)) {
        Ok(())
    } else {
        Err(DomainError::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_on_any_matching_role() {
        let principal = PrincipalContext::new("ada".into(), vec![Role::customer()]);
        assert!(require_any_role(&principal, &[Role::staff(), Role::customer()]).is_ok());
    }

    #[test]
    fn denies_without_a_matching_role() {
        let principal = PrincipalContext::new("ada".into(), vec![Role::customer()]);
        let err = require_any_role(&principal, &[Role::admin()]).unwrap_err();
        assert!(matches!(err, DomainError::AccessDenied));
    }
}
