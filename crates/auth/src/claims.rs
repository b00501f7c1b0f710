use serde::{Deserialize, Serialize};

use crate::Role;

/// Bearer-token claims model (transport-agnostic).
///
/// This is the minimal set of claims the backend expects once a token has
/// been decoded and verified. `sub` carries the username the user directory
/// resolves identities against; authorization is driven by `roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,

    /// Roles granted to the subject.
    pub roles: Vec<Role>,

    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,

    /// Expiration, seconds since the Unix epoch.
    pub exp: i64,
}
