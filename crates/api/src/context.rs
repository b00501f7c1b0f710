use brewhall_auth::Role;

/// Authenticated identity for a request (username + roles from the token).
///
/// Immutable; inserted by the auth middleware and present on every protected
/// route. Handlers resolve the username against the user directory when they
/// need the full account, never trusting client-supplied identity data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    username: String,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(username: String, roles: Vec<Role>) -> Self {
        Self { username, roles }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }
}
