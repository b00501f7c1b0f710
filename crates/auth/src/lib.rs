//! `brewhall-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to validate a bearer token into claims and how to describe accounts and
//! roles, nothing more. Token *issuance* is an external collaborator.

pub mod account;
pub mod claims;
pub mod roles;
pub mod token;

pub use account::UserAccount;
pub use claims::Claims;
pub use roles::Role;
pub use token::{Hs256TokenValidator, TokenError, TokenValidator};
