//! `skillbridge-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod account;
pub mod claims;
pub mod policy;
pub mod role;

pub use account::{Account, AccountPatch, NewAccount};
pub use claims::{resolve_bearer, IdentityClaims};
pub use policy::{authorize, require_owner, AccessDenied, Action};
pub use role::Role;
