//! Authentication module
//!
//! Supports: pre-issued API token sent in the `Authorization` header,
//! either bearer-prefixed or verbatim.
//!
//! The header convention is a run-time setting (`AuthScheme`) rather than
//! a property of the resource being exported.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, AuthScheme, Token};
