//! Authenticator implementation
//!
//! Applies the configured credential to outgoing requests.

use super::types::AuthConfig;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The `Authorization` header value, if any
    pub fn header_value(&self) -> Option<String> {
        match &self.config {
            AuthConfig::None => None,
            AuthConfig::Token { scheme, token } => Some(scheme.header_value(token)),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.header_value() {
            Some(value) => req.header(AUTHORIZATION, value),
            None => req,
        }
    }
}
