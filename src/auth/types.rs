//! Auth configuration types

use serde::{Deserialize, Serialize};

/// How the token is placed into the `Authorization` header
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: <token>`
    Raw,
}

impl AuthScheme {
    /// Render the header value for a token
    pub fn header_value(&self, token: &Token) -> String {
        match self {
            AuthScheme::Bearer => format!("Bearer {}", token.expose()),
            AuthScheme::Raw => token.expose().to_string(),
        }
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthScheme::Bearer => write!(f, "bearer"),
            AuthScheme::Raw => write!(f, "raw"),
        }
    }
}

/// An opaque API token
///
/// The value never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication header
    #[default]
    None,

    /// Pre-issued API token
    Token {
        /// Header convention
        scheme: AuthScheme,
        /// The token
        token: Token,
    },
}

impl AuthConfig {
    /// Create a token auth config
    pub fn token(scheme: AuthScheme, token: Token) -> Self {
        Self::Token { scheme, token }
    }

    /// Create a bearer token auth config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::token(AuthScheme::Bearer, Token::new(token))
    }

    /// Create a raw token auth config
    pub fn raw(token: impl Into<String>) -> Self {
        Self::token(AuthScheme::Raw, Token::new(token))
    }
}
