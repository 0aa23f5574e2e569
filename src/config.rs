//! Run configuration and credential loading
//!
//! The token lives in a JSON file such as:
//!
//! ```json
//! { "firehydrant_token": "fhb-..." }
//! ```
//!
//! Everything else about a run (base URL, header convention, page size,
//! output path) is carried by `ExportConfig`, built by the caller and
//! passed into the engine.

use crate::auth::{AuthConfig, AuthScheme, Token};
use crate::error::{Error, Result};
use crate::resources::DEFAULT_BASE_URL;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Field holding the API token in the config file
pub const DEFAULT_TOKEN_FIELD: &str = "firehydrant_token";

// ============================================================================
// Credential Loader
// ============================================================================

/// Read the token named `field` from the JSON file at `path`
pub fn load_token(path: impl AsRef<Path>, field: &str) -> Result<Token> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.display().to_string(),
        },
        _ => Error::config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )),
    })?;

    let token = parse_token(&content, field)?;
    debug!("Loaded '{}' from {}", field, path.display());
    Ok(token)
}

/// Extract the token named `field` from a JSON document
pub fn parse_token(content: &str, field: &str) -> Result<Token> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::config("Config file must contain a JSON object"))?;

    match object.get(field) {
        None | Some(Value::Null) => Err(Error::missing_field(field)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(Error::invalid_value(field, "token is empty"))
        }
        Some(Value::String(s)) => Ok(Token::new(s.clone())),
        Some(_) => Err(Error::invalid_value(field, "token must be a string")),
    }
}

// ============================================================================
// Export Config
// ============================================================================

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// API base URL
    pub base_url: String,
    /// API token
    pub token: Token,
    /// How the token is sent
    pub auth_scheme: AuthScheme,
    /// Records per page (`None` uses the resource default)
    pub page_size: Option<u32>,
    /// Output file (`None` uses the resource default)
    pub output: Option<PathBuf>,
    /// Per-request timeout (`None` waits indefinitely)
    pub timeout: Option<Duration>,
    /// Fail on responses without a record collection instead of stopping quietly
    pub strict_responses: bool,
}

impl ExportConfig {
    /// Config with defaults for everything but the token
    pub fn new(token: Token) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            auth_scheme: AuthScheme::default(),
            page_size: None,
            output: None,
            timeout: None,
            strict_responses: true,
        }
    }

    /// Load the token from a config file and use defaults for the rest
    pub fn from_file(path: impl AsRef<Path>, token_field: &str) -> Result<Self> {
        Ok(Self::new(load_token(path, token_field)?))
    }

    /// Set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set auth scheme
    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, size: Option<u32>) -> Self {
        self.page_size = size;
        self
    }

    /// Set output path
    #[must_use]
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set strict response handling
    #[must_use]
    pub fn with_strict_responses(mut self, strict: bool) -> Self {
        self.strict_responses = strict;
        self
    }

    /// Auth configuration for the HTTP client
    pub fn auth(&self) -> AuthConfig {
        AuthConfig::token(self.auth_scheme, self.token.clone())
    }

    /// Check settings before any request is made
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.page_size == Some(0) {
            return Err(Error::invalid_value(
                "page_size",
                "must be greater than zero",
            ));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_token() {
        let file = config_file(r#"{"firehydrant_token": "fh-123", "other": 1}"#);
        let token = load_token(file.path(), DEFAULT_TOKEN_FIELD).unwrap();
        assert_eq!(token.expose(), "fh-123");
    }

    #[test]
    fn test_load_token_custom_field() {
        let file = config_file(r#"{"api_key": "abc"}"#);
        let token = load_token(file.path(), "api_key").unwrap();
        assert_eq!(token.expose(), "abc");
    }

    #[test]
    fn test_load_token_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_token(dir.path().join("nope.json"), DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(err.is_config());
    }

    #[test]
    fn test_load_token_missing_field() {
        let file = config_file(r#"{"token": "wrong-key"}"#);
        let err = load_token(file.path(), DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "firehydrant_token"));
        assert!(err.is_config());
    }

    #[test]
    fn test_parse_token_malformed_json() {
        let err = parse_token("{not json", DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(err.to_string().contains("Invalid config JSON"));
        assert!(err.is_config());
    }

    #[test]
    fn test_parse_token_not_an_object() {
        let err = parse_token(r#"["fh-123"]"#, DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_parse_token_wrong_type() {
        let err = parse_token(r#"{"firehydrant_token": 42}"#, DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));

        let err = parse_token(r#"{"firehydrant_token": null}"#, DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_parse_token_empty() {
        let err = parse_token(r#"{"firehydrant_token": "  "}"#, DEFAULT_TOKEN_FIELD).unwrap_err();
        assert!(err.to_string().contains("token is empty"));
    }

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::new(Token::new("t"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth_scheme, AuthScheme::Bearer);
        assert!(config.page_size.is_none());
        assert!(config.output.is_none());
        assert!(config.timeout.is_none());
        assert!(config.strict_responses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_export_config_builder() {
        let config = ExportConfig::new(Token::new("t"))
            .with_base_url("http://localhost:8080/v1")
            .with_auth_scheme(AuthScheme::Raw)
            .with_page_size(Some(50))
            .with_output(Some(PathBuf::from("out.csv")))
            .with_timeout(Some(Duration::from_secs(5)))
            .with_strict_responses(false);

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.page_size, Some(50));
        assert_eq!(config.output, Some(PathBuf::from("out.csv")));
        assert!(!config.strict_responses);
        assert!(matches!(
            config.auth(),
            AuthConfig::Token {
                scheme: AuthScheme::Raw,
                ..
            }
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_export_config_from_file() {
        let file = config_file(r#"{"firehydrant_token": "fh-abc"}"#);
        let config = ExportConfig::from_file(file.path(), DEFAULT_TOKEN_FIELD).unwrap();
        assert_eq!(config.token.expose(), "fh-abc");
    }

    #[test]
    fn test_export_config_validation() {
        let base = ExportConfig::new(Token::new("t"));

        let err = base.clone().with_page_size(Some(0)).validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));

        let err = base.clone().with_base_url("not a url").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = base
            .clone()
            .with_base_url("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));

        let err = base
            .with_timeout(Some(Duration::ZERO))
            .validate()
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_export_config_debug_hides_token() {
        let config = ExportConfig::new(Token::new("very-secret"));
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
