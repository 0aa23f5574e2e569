//! HTTP client module
//!
//! Provides a thin HTTP client over `reqwest` for sequential page requests.
//!
//! # Features
//!
//! - **Default headers**: `Content-Type: application/json` on every request
//! - **Authentication**: Integration with the auth module
//! - **Status classification**: Non-success responses become `Error::HttpStatus`
//!
//! Requests are sent exactly once. There is no retry or backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
