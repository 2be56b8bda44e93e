//! Error types for the Lazada API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use lazada_api::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types, or when resolving an operation name
/// against the operation catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App key cannot be empty.
    #[error("App key cannot be empty. Please provide a valid Lazada app key.")]
    EmptyAppKey,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide a valid Lazada app secret.")]
    EmptyAppSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Gateway URL is invalid.
    #[error("Invalid gateway URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.lazada.co.th/rest').")]
    InvalidGatewayUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The operation name is not part of the operation catalog.
    #[error("Unknown operation '{name}'. Valid operations are: {valid}.")]
    UnknownOperation {
        /// The operation name that was requested.
        name: String,
        /// Comma-separated list of the registered operation names.
        valid: String,
    },
}
