//! Call-time error types for the Lazada API SDK.
//!
//! This module contains the error types a request can fail with once the
//! client is configured.
//!
//! - [`HttpError`]: The request never produced a response body
//! - [`ApiError`]: Lazada answered with an error envelope
//! - [`LazadaError`]: Unified error type returned by every client call
//!
//! # Example
//!
//! ```rust,ignore
//! use lazada_api::{LazadaClient, LazadaError};
//!
//! match client.get_order(params).await {
//!     Ok(order) => println!("Order {:?}", order.order_id),
//!     Err(LazadaError::Api(e)) if e.code == "IllegalAccessToken" => {
//!         println!("Refresh the access token (request {})", e.request_id);
//!     }
//!     Err(LazadaError::Api(e)) => println!("API error: {e}"),
//!     Err(LazadaError::Http(e)) => println!("Network error: {e}"),
//!     Err(LazadaError::Decode(e)) => println!("Unexpected body: {e}"),
//!     Err(LazadaError::Config(e)) => println!("Bad call: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when the HTTP exchange itself fails.
///
/// DNS failures, refused connections, TLS errors and timeouts of the
/// underlying stack all land here. No retry is attempted.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// An error envelope returned by the Lazada API.
///
/// Lazada reports failures in the body with a non-`"0"` `code`, usually
/// with an HTTP 200 status. The fields are kept verbatim so callers can
/// branch on `code` and quote `request_id` when contacting support.
///
/// # Example
///
/// ```rust
/// use lazada_api::ApiError;
///
/// let error = ApiError {
///     code: "IncompleteSignature".to_string(),
///     error_type: "ISV".to_string(),
///     message: "The request signature does not conform to platform standards".to_string(),
///     request_id: "0b8f7e2c16246000000001".to_string(),
/// };
///
/// assert!(error.to_string().contains("code: IncompleteSignature"));
/// assert!(error.to_string().contains("request_id: 0b8f7e2c16246000000001"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Lazada API error: code: {code} - type: {error_type} - message: {message} - request_id: {request_id}"
)]
pub struct ApiError {
    /// The error code, e.g. `IllegalAccessToken`.
    pub code: String,
    /// The error category reported by the gateway (`ISV`, `ISP`, `SYSTEM`).
    pub error_type: String,
    /// Human-readable message.
    pub message: String,
    /// Gateway request identifier.
    pub request_id: String,
}

/// Unified error type for all client calls.
#[derive(Debug, Error)]
pub enum LazadaError {
    /// The call was rejected before anything was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Lazada answered with an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded.
    #[error("Failed to decode Lazada response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LazadaError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(HttpError::Network(error))
    }
}
