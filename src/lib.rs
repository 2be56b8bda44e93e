//! # Lazada API Rust SDK
//!
//! A Rust SDK for the Lazada Open Platform REST API, providing type-safe
//! configuration, request signing, and an async client for the order
//! operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`LazadaConfig`] and [`LazadaConfigBuilder`]
//! - Validated newtypes for application credentials and gateway URLs
//! - Region-based gateway resolution via [`Region`]
//! - HMAC-SHA256 request signing via [`auth`]
//! - GET and multipart POST request construction
//! - Envelope decoding that surfaces Lazada error envelopes as [`ApiError`]
//! - Typed order payloads via [`orders`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lazada_api::{LazadaConfig, AppKey, AppSecret, Region};
//!
//! // Create configuration using the builder pattern
//! let config = LazadaConfig::builder()
//!     .app_key(AppKey::new("100123").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .region(Region::My)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.gateway_url(), "https://api.lazada.com.my/rest");
//! ```
//!
//! ## Fetching Orders
//!
//! ```rust,ignore
//! use lazada_api::{LazadaClient, LazadaConfig, AppKey, AppSecret};
//! use lazada_api::auth::ApiParams;
//!
//! let config = LazadaConfig::builder()
//!     .app_key(AppKey::new("100123")?)
//!     .app_secret(AppSecret::new("your-app-secret")?)
//!     .region_code("TH")
//!     .build()?;
//! let client = LazadaClient::new(config);
//!
//! let mut params = ApiParams::new();
//! params.insert("access_token".to_string(), access_token);
//! params.insert("created_after".to_string(), "2021-06-01T00:00:00+07:00".to_string());
//! params.insert("limit".to_string(), "50".to_string());
//!
//! let page = client.get_orders(&params).await?;
//! for order in &page.orders {
//!     let items = client
//!         .get_order_items(&[(
//!             "order_id".to_string(),
//!             order.order_id.unwrap_or_default().to_string(),
//!         )]
//!         .into())
//!         .await?;
//!     println!("{:?}: {} items", order.order_id, items.len());
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every client call returns [`LazadaError`]:
//!
//! ```rust,ignore
//! use lazada_api::LazadaError;
//!
//! match client.get_order(&params).await {
//!     Ok(order) => println!("{:?}", order.statuses),
//!     Err(LazadaError::Api(e)) => eprintln!("Lazada rejected the call: {} ({})", e.code, e.request_id),
//!     Err(LazadaError::Http(e)) => eprintln!("transport failure: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Per-call timestamps**: Each request is stamped when it is built

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod orders;

// Re-export public types at crate root for convenience
pub use config::{AppKey, AppSecret, GatewayUrl, LazadaConfig, LazadaConfigBuilder, Region};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    decode_response, ApiError, ApiResponse, HttpClient, HttpError, HttpMethod, LazadaClient,
    LazadaError, Operation, OperationDescriptor, PreparedRequest, RequestBuilder,
};
