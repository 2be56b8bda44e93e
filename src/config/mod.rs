//! Configuration types for the Lazada API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Lazada.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LazadaConfig`]: The main configuration struct holding all SDK settings
//! - [`LazadaConfigBuilder`]: A builder for constructing [`LazadaConfig`] instances
//! - [`AppKey`]: A validated app key newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`GatewayUrl`]: A validated gateway override URL
//! - [`Region`]: The marketplace region selecting the REST gateway
//!
//! # Example
//!
//! ```rust
//! use lazada_api::{LazadaConfig, AppKey, AppSecret, Region};
//!
//! let config = LazadaConfig::builder()
//!     .app_key(AppKey::new("100123").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .region(Region::Sg)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.gateway_url(), "https://api.lazada.sg/rest");
//! ```

mod newtypes;
mod region;

pub use newtypes::{AppKey, AppSecret, GatewayUrl};
pub use region::{Region, AUTHORIZATION_GATEWAY_URL};

use crate::error::ConfigError;

/// Configuration for the Lazada API SDK.
///
/// Holds the application credentials and the region whose gateway the
/// client talks to. The configuration is immutable once built.
///
/// # Thread Safety
///
/// `LazadaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use lazada_api::{LazadaConfig, AppKey, AppSecret, Region};
///
/// let config = LazadaConfig::builder()
///     .app_key(AppKey::new("100123").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .region_code("VN")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region(), Region::Vn);
/// ```
#[derive(Clone, Debug)]
pub struct LazadaConfig {
    app_key: AppKey,
    app_secret: AppSecret,
    region: Region,
    gateway_url: Option<GatewayUrl>,
    partner_id: Option<String>,
    user_agent_prefix: Option<String>,
}

impl LazadaConfig {
    /// Creates a new builder for constructing a `LazadaConfig`.
    #[must_use]
    pub fn builder() -> LazadaConfigBuilder {
        LazadaConfigBuilder::new()
    }

    /// Returns the app key.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the configured region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the gateway base URL requests are sent to.
    ///
    /// This is the override URL when one is configured, otherwise the
    /// region's gateway.
    #[must_use]
    pub fn gateway_url(&self) -> &str {
        self.gateway_url
            .as_ref()
            .map_or_else(|| self.region.gateway_url(), |url| url.as_ref())
    }

    /// Returns the partner id sent as a system parameter, if configured.
    #[must_use]
    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify LazadaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LazadaConfig>();
};

/// Builder for constructing [`LazadaConfig`] instances.
///
/// Required fields are `app_key` and `app_secret`.
///
/// # Defaults
///
/// - `region`: [`Region::Th`]
/// - `gateway_url`: `None` (use the region's gateway)
/// - `partner_id`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct LazadaConfigBuilder {
    app_key: Option<AppKey>,
    app_secret: Option<AppSecret>,
    region: Option<Region>,
    gateway_url: Option<GatewayUrl>,
    partner_id: Option<String>,
    user_agent_prefix: Option<String>,
}

impl LazadaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app key (required).
    #[must_use]
    pub fn app_key(mut self, key: AppKey) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the region from a country code such as `"SG"`.
    ///
    /// Unrecognized codes select the default region.
    #[must_use]
    pub fn region_code(mut self, code: &str) -> Self {
        self.region = Some(Region::from_code(code));
        self
    }

    /// Overrides the regional gateway URL.
    #[must_use]
    pub fn gateway_url(mut self, url: GatewayUrl) -> Self {
        self.gateway_url = Some(url);
        self
    }

    /// Sets the partner id sent with every request.
    #[must_use]
    pub fn partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LazadaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_key` or
    /// `app_secret` are not set.
    pub fn build(self) -> Result<LazadaConfig, ConfigError> {
        let app_key = self
            .app_key
            .ok_or(ConfigError::MissingRequiredField { field: "app_key" })?;
        let app_secret = self.app_secret.ok_or(ConfigError::MissingRequiredField {
            field: "app_secret",
        })?;

        Ok(LazadaConfig {
            app_key,
            app_secret,
            region: self.region.unwrap_or_default(),
            gateway_url: self.gateway_url,
            partner_id: self.partner_id,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
