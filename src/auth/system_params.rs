//! System parameters sent with every request.

use chrono::Utc;

use crate::auth::ApiParams;
use crate::config::LazadaConfig;

/// The only signing method this SDK produces.
pub const SIGN_METHOD: &str = "sha256";

/// Parameters that identify the calling application on every request.
///
/// The application key, signing method and optional partner id are fixed
/// when the client is built. The `timestamp` is not stored here: it is
/// stamped per request by [`SystemParams::stamped`] so long-lived clients
/// never sign a stale value.
///
/// # Example
///
/// ```rust
/// use lazada_api::{LazadaConfig, AppKey, AppSecret};
/// use lazada_api::auth::SystemParams;
///
/// let config = LazadaConfig::builder()
///     .app_key(AppKey::new("100123").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let params = SystemParams::from_config(&config).stamped(1_624_600_000_000);
/// assert_eq!(params["app_key"], "100123");
/// assert_eq!(params["sign_method"], "sha256");
/// assert_eq!(params["timestamp"], "1624600000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemParams {
    params: ApiParams,
}

impl SystemParams {
    /// Builds the fixed system parameters from a configuration.
    #[must_use]
    pub fn from_config(config: &LazadaConfig) -> Self {
        let mut params = ApiParams::new();
        params.insert("app_key".to_string(), config.app_key().as_ref().to_string());
        params.insert("sign_method".to_string(), SIGN_METHOD.to_string());
        if let Some(partner_id) = config.partner_id() {
            params.insert("partner_id".to_string(), partner_id.to_string());
        }
        Self { params }
    }

    /// Returns the fixed parameters without a timestamp.
    #[must_use]
    pub const fn fixed(&self) -> &ApiParams {
        &self.params
    }

    /// Returns the parameters for one request, stamped with `timestamp_ms`.
    #[must_use]
    pub fn stamped(&self, timestamp_ms: i64) -> ApiParams {
        let mut params = self.params.clone();
        params.insert("timestamp".to_string(), timestamp_ms.to_string());
        params
    }

    /// Returns the current time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn now_millis() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppKey, AppSecret};

    fn config(partner_id: Option<&str>) -> LazadaConfig {
        let mut builder = LazadaConfig::builder()
            .app_key(AppKey::new("ak1").unwrap())
            .app_secret(AppSecret::new("s3cr3t").unwrap());
        if let Some(id) = partner_id {
            builder = builder.partner_id(id);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_fixed_params_have_no_timestamp() {
        let params = SystemParams::from_config(&config(None));
        assert_eq!(params.fixed().len(), 2);
        assert!(!params.fixed().contains_key("timestamp"));
    }

    #[test]
    fn test_stamped_adds_timestamp_without_mutating() {
        let params = SystemParams::from_config(&config(None));
        let first = params.stamped(1);
        let second = params.stamped(2);

        assert_eq!(first["timestamp"], "1");
        assert_eq!(second["timestamp"], "2");
        assert!(!params.fixed().contains_key("timestamp"));
    }

    #[test]
    fn test_partner_id_is_included_when_configured() {
        let params = SystemParams::from_config(&config(Some("lazop-sdk-rust")));
        assert_eq!(
            params.fixed().get("partner_id"),
            Some(&"lazop-sdk-rust".to_string())
        );
    }

    #[test]
    fn test_now_millis_is_in_milliseconds() {
        // Later than 2020-01-01T00:00:00Z expressed in milliseconds
        assert!(SystemParams::now_millis() > 1_577_836_800_000);
    }
}
