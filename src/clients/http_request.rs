//! Signed request construction for the Lazada API.
//!
//! This module provides [`RequestBuilder`], which turns an operation, its
//! parameters and optional file attachments into a [`PreparedRequest`]
//! ready for the transport.
//!
//! # Parameter Placement
//!
//! | Method | Query string                              | Body                          |
//! |--------|-------------------------------------------|-------------------------------|
//! | GET    | system + operation params, then `sign`    | none                          |
//! | POST   | system params, then `sign`                | multipart: files, then params |
//!
//! POST bodies stay as a [`FormBody`] until the transport encodes them.
//!
//! The signature always covers system and operation parameters, wherever
//! they are placed.

use std::collections::BTreeMap;
use std::fmt;

use crate::auth::{merge_params, sign_request, ApiParams, SystemParams, SIGN_PARAM};
use crate::clients::operation::OperationDescriptor;
use crate::config::{AppSecret, LazadaConfig};

/// HTTP methods supported by the Lazada API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET; parameters travel in the query string.
    Get,
    /// HTTP POST; parameters and files travel in a multipart body.
    Post,
}

impl HttpMethod {
    /// Returns the corresponding `reqwest` method.
    #[must_use]
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Named binary attachments uploaded with a POST operation.
pub type FileParams = BTreeMap<String, Vec<u8>>;

/// The `multipart/form-data` payload of a POST request.
///
/// Each attachment becomes a file part named after its key; each operation
/// parameter becomes a text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormBody {
    /// Operation parameters, sent as text fields.
    pub fields: ApiParams,
    /// Attachments, sent as file parts ahead of the fields.
    pub files: FileParams,
}

/// A fully signed request, ready to be dispatched.
///
/// Kept as plain data so it can be inspected or logged before sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Gateway URL, operation path and encoded query string.
    pub url: String,
    /// Multipart payload, present for POST requests.
    pub form: Option<FormBody>,
    /// The computed signature, also present in the query string.
    pub sign: String,
}

impl PreparedRequest {
    /// Returns the encoded query string (without the leading `?`).
    #[must_use]
    pub fn query(&self) -> &str {
        self.url.split_once('?').map_or("", |(_, query)| query)
    }

    /// Returns the value of the first query parameter named `key`, decoded.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query().split('&').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (urlencoding::decode(name).ok()? == key)
                .then(|| urlencoding::decode(value).ok().map(|v| v.into_owned()))
                .flatten()
        })
    }
}

/// Builds signed requests for one client configuration.
///
/// # Example
///
/// ```rust
/// use lazada_api::{LazadaConfig, AppKey, AppSecret};
/// use lazada_api::auth::ApiParams;
/// use lazada_api::clients::{GetOrder, HttpMethod, Operation, RequestBuilder};
///
/// let config = LazadaConfig::builder()
///     .app_key(AppKey::new("ak1").unwrap())
///     .app_secret(AppSecret::new("s3cr3t").unwrap())
///     .build()
///     .unwrap();
///
/// let params: ApiParams = [("order_id".to_string(), "123".to_string())].into();
/// let request = RequestBuilder::new(&config)
///     .timestamp(1_624_600_000_000)
///     .build(&GetOrder::DESCRIPTOR, HttpMethod::Get, &params, None);
///
/// assert!(request.url.starts_with("https://api.lazada.co.th/rest/order/get?"));
/// assert_eq!(request.query_param("order_id").as_deref(), Some("123"));
/// assert!(request.form.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    gateway_url: String,
    app_secret: AppSecret,
    system_params: SystemParams,
    timestamp: Option<i64>,
}

impl RequestBuilder {
    /// Creates a builder for the given configuration.
    #[must_use]
    pub fn new(config: &LazadaConfig) -> Self {
        Self {
            gateway_url: config.gateway_url().to_string(),
            app_secret: config.app_secret().clone(),
            system_params: SystemParams::from_config(config),
            timestamp: None,
        }
    }

    /// Pins the `timestamp` system parameter instead of using the current time.
    #[must_use]
    pub const fn timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp = Some(timestamp_ms);
        self
    }

    /// Returns the system parameters without a timestamp.
    #[must_use]
    pub const fn system_params(&self) -> &SystemParams {
        &self.system_params
    }

    /// Builds a signed request.
    ///
    /// `files` are only used for POST requests.
    #[must_use]
    pub fn build(
        &self,
        operation: &OperationDescriptor,
        method: HttpMethod,
        params: &ApiParams,
        files: Option<&FileParams>,
    ) -> PreparedRequest {
        let system = self
            .system_params
            .stamped(self.timestamp.unwrap_or_else(SystemParams::now_millis));

        // The signed path is the operation suffix, never the full URL.
        let sign = sign_request(self.app_secret.as_ref(), operation.path, &system, params);

        let (query_params, form) = match method {
            HttpMethod::Get => (merge_params(&system, params), None),
            HttpMethod::Post => (
                system,
                Some(FormBody {
                    fields: params.clone(),
                    files: files.cloned().unwrap_or_default(),
                }),
            ),
        };

        let mut query = encode_query(&query_params);
        query.push('&');
        query.push_str(SIGN_PARAM);
        query.push('=');
        query.push_str(&sign);

        PreparedRequest {
            method,
            url: format!("{}?{query}", operation.url(&self.gateway_url)),
            form,
            sign,
        }
    }
}

/// Percent-encodes parameters as `key=value` pairs joined by `&`, in key order.
fn encode_query(params: &ApiParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_signature;
    use crate::clients::operation::{GetOrder, GetOrders, Operation};
    use crate::config::{AppKey, GatewayUrl};

    const TIMESTAMP: i64 = 1_624_600_000_000;

    fn config() -> LazadaConfig {
        LazadaConfig::builder()
            .app_key(AppKey::new("ak1").unwrap())
            .app_secret(AppSecret::new("s3cr3t").unwrap())
            .build()
            .unwrap()
    }

    fn order_params() -> ApiParams {
        [("order_id".to_string(), "406948191627528".to_string())].into()
    }

    fn builder() -> RequestBuilder {
        RequestBuilder::new(&config()).timestamp(TIMESTAMP)
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Post.as_reqwest(), reqwest::Method::POST);
    }

    #[test]
    fn test_get_request_matches_known_signature() {
        let request = builder().build(&GetOrders::DESCRIPTOR, HttpMethod::Get, &order_params(), None);

        assert_eq!(
            request.url,
            "https://api.lazada.co.th/rest/orders/get?app_key=ak1&order_id=406948191627528&sign_method=sha256&timestamp=1624600000000&sign=69B0C7734AB0EDC28A2D38A8CAF91B364320D86D360531610860C3F95B523624"
        );
        assert!(request.form.is_none());
    }

    #[test]
    fn test_get_places_params_in_query() {
        let params: ApiParams = [("order_id".to_string(), "123".to_string())].into();
        let request = builder().build(&GetOrder::DESCRIPTOR, HttpMethod::Get, &params, None);

        assert!(request.query().contains("order_id=123"));
    }

    #[test]
    fn test_post_places_params_in_body_only() {
        let params: ApiParams = [("order_id".to_string(), "123".to_string())].into();
        let request = builder().build(&GetOrder::DESCRIPTOR, HttpMethod::Post, &params, None);

        assert!(!request.query().contains("order_id"));
        assert!(request.query_param("app_key").is_some());
        assert!(request.query_param("sign").is_some());

        let form = request.form.unwrap();
        assert_eq!(form.fields, params);
        assert!(form.files.is_empty());
    }

    #[test]
    fn test_post_signature_covers_body_params() {
        let params: ApiParams = [("order_id".to_string(), "123".to_string())].into();
        let post = builder().build(&GetOrder::DESCRIPTOR, HttpMethod::Post, &params, None);
        let get = builder().build(&GetOrder::DESCRIPTOR, HttpMethod::Get, &params, None);

        assert_eq!(post.sign, get.sign);
    }

    #[test]
    fn test_post_attaches_files() {
        let files: FileParams = [("image".to_string(), b"\x89PNG".to_vec())].into();
        let request = builder().build(
            &GetOrder::DESCRIPTOR,
            HttpMethod::Post,
            &ApiParams::new(),
            Some(&files),
        );

        let form = request.form.unwrap();
        assert_eq!(form.files, files);
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_get_ignores_files() {
        let files: FileParams = [("image".to_string(), b"data".to_vec())].into();
        let request = builder().build(
            &GetOrder::DESCRIPTOR,
            HttpMethod::Get,
            &ApiParams::new(),
            Some(&files),
        );
        assert!(request.form.is_none());
    }

    #[test]
    fn test_sign_is_last_and_not_signed() {
        let request = builder().build(&GetOrder::DESCRIPTOR, HttpMethod::Get, &order_params(), None);

        assert!(request.query().ends_with(&format!("&sign={}", request.sign)));

        let transmitted: ApiParams = request
            .query()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| {
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect();
        assert!(verify_signature(
            "s3cr3t",
            GetOrder::DESCRIPTOR.path,
            &transmitted,
            &request.sign
        ));
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let params: ApiParams = [(
            "update_after".to_string(),
            "2021-06-25T15:59:32+07:00".to_string(),
        )]
        .into();
        let request = builder().build(&GetOrders::DESCRIPTOR, HttpMethod::Get, &params, None);

        assert!(request
            .query()
            .contains("update_after=2021-06-25T15%3A59%3A32%2B07%3A00"));
        assert_eq!(
            request.query_param("update_after").as_deref(),
            Some("2021-06-25T15:59:32+07:00")
        );
    }

    #[test]
    fn test_timestamp_defaults_to_now() {
        let request = RequestBuilder::new(&config()).build(
            &GetOrder::DESCRIPTOR,
            HttpMethod::Get,
            &ApiParams::new(),
            None,
        );
        let timestamp: i64 = request.query_param("timestamp").unwrap().parse().unwrap();
        assert!(timestamp > TIMESTAMP);
    }

    #[test]
    fn test_gateway_override_is_used() {
        let config = LazadaConfig::builder()
            .app_key(AppKey::new("ak1").unwrap())
            .app_secret(AppSecret::new("s3cr3t").unwrap())
            .gateway_url(GatewayUrl::new("http://127.0.0.1:8080/rest").unwrap())
            .build()
            .unwrap();
        let request = RequestBuilder::new(&config).timestamp(TIMESTAMP).build(
            &GetOrder::DESCRIPTOR,
            HttpMethod::Get,
            &ApiParams::new(),
            None,
        );
        assert!(request.url.starts_with("http://127.0.0.1:8080/rest/order/get?"));
    }
}
