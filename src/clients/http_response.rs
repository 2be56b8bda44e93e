//! Response envelope decoding for the Lazada API.
//!
//! Every Lazada response body is a JSON envelope:
//!
//! ```json
//! {"code": "0", "type": "", "message": "", "request_id": "...", "data": {...}}
//! ```
//!
//! A `code` other than `"0"` marks an error envelope. [`decode_response`]
//! checks for an error first and only then commits to the success shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::clients::errors::{ApiError, LazadaError};

/// The `code` value of a successful response.
pub const SUCCESS_CODE: &str = "0";

/// A successful response envelope.
///
/// `data` is kept as an opaque JSON value until the caller decodes it into
/// the shape of the operation it called, see [`ApiResponse::decode_data`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    /// Status code, `"0"` for success.
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: String,
    /// Response type, usually empty on success.
    #[serde(rename = "type", default, deserialize_with = "deserialize_text")]
    pub response_type: String,
    /// Message, usually empty on success.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: String,
    /// Gateway request identifier.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub request_id: String,
    /// Operation-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Decodes the payload into the shape expected for the operation.
    ///
    /// # Errors
    ///
    /// Returns [`LazadaError::Decode`] if `data` does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazada_api::clients::decode_response;
    /// use lazada_api::orders::GetOrdersResponse;
    ///
    /// let body = br#"{"code":"0","request_id":"r1","data":{"count":0,"countTotal":0,"orders":[]}}"#;
    /// let page: GetOrdersResponse = decode_response(body).unwrap().decode_data().unwrap();
    /// assert_eq!(page.count, 0);
    /// ```
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, LazadaError> {
        Ok(T::deserialize(&self.data)?)
    }
}

/// The fields probed for an error before a body is treated as a success.
///
/// Only `code` decides whether the body is an error. The other fields never
/// fail the probe: null or non-string values are read as text.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "deserialize_optional_code")]
    code: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_text")]
    error_type: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    message: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    request_id: String,
}

impl ErrorEnvelope {
    fn into_error(self) -> Option<ApiError> {
        match self.code {
            Some(code) if code != SUCCESS_CODE => Some(ApiError {
                code,
                error_type: self.error_type,
                message: self.message,
                request_id: self.request_id,
            }),
            _ => None,
        }
    }
}

/// Decodes a raw response body into a success envelope or an error.
///
/// The error probe is lenient: a body that is not a JSON object counts as
/// "no error detected", and the descriptive fields of an error envelope
/// may be null or of any type. Only a failure to parse the success
/// envelope is reported as [`LazadaError::Decode`].
///
/// # Errors
///
/// - [`LazadaError::Api`] if the body carries a `code` other than `"0"`
/// - [`LazadaError::Decode`] if the body is not a valid envelope
///
/// # Example
///
/// ```rust
/// use lazada_api::LazadaError;
/// use lazada_api::clients::decode_response;
///
/// let body = br#"{"code":"IllegalAccessToken","type":"ISV","message":"expired","request_id":"r2"}"#;
/// match decode_response(body) {
///     Err(LazadaError::Api(e)) => assert_eq!(e.code, "IllegalAccessToken"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn decode_response(body: &[u8]) -> Result<ApiResponse, LazadaError> {
    let probe: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
    if let Some(error) = probe.into_error() {
        tracing::warn!(
            code = %error.code,
            error_type = %error.error_type,
            request_id = %error.request_id,
            "Lazada API returned an error: {}",
            error.message
        );
        return Err(error.into());
    }

    let response: ApiResponse = serde_json::from_slice(body)?;
    tracing::debug!(request_id = %response.request_id, "Decoded Lazada response");
    Ok(response)
}

/// Reads `code` as a JSON string or number; anything else counts as absent.
fn deserialize_optional_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_code(deserializer)?.unwrap_or_default())
}

/// Reads a descriptive field as text: null becomes empty, other values
/// keep their JSON rendering.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
