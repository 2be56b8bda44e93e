//! HTTP transport for Lazada API communication.
//!
//! This module provides the [`HttpClient`] type, which sends a
//! [`PreparedRequest`] and hands back the raw response body.

use std::collections::HashMap;

use reqwest::multipart::{Form, Part};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{FormBody, PreparedRequest};
use crate::config::LazadaConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The raw result of an HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Unparsed response body.
    pub body: Vec<u8>,
}

/// HTTP transport shared by every call of a client.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - Dispatching GET and multipart POST requests
///
/// There is no retry logic: a network failure is returned as
/// [`HttpError::Network`] and a non-2xx status is handed to the caller
/// with its body, since Lazada reports errors in the body.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &LazadaConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Lazada API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a prepared request and reads the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read.
    pub async fn send(&self, request: PreparedRequest) -> Result<RawResponse, HttpError> {
        let mut req_builder = self
            .client
            .request(request.method.as_reqwest(), &request.url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(form) = request.form {
            req_builder = req_builder.multipart(multipart_form(form)?);
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        if !(200..300).contains(&status) {
            tracing::warn!(
                status,
                method = %request.method,
                "Lazada gateway answered with a non-success status"
            );
        }

        Ok(RawResponse { status, body })
    }
}

/// Encodes a form body: file parts first, then one text field per parameter.
fn multipart_form(body: FormBody) -> Result<Form, reqwest::Error> {
    let mut form = Form::new();
    for (name, content) in body.files {
        let part = Part::bytes(content)
            .file_name(name.clone())
            .mime_str("application/octet-stream")?;
        form = form.part(name, part);
    }
    for (name, value) in body.fields {
        form = form.text(name, value);
    }
    Ok(form)
}
