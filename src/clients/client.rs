//! The Lazada API client.
//!
//! [`LazadaClient`] ties the pipeline together: it builds and signs the
//! request, sends it, decodes the envelope and, for typed calls, decodes
//! the payload into the operation's shape.

use crate::auth::ApiParams;
use crate::clients::errors::LazadaError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{FileParams, HttpMethod, RequestBuilder};
use crate::clients::http_response::{decode_response, ApiResponse};
use crate::clients::operation::{
    GetOrder, GetOrderItems, GetOrders, Operation, OperationDescriptor,
};
use crate::config::LazadaConfig;
use crate::orders::{GetOrderItemsResponse, GetOrderResponse, GetOrdersResponse};

/// Client for the Lazada Open Platform REST API.
///
/// The configuration and system parameters are fixed at construction;
/// every call gets its own parameters and a fresh timestamp, so one client
/// can serve concurrent calls.
///
/// # Thread Safety
///
/// `LazadaClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lazada_api::{LazadaClient, LazadaConfig, AppKey, AppSecret, Region};
/// use lazada_api::auth::ApiParams;
///
/// let config = LazadaConfig::builder()
///     .app_key(AppKey::new("100123")?)
///     .app_secret(AppSecret::new("secret")?)
///     .region(Region::Th)
///     .build()?;
/// let client = LazadaClient::new(config);
///
/// let params: ApiParams = [
///     ("access_token".to_string(), token),
///     ("order_id".to_string(), "406948191627528".to_string()),
/// ]
/// .into();
///
/// let order = client.get_order(&params).await?;
/// println!("{:?} items", order.items_count);
/// ```
#[derive(Debug)]
pub struct LazadaClient {
    config: LazadaConfig,
    request_builder: RequestBuilder,
    http_client: HttpClient,
}

// Verify LazadaClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LazadaClient>();
};

impl LazadaClient {
    /// Creates a new client from a configuration.
    #[must_use]
    pub fn new(config: LazadaConfig) -> Self {
        let request_builder = RequestBuilder::new(&config);
        let http_client = HttpClient::new(&config);
        Self {
            config,
            request_builder,
            http_client,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &LazadaConfig {
        &self.config
    }

    /// Returns the builder used to sign this client's requests.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.request_builder
    }

    /// Executes an operation by name and returns the success envelope.
    ///
    /// # Errors
    ///
    /// - [`LazadaError::Config`] if `operation` is not in the catalog
    /// - [`LazadaError::Http`] if the request could not be sent
    /// - [`LazadaError::Api`] if Lazada returned an error envelope
    /// - [`LazadaError::Decode`] if the body is not a valid envelope
    pub async fn execute(
        &self,
        operation: &str,
        method: HttpMethod,
        params: &ApiParams,
        files: Option<&FileParams>,
    ) -> Result<ApiResponse, LazadaError> {
        let descriptor = OperationDescriptor::lookup(operation)?;
        self.execute_descriptor(descriptor, method, params, files)
            .await
    }

    /// Executes a described operation and returns the success envelope.
    ///
    /// # Errors
    ///
    /// See [`LazadaClient::execute`].
    pub async fn execute_descriptor(
        &self,
        descriptor: &OperationDescriptor,
        method: HttpMethod,
        params: &ApiParams,
        files: Option<&FileParams>,
    ) -> Result<ApiResponse, LazadaError> {
        let request = self
            .request_builder
            .build(descriptor, method, params, files);

        tracing::debug!(
            operation = descriptor.name,
            method = %method,
            url = %request.url,
            "Sending Lazada API request"
        );

        let response = self.http_client.send(request).await?;
        decode_response(&response.body)
    }

    /// Calls a typed operation with its default method and decodes the payload.
    ///
    /// # Errors
    ///
    /// See [`LazadaClient::execute`]; a payload that does not match
    /// `O::Output` is reported as [`LazadaError::Decode`].
    pub async fn call<O: Operation>(&self, params: &ApiParams) -> Result<O::Output, LazadaError> {
        let descriptor = O::DESCRIPTOR;
        self.execute_descriptor(&descriptor, descriptor.method, params, None)
            .await?
            .decode_data()
    }

    /// Lists orders (`GetOrders`).
    ///
    /// # Errors
    ///
    /// See [`LazadaClient::call`].
    pub async fn get_orders(&self, params: &ApiParams) -> Result<GetOrdersResponse, LazadaError> {
        self.call::<GetOrders>(params).await
    }

    /// Fetches one order (`GetOrder`).
    ///
    /// # Errors
    ///
    /// See [`LazadaClient::call`].
    pub async fn get_order(&self, params: &ApiParams) -> Result<GetOrderResponse, LazadaError> {
        self.call::<GetOrder>(params).await
    }

    /// Fetches the items of one order (`GetOrderItems`).
    ///
    /// # Errors
    ///
    /// See [`LazadaClient::call`].
    pub async fn get_order_items(
        &self,
        params: &ApiParams,
    ) -> Result<GetOrderItemsResponse, LazadaError> {
        self.call::<GetOrderItems>(params).await
    }
}
