//! The catalog of remote operations this SDK can call.
//!
//! Each operation is described once by an [`OperationDescriptor`] (name,
//! path suffix, default HTTP method). The [`Operation`] trait attaches the
//! typed payload shape so a single executor,
//! [`LazadaClient::call`](crate::LazadaClient::call), serves every
//! operation.

use serde::de::DeserializeOwned;

use crate::clients::http_request::HttpMethod;
use crate::error::ConfigError;
use crate::orders::{GetOrderItemsResponse, GetOrderResponse, GetOrdersResponse};

/// A named remote operation and where it lives on the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// The operation name, e.g. `GetOrders`.
    pub name: &'static str,
    /// Path suffix appended to the gateway URL. This is also the signed path.
    pub path: &'static str,
    /// The HTTP method the operation is normally called with.
    pub method: HttpMethod,
}

impl OperationDescriptor {
    /// Creates a new operation descriptor.
    #[must_use]
    pub const fn new(name: &'static str, path: &'static str, method: HttpMethod) -> Self {
        Self { name, path, method }
    }

    /// Looks up an operation by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownOperation`] listing the registered
    /// names when `name` is not in the catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazada_api::clients::OperationDescriptor;
    ///
    /// let op = OperationDescriptor::lookup("GetOrderItems").unwrap();
    /// assert_eq!(op.path, "/order/items/get");
    ///
    /// assert!(OperationDescriptor::lookup("GetProducts").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static Self, ConfigError> {
        OPERATIONS
            .iter()
            .find(|op| op.name == name)
            .ok_or_else(|| ConfigError::UnknownOperation {
                name: name.to_string(),
                valid: OPERATIONS
                    .iter()
                    .map(|op| op.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Returns the full request URL for this operation under `gateway_url`.
    #[must_use]
    pub fn url(&self, gateway_url: &str) -> String {
        format!("{gateway_url}{}", self.path)
    }
}

/// Every operation the SDK knows about.
pub const OPERATIONS: &[OperationDescriptor] = &[
    GetOrders::DESCRIPTOR,
    GetOrder::DESCRIPTOR,
    GetOrderItems::DESCRIPTOR,
];

/// A remote operation with a statically known payload shape.
///
/// Implementors are zero-sized markers; the typed executor decodes the
/// success envelope's `data` field into [`Operation::Output`].
pub trait Operation {
    /// The payload shape carried in the success envelope's `data` field.
    type Output: DeserializeOwned;

    /// Name, path and method of the operation.
    const DESCRIPTOR: OperationDescriptor;
}

/// List orders updated or created in a time window (`/orders/get`).
#[derive(Clone, Copy, Debug)]
pub struct GetOrders;

impl Operation for GetOrders {
    type Output = GetOrdersResponse;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("GetOrders", "/orders/get", HttpMethod::Get);
}

/// Fetch a single order by `order_id` (`/order/get`).
#[derive(Clone, Copy, Debug)]
pub struct GetOrder;

impl Operation for GetOrder {
    type Output = GetOrderResponse;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("GetOrder", "/order/get", HttpMethod::Get);
}

/// Fetch the line items of an order (`/order/items/get`).
#[derive(Clone, Copy, Debug)]
pub struct GetOrderItems;

impl Operation for GetOrderItems {
    type Output = GetOrderItemsResponse;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("GetOrderItems", "/order/items/get", HttpMethod::Get);
}
