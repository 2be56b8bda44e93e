//! HTTP client types for Lazada API communication.
//!
//! This module provides the request pipeline of the SDK: operation catalog,
//! signed request construction, transport and response decoding.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LazadaClient`]: The client façade with typed per-operation methods
//! - [`OperationDescriptor`] / [`Operation`]: The catalog of remote operations
//! - [`RequestBuilder`] / [`PreparedRequest`]: Signed request construction
//! - [`HttpClient`]: The async HTTP transport
//! - [`ApiResponse`] / [`decode_response`]: Envelope decoding
//! - [`LazadaError`]: Unified error type for client calls
//!
//! # Pipeline
//!
//! ```text
//! LazadaClient::get_orders
//!   -> RequestBuilder::build   (resolve URL, stamp timestamp, sign)
//!   -> HttpClient::send        (no retries)
//!   -> decode_response         (error envelope first, then success)
//!   -> ApiResponse::decode_data::<GetOrdersResponse>
//! ```

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod operation;

pub use client::LazadaClient;
pub use errors::{ApiError, HttpError, LazadaError};
pub use http_client::{HttpClient, RawResponse, SDK_VERSION};
pub use http_request::{FileParams, FormBody, HttpMethod, PreparedRequest, RequestBuilder};
pub use http_response::{decode_response, ApiResponse, SUCCESS_CODE};
pub use operation::{
    GetOrder, GetOrderItems, GetOrders, Operation, OperationDescriptor, OPERATIONS,
};
