//! Order records returned by `GetOrders` and `GetOrder`.
//!
//! Lazada mixes representations freely: prices arrive as strings, vouchers
//! and fees as numbers, timestamps as `"2021-06-25 15:59:32 +0700"` strings.
//! The fields below keep the wire types; every field is optional so that
//! records missing a field for a given region still decode.

use serde::{Deserialize, Serialize};

use super::address::OrderAddress;

/// A Lazada order.
///
/// # Example
///
/// ```rust
/// use lazada_api::orders::Order;
///
/// let order: Order = serde_json::from_str(r#"{
///     "order_id": 406948191627528,
///     "price": "1,299.00",
///     "items_count": 2,
///     "statuses": ["pending"]
/// }"#).unwrap();
///
/// assert_eq!(order.order_id, Some(406948191627528));
/// assert_eq!(order.statuses, vec!["pending".to_string()]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The human-facing order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<i64>,

    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the order was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Distinct statuses of the order's items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,

    /// Total order price, formatted by the marketplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Number of items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_count: Option<i64>,

    /// Payment method, e.g. `COD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Buyer first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_first_name: Option<String>,

    /// Buyer last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_last_name: Option<String>,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_billing: Option<OrderAddress>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_shipping: Option<OrderAddress>,

    /// Total voucher amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher: Option<f64>,

    /// Voucher amount funded by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_platform: Option<f64>,

    /// Voucher amount funded by the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_seller: Option<f64>,

    /// Voucher code entered at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,

    /// Shipping fee charged to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee: Option<f64>,

    /// Shipping fee before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee_original: Option<f64>,

    /// Shipping discount funded by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee_discount_platform: Option<f64>,

    /// Shipping discount funded by the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee_discount_seller: Option<f64>,

    /// Promised shipping time window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promised_shipping_times: Option<String>,

    /// Warehouse the order ships from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_code: Option<String>,

    /// Whether the buyer asked for gift wrapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_option: Option<bool>,

    /// Gift message from the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,

    /// Buyer remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Delivery information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<String>,

    /// National registration number of the buyer, where required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_registration_number: Option<String>,

    /// Tax code of the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,

    /// Branch number of the buyer's company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_number: Option<String>,

    /// JSON-encoded extra attributes, e.g. `{"TaxInvoiceRequested":false}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<String>,
}

/// Payload of `GetOrder`: a single order record.
pub type GetOrderResponse = Order;

/// Payload of `GetOrders`: one page of orders.
///
/// # Example
///
/// ```rust
/// use lazada_api::orders::GetOrdersResponse;
///
/// let page: GetOrdersResponse = serde_json::from_str(
///     r#"{"count": 1, "countTotal": 37, "orders": [{"order_id": 1}]}"#,
/// ).unwrap();
///
/// assert_eq!(page.count, 1);
/// assert_eq!(page.count_total, 37);
/// assert_eq!(page.orders[0].order_id, Some(1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GetOrdersResponse {
    /// Number of orders in this page.
    #[serde(default)]
    pub count: u64,

    /// Number of orders matching the filter across all pages.
    #[serde(rename = "countTotal", default)]
    pub count_total: u64,

    /// The orders in this page.
    #[serde(default)]
    pub orders: Vec<Order>,
}
