//! Order line items returned by `GetOrderItems`.

use serde::{Deserialize, Serialize};

/// A single line item of an order.
///
/// One item is returned per purchased unit, so an order for two units of
/// the same SKU yields two items with distinct `order_item_id`s.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderItem {
    /// The unique identifier of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,

    /// The order this item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Fulfilment status, e.g. `pending` or `delivered`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Seller SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Marketplace SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_sku: Option<String>,

    /// Seller shop identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,

    /// Product variation, e.g. colour and size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,

    /// Main product image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_main_image: Option<String>,

    /// Product page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_detail_url: Option<String>,

    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// List price of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<f64>,

    /// Price paid by the buyer after vouchers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_price: Option<f64>,

    /// Tax amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    /// Shipping amount charged for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,

    /// Shipping service cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_service_cost: Option<i64>,

    /// Total voucher amount applied to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_amount: Option<f64>,

    /// Voucher amount funded by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_platform: Option<f64>,

    /// Voucher amount funded by the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_seller: Option<f64>,

    /// Voucher code applied to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,

    /// Shipping type, e.g. `Dropshipping`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<String>,

    /// Shipping provider type, e.g. `standard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_provider_type: Option<String>,

    /// Shipment provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_provider: Option<String>,

    /// Promised shipping time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promised_shipping_time: Option<String>,

    /// Package the item ships in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    /// Tracking code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,

    /// Tracking code prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code_pre: Option<String>,

    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Purchase order identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,

    /// Purchase order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,

    /// `1` for digital goods, `0` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_digital: Option<i64>,

    /// Delivery information for digital goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_delivery_info: Option<String>,

    /// Cancellation or return reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Free-text detail for `reason`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_detail: Option<String>,

    /// Who initiated a cancellation or return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_return_initiator: Option<String>,

    /// Return status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_status: Option<String>,

    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the item was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// JSON-encoded extra attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<String>,
}

/// Payload of `GetOrderItems`: the items of one order.
pub type GetOrderItemsResponse = Vec<OrderItem>;
