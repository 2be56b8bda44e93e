//! Billing and shipping addresses attached to orders.

use serde::{Deserialize, Serialize};

/// A billing or shipping address of an order.
///
/// Lazada spreads the street address over up to five lines whose meaning
/// depends on the country (e.g. district and ward in Vietnam). All fields
/// are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use lazada_api::orders::OrderAddress;
///
/// let address = OrderAddress {
///     first_name: Some("Somchai".to_string()),
///     address1: Some("99 Sukhumvit Rd".to_string()),
///     city: Some("Bangkok".to_string()),
///     post_code: Some("10110".to_string()),
///     country: Some("Thailand".to_string()),
///     ..Default::default()
/// };
/// assert!(address.last_name.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderAddress {
    /// The first name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Primary phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Secondary phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,

    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// Third address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,

    /// Fourth address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,

    /// Fifth address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address5: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,

    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
