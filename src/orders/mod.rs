//! Typed payloads of the order operations.
//!
//! These are the shapes the `data` field of a success envelope is decoded
//! into:
//!
//! | Operation       | Payload                   |
//! |-----------------|---------------------------|
//! | `GetOrders`     | [`GetOrdersResponse`]     |
//! | `GetOrder`      | [`GetOrderResponse`]      |
//! | `GetOrderItems` | [`GetOrderItemsResponse`] |

mod address;
mod order;
mod order_item;

pub use address::OrderAddress;
pub use order::{GetOrderResponse, GetOrdersResponse, Order};
pub use order_item::{GetOrderItemsResponse, OrderItem};
