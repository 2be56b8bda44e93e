//! Request authentication for the Lazada Open Platform.
//!
//! Lazada authenticates calls with a keyed signature rather than a bearer
//! header: the app key travels as a system parameter and the app secret
//! signs the path and parameters of each request.
//!
//! - [`SystemParams`]: the parameters attached to every request
//! - [`sign_request`] / [`compute_signature`]: signature generation
//! - [`verify_signature`]: constant-time signature check

mod signature;
mod system_params;

pub use signature::{
    compute_signature, merge_params, sign_request, verify_signature, ApiParams, SIGN_PARAM,
};
pub use system_params::{SystemParams, SIGN_METHOD};
