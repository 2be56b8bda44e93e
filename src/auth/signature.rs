//! HMAC-SHA256 request signing for the Lazada Open Platform.
//!
//! Every API call carries a `sign` query parameter computed over the
//! operation path and the merged system and operation parameters:
//!
//! 1. merge system and operation parameters (operation values win),
//! 2. sort the keys byte-wise ascending,
//! 3. feed the path, then each `key` immediately followed by its `value`
//!    into an HMAC-SHA256 keyed with the app secret,
//! 4. hex-encode the digest in upper case.
//!
//! The server repeats the same computation, so the signed key set must be
//! exactly the set of parameters transmitted (minus `sign` itself).
//!
//! # Example
//!
//! ```rust
//! use lazada_api::auth::{sign_request, ApiParams};
//!
//! let system: ApiParams = [("app_key".to_string(), "100123".to_string())].into();
//! let params: ApiParams = [("order_id".to_string(), "42".to_string())].into();
//!
//! let sign = sign_request("secret", "/order/get", &system, &params);
//! assert_eq!(sign.len(), 64);
//! assert!(sign.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
//! ```

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// String parameters of a request, ordered by key.
pub type ApiParams = BTreeMap<String, String>;

/// Name of the query parameter carrying the signature.
pub const SIGN_PARAM: &str = "sign";

/// Merges system and operation parameters into the signed key set.
///
/// Operation parameters take precedence when a key appears in both.
#[must_use]
pub fn merge_params(system: &ApiParams, params: &ApiParams) -> ApiParams {
    let mut merged = system.clone();
    for (key, value) in params {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Computes the signature of `path` over an already merged parameter set.
///
/// Keys are fed in ascending byte order with no separators between a key,
/// its value, or successive pairs.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(secret: &str, path: &str, merged: &ApiParams) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(path.as_bytes());
    for (key, value) in merged {
        mac.update(key.as_bytes());
        mac.update(value.as_bytes());
    }
    hex::encode_upper(mac.finalize().into_bytes())
}

/// Signs a request from its system and operation parameters.
#[must_use]
pub fn sign_request(secret: &str, path: &str, system: &ApiParams, params: &ApiParams) -> String {
    compute_signature(secret, path, &merge_params(system, params))
}

/// Checks a received signature against the parameters it claims to cover.
///
/// Any `sign` entry in `params` is ignored. Hex digits are compared
/// case-insensitively and in constant time.
#[must_use]
pub fn verify_signature(secret: &str, path: &str, params: &ApiParams, signature: &str) -> bool {
    let signed: ApiParams = params
        .iter()
        .filter(|(key, _)| key.as_str() != SIGN_PARAM)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let expected = compute_signature(secret, path, &signed);
    let received = signature.to_ascii_uppercase();
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}
