//! Integration tests for request signing and gateway resolution.
//!
//! These tests pin the signature algorithm against known values and check
//! the properties a Lazada gateway relies on when it recomputes `sign`.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use lazada_api::auth::{compute_signature, merge_params, sign_request, ApiParams, SystemParams};
use lazada_api::clients::{GetOrderItems, Operation, OPERATIONS};
use lazada_api::{AppKey, AppSecret, HttpMethod, LazadaConfig, Region, RequestBuilder};
use sha2::Sha256;

const SECRET: &str = "s3cr3t";
const TIMESTAMP: &str = "1624600000000";

fn system() -> ApiParams {
    [
        ("app_key".to_string(), "ak1".to_string()),
        ("sign_method".to_string(), "sha256".to_string()),
        ("timestamp".to_string(), TIMESTAMP.to_string()),
    ]
    .into()
}

// ============================================================================
// Signature algorithm
// ============================================================================

#[test]
fn test_known_signature_with_operation_params() {
    let params: ApiParams = [("order_id".to_string(), "406948191627528".to_string())].into();

    assert_eq!(
        sign_request(SECRET, "/orders/get", &system(), &params),
        "69B0C7734AB0EDC28A2D38A8CAF91B364320D86D360531610860C3F95B523624"
    );
}

#[test]
fn test_known_signature_without_operation_params() {
    assert_eq!(
        sign_request(SECRET, "/orders/get", &system(), &ApiParams::new()),
        "4CFF913DE418923A9982225A1222184AD98C85111E58520394886EE90F4AE321"
    );
}

#[test]
fn test_signature_is_deterministic() {
    let params: ApiParams = [("limit".to_string(), "10".to_string())].into();

    let first = sign_request(SECRET, "/orders/get", &system(), &params);
    let second = sign_request(SECRET, "/orders/get", &system(), &params);
    assert_eq!(first, second);
}

#[test]
fn test_signature_changes_with_any_input() {
    let params: ApiParams = [("limit".to_string(), "10".to_string())].into();
    let base = sign_request(SECRET, "/orders/get", &system(), &params);

    let other_params: ApiParams = [("limit".to_string(), "11".to_string())].into();
    assert_ne!(base, sign_request(SECRET, "/orders/get", &system(), &other_params));
    assert_ne!(base, sign_request(SECRET, "/order/get", &system(), &params));
    assert_ne!(base, sign_request("other", "/orders/get", &system(), &params));
}

/// HMAC-SHA256 over `path` and already concatenated pairs, upper-case hex.
fn hmac_hex(path: &str, pairs: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
    mac.update(path.as_bytes());
    mac.update(pairs.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

#[test]
fn test_signature_sorts_keys_regardless_of_input_order() {
    let descending: Vec<(String, String)> = vec![
        ("c".to_string(), "3".to_string()),
        ("b".to_string(), "2".to_string()),
        ("a".to_string(), "1".to_string()),
    ];
    let mut scattered: HashMap<String, String> = HashMap::new();
    scattered.insert("b".to_string(), "2".to_string());
    scattered.insert("c".to_string(), "3".to_string());

    // Split the same key set differently between system and operation params.
    let from_vec = merge_params(
        &ApiParams::new(),
        &descending.into_iter().collect::<ApiParams>(),
    );
    let from_map = merge_params(
        &[("a".to_string(), "1".to_string())].into(),
        &scattered.into_iter().collect::<ApiParams>(),
    );

    let sorted = hmac_hex("/p", "a1b2c3");
    assert_eq!(compute_signature(SECRET, "/p", &from_vec), sorted);
    assert_eq!(compute_signature(SECRET, "/p", &from_map), sorted);
    assert_ne!(sorted, hmac_hex("/p", "c3b2a1"));
}

#[test]
fn test_operation_params_override_system_params() {
    let params: ApiParams = [("timestamp".to_string(), "1".to_string())].into();
    let merged = merge_params(&system(), &params);

    assert_eq!(merged["timestamp"], "1");
    assert_eq!(
        sign_request(SECRET, "/orders/get", &system(), &params),
        compute_signature(SECRET, "/orders/get", &merged)
    );
}

#[test]
fn test_signature_format() {
    let sign = sign_request(SECRET, "/order/items/get", &system(), &ApiParams::new());

    assert_eq!(sign.len(), 64);
    assert!(sign
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
}

// ============================================================================
// System parameters and request building
// ============================================================================

fn config(region: Region) -> LazadaConfig {
    LazadaConfig::builder()
        .app_key(AppKey::new("ak1").unwrap())
        .app_secret(AppSecret::new(SECRET).unwrap())
        .region(region)
        .build()
        .unwrap()
}

#[test]
fn test_system_params_from_config() {
    let system = SystemParams::from_config(&config(Region::Th));

    assert_eq!(system.fixed()["app_key"], "ak1");
    assert_eq!(system.fixed()["sign_method"], "sha256");
    assert!(!system.fixed().contains_key("timestamp"));
    assert_eq!(system.stamped(42)["timestamp"], "42");
}

#[test]
fn test_request_builder_signs_with_operation_path_only() {
    let params: ApiParams = [("order_id".to_string(), "9".to_string())].into();
    let request = RequestBuilder::new(&config(Region::Id))
        .timestamp(1_624_600_000_000)
        .build(&GetOrderItems::DESCRIPTOR, HttpMethod::Get, &params, None);

    assert!(request
        .url
        .starts_with("https://api.lazada.co.id/rest/order/items/get?"));
    assert_eq!(
        request.sign,
        sign_request(SECRET, "/order/items/get", &system(), &params)
    );
}

#[test]
fn test_each_request_gets_a_timestamp() {
    let builder = RequestBuilder::new(&config(Region::Th));
    let request = builder.build(&GetOrderItems::DESCRIPTOR, HttpMethod::Get, &ApiParams::new(), None);

    let timestamp: i64 = request.query_param("timestamp").unwrap().parse().unwrap();
    assert!(timestamp > 1_600_000_000_000);
}

// ============================================================================
// Gateway resolution
// ============================================================================

#[test]
fn test_region_gateways() {
    assert_eq!(config(Region::Sg).gateway_url(), "https://api.lazada.sg/rest");
    assert_eq!(config(Region::My).gateway_url(), "https://api.lazada.com.my/rest");
    assert_eq!(config(Region::Vn).gateway_url(), "https://api.lazada.vn/rest");
    assert_eq!(config(Region::Th).gateway_url(), "https://api.lazada.co.th/rest");
    assert_eq!(config(Region::Ph).gateway_url(), "https://api.lazada.com.ph/rest");
    assert_eq!(config(Region::Id).gateway_url(), "https://api.lazada.co.id/rest");
}

#[test]
fn test_unknown_region_code_falls_back_to_default() {
    let config = LazadaConfig::builder()
        .app_key(AppKey::new("ak1").unwrap())
        .app_secret(AppSecret::new(SECRET).unwrap())
        .region_code("XX")
        .build()
        .unwrap();

    assert_eq!(config.region(), Region::Th);
    assert_eq!(config.gateway_url(), "https://api.lazada.co.th/rest");
}

#[test]
fn test_operation_catalog() {
    let names: Vec<_> = OPERATIONS.iter().map(|op| op.name).collect();
    assert_eq!(names, vec!["GetOrders", "GetOrder", "GetOrderItems"]);
    assert!(OPERATIONS.iter().all(|op| op.method == HttpMethod::Get));
}
