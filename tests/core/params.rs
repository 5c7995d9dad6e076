use aead_buffers::core::AeadParams;
use aead_buffers::error::CoreError;

#[test]
fn test_getters_and_overhead() {
    let params = AeadParams::new(24, 16);
    assert_eq!(params.nonce_length(), 24);
    assert_eq!(params.tag_length(), 16);
    assert_eq!(params.overhead(), Some(40));
}

#[test]
fn test_overhead_overflow_is_none() {
    assert_eq!(AeadParams::new(usize::MAX, 16).overhead(), None);
    assert_eq!(AeadParams::new(usize::MAX, 0).overhead(), Some(usize::MAX));
}

#[test]
fn test_from_json_engine_shape() {
    let params = AeadParams::from_json(r#"{"nonce_length": 12, "tag_length": 16}"#).unwrap();
    assert_eq!(params, AeadParams::new(12, 16));
}

#[test]
fn test_serializes_with_engine_field_names() {
    let json = serde_json::to_string(&AeadParams::new(12, 16)).unwrap();
    assert_eq!(json, r#"{"nonce_length":12,"tag_length":16}"#);
}

#[test]
fn test_from_json_rejects_missing_field() {
    let result = AeadParams::from_json(r#"{"nonce_length": 12}"#);
    assert!(matches!(result, Err(CoreError::Json(_))));
}

#[test]
fn test_random_nonce_has_nonce_length() {
    let params = AeadParams::new(24, 16);
    let a = params.random_nonce();
    let b = params.random_nonce();

    assert_eq!(a.len(), 24);
    assert!(a.is_consistent());
    assert_ne!(a, b);
}

#[test]
fn test_zero_nonce_length() {
    let params = AeadParams::new(0, 8);
    assert!(params.random_nonce().is_empty());
}
