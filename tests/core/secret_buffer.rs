use aead_buffers::core::{ByteBuffer, SecretBuffer};
use aead_buffers::error::CoreError;
use aead_buffers::enums::LengthPolicy;

use crate::common;

#[test]
fn test_from_bytes_derives_length() {
    let secret = SecretBuffer::from_bytes(b"key material".to_vec());
    assert_eq!(secret.len(), 12);
    assert_eq!(secret.expose_secret(), b"key material");
    assert!(secret.is_consistent());
}

#[test]
fn test_new_is_permissive() {
    let secret = SecretBuffer::new(0, vec![1, 2]);
    assert!(secret.is_empty());
    assert!(!secret.is_consistent());
    assert_eq!(secret.expose_secret(), &[1, 2]);
}

#[test]
fn test_try_new_rejects_mismatch() {
    let result = SecretBuffer::try_new(1, vec![1, 2]);
    assert!(matches!(
        result,
        Err(CoreError::LengthMismatch {
            declared: 1,
            actual: 2
        })
    ));
}

#[test]
fn test_debug_redacts_bytes() {
    let secret = SecretBuffer::from(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    let shown = format!("{secret:?}");

    assert!(shown.contains("REDACTED"));
    assert!(shown.contains("len: 4"));
    assert!(!shown.contains("222"));
    assert!(!shown.contains("173"));
}

#[test]
fn test_promotion_from_byte_buffer() {
    let secret = ByteBuffer::from_bytes(vec![5, 6, 7]).into_secret();
    assert_eq!(secret.len(), 3);
    assert_eq!(secret.expose_secret(), &[5, 6, 7]);
}

#[test]
fn test_length_policy_applies_to_secrets() {
    let warned = common::count_warnings(|| {
        SecretBuffer::with_policy(1, vec![9, 9], LengthPolicy::Warn);
    });
    let trusted = common::count_warnings(|| {
        SecretBuffer::with_policy(1, vec![9, 9], LengthPolicy::Trust);
    });
    assert_eq!(warned, 1);
    assert_eq!(trusted, 0);
}
