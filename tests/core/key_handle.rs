use aead_buffers::core::LocalKeyHandle;
use aead_buffers::enums::KeyAlg;
use aead_buffers::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EngineHandle(u64);

#[test]
fn test_handle_shape() {
    let handle = LocalKeyHandle::new(KeyAlg::Chacha20XC20P, EngineHandle(42), true);

    assert_eq!(handle.alg(), KeyAlg::Chacha20XC20P);
    assert_eq!(handle.inner(), &EngineHandle(42));
    assert!(handle.is_ephemeral());
    assert_eq!(handle.into_inner(), EngineHandle(42));
}

#[test]
fn test_map_inner_keeps_alg_and_flag() {
    let handle = LocalKeyHandle::new(KeyAlg::Ed25519, EngineHandle(7), false);
    let mapped = handle.map_inner(|h| format!("handle-{}", h.0));

    assert_eq!(mapped.alg(), KeyAlg::Ed25519);
    assert!(!mapped.is_ephemeral());
    assert_eq!(mapped.inner(), "handle-7");
}

#[test]
fn test_key_alg_string_forms_round_trip() {
    for alg in KeyAlg::ALL {
        assert_eq!(alg.as_str().parse::<KeyAlg>().unwrap(), alg);
        assert_eq!(alg.to_string(), alg.as_str());
    }
}

#[test]
fn test_key_alg_serde_uses_engine_names() {
    assert_eq!(
        serde_json::to_string(&KeyAlg::A256CbcHs512).unwrap(),
        r#""a256cbchs512""#
    );
    let alg: KeyAlg = serde_json::from_str(r#""bls12381g1g2""#).unwrap();
    assert_eq!(alg, KeyAlg::Bls12_381G1G2);
}

#[test]
fn test_unknown_key_alg() {
    let result = "rot13".parse::<KeyAlg>();
    assert!(matches!(result, Err(CoreError::UnknownAlgorithm(name)) if name == "rot13"));
}
