//! Known-answer tests against the published Spritz test vectors
//! (Rivest–Schuldt, "Spritz — a spongy RC4-like stream cipher and hash
//! function", Appendix E).

// =============================================================================
// KEYSTREAM VECTORS
// =============================================================================

#[test]
fn test_keystream_vectors() {
    let cases: [(&[u8], &str); 3] = [
        (b"ABC", "779a8e01f9e9cbc0"),
        (b"spam", "f0609a1df143cebf"),
        (b"arcfour", "1afa8b5ee337dbc7"),
    ];

    for (key, expected) in cases {
        let mut session = spritz::Spritz::new(key);
        let mut out = [0u8; 8];
        for slot in &mut out {
            *slot = session.random_byte();
        }
        assert_eq!(
            hex::encode(out),
            expected,
            "Keystream mismatch for key {:?}",
            core::str::from_utf8(key)
        );
    }
}

#[test]
fn test_keystream_vectors_via_squeeze() {
    // squeeze() must produce the same bytes as repeated random_byte()
    let mut session = spritz::Spritz::new(b"ABC");
    let mut out = [0u8; 8];
    session.squeeze(&mut out);
    assert_eq!(hex::encode(out), "779a8e01f9e9cbc0");
}

// =============================================================================
// HASH VECTORS
// =============================================================================

#[test]
fn test_hash_vectors() {
    let cases: [(&[u8], &str); 3] = [
        (b"ABC", "028fa2b48b934a18"),
        (b"spam", "acbba0813f300d3a"),
        (b"arcfour", "ff8cf268094c87b9"),
    ];

    for (data, expected) in cases {
        let mut digest = [0u8; 32];
        spritz::hash(data, &mut digest);
        assert_eq!(
            hex::encode(&digest[..8]),
            expected,
            "Hash mismatch for input {:?}",
            core::str::from_utf8(data)
        );
    }
}

#[test]
fn test_hash_vectors_streaming() {
    // Chunked absorption must reproduce the one-shot vector exactly.
    let mut hasher = spritz::SpritzHash::new();
    hasher.update(b"arc");
    hasher.update(b"");
    hasher.update(b"four");
    let mut digest = [0u8; 32];
    hasher.finalize_into(&mut digest);
    assert_eq!(hex::encode(&digest[..8]), "ff8cf268094c87b9");
}

// =============================================================================
// CONFIG MODES REPRODUCE THE SAME VECTORS
// =============================================================================

#[test]
fn test_vectors_under_hardened_configs() {
    let configs = [
        spritz::SpritzConfig::new().constant_time(),
        spritz::SpritzConfig::new().secure_wipe(),
        spritz::SpritzConfig::paranoid(),
    ];

    for cfg in configs {
        let mut session = spritz::Spritz::with_config(b"ABC", cfg);
        let mut out = [0u8; 8];
        session.squeeze(&mut out);
        assert_eq!(
            hex::encode(out),
            "779a8e01f9e9cbc0",
            "Hardening flags must not change the keystream"
        );

        let mut digest = [0u8; 32];
        spritz::hash_with_config(b"spam", &mut digest, cfg);
        assert_eq!(
            hex::encode(&digest[..8]),
            "acbba0813f300d3a",
            "Hardening flags must not change the digest"
        );
    }
}
