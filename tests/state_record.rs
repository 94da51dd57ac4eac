//! Serialized state record: suspend a live session and resume it elsewhere.

#[test]
fn test_record_round_trip_resumes_keystream() {
    let mut original = spritz::Spritz::new_with_iv(b"key", b"nonce");
    let mut burn = [0u8; 100];
    original.squeeze(&mut burn);

    let record = original.to_state_record();
    let mut resumed = spritz::Spritz::from_state_record(&record, spritz::SpritzConfig::new());

    let mut expected = [0u8; 64];
    let mut actual = [0u8; 64];
    original.squeeze(&mut expected);
    resumed.squeeze(&mut actual);
    assert_eq!(
        expected, actual,
        "Resumed state must continue the exact keystream"
    );
}

#[test]
fn test_record_length_and_field_order() {
    assert_eq!(spritz::STATE_RECORD_LEN, 262);

    // A fresh keyless-equivalent state has the identity permutation and
    // w = 1 in the final field slot.
    let session = spritz::Spritz::new(b"");
    let record = session.to_state_record();
    for (v, &byte) in record[..256].iter().enumerate() {
        assert_eq!(usize::from(byte), v, "Fresh permutation must be identity");
    }
    assert_eq!(record[256..262], [0, 0, 0, 0, 0, 1], "i j k z a w");
}

#[test]
fn test_record_survives_mid_absorption() {
    // Snapshot taken with pending absorbed input (a > 0) must still resume
    // identically: the shuffle happens on first output either way.
    let mut original = spritz::Spritz::new(b"key");
    original.add_entropy(b"pending input");

    let record = original.to_state_record();
    let mut resumed = spritz::Spritz::from_state_record(&record, spritz::SpritzConfig::new());

    assert_eq!(original.random_u32(), resumed.random_u32());
}
