//! Property tests for content digests.

use proptest::prelude::*;

use gladius::ContentHash;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the digest depends only on the bytes.
    #[test]
    fn property_digest_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let copy = bytes.clone();
        prop_assert_eq!(ContentHash::from_bytes(&bytes), ContentHash::from_bytes(&copy));
    }

    /// PROPERTY: appending anything, even a single newline, changes the digest.
    #[test]
    fn property_digest_sees_trailing_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        tail in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut extended = bytes.clone();
        extended.extend_from_slice(&tail);
        prop_assert_ne!(ContentHash::from_bytes(&bytes), ContentHash::from_bytes(&extended));
    }

    /// PROPERTY: digest strings are always `sha256:` + 64 lowercase hex chars.
    #[test]
    fn property_digest_format(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let digest = ContentHash::from_bytes(&bytes);
        prop_assert!(digest.as_str().starts_with(ContentHash::PREFIX));
        prop_assert_eq!(digest.hex().len(), 64);
        prop_assert!(digest.hex().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
