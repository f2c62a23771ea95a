//! Base64url transcoding and constant-time comparison helpers

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use subtle::ConstantTimeEq;

/// URL-safe alphabet, no padding on output, padding optional on input
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64url encoding without padding (RFC 7515 §2)
#[inline]
#[must_use]
pub fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Base64url decoding, accepting input with or without `=` padding
///
/// # Errors
/// Returns `base64::DecodeError` if the input is not valid base64url.
#[inline]
pub fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_LENIENT.decode(input)
}

/// Constant-time comparison; unequal lengths compare unequal
#[inline]
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_is_url_safe_and_unpadded() {
        assert_eq!(base64_url_encode(b""), "");
        assert_eq!(base64_url_encode(b"f"), "Zg");
        assert_eq!(base64_url_encode(b"fo"), "Zm8");
        assert_eq!(base64_url_encode(b"foo"), "Zm9v");
        assert_eq!(base64_url_encode(&[0xfb, 0xff, 0xfe]), "-__-");
    }

    #[test]
    fn decode_accepts_padding() {
        assert_eq!(base64_url_decode("Zg").unwrap(), b"f");
        assert_eq!(base64_url_decode("Zg==").unwrap(), b"f");
        assert_eq!(base64_url_decode("Zm8=").unwrap(), b"fo");
        assert_eq!(base64_url_decode("-__-").unwrap(), vec![0xfb, 0xff, 0xfe]);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(base64_url_decode("Z").is_err());
        assert!(base64_url_decode("Zm9v!").is_err());
        assert!(base64_url_decode("+//+").is_err());
        assert!(base64_url_decode("Zm 9v").is_err());
    }

    #[test]
    fn constant_time_eq_lengths() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = base64_url_encode(&bytes);
            prop_assert!(!encoded.contains(['=', '+', '/']));
            prop_assert_eq!(base64_url_decode(&encoded).unwrap(), bytes);
        }
    }
}
