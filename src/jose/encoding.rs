//! base64url transcoding for compact token segments.
//!
//! Compact tokens use base64 with the URL-safe alphabet (`-` and `_` in
//! place of `+` and `/`) and no padding characters, per
//! [RFC 7515 Section 2](https://www.rfc-editor.org/rfc/rfc7515.html#section-2).
//! Both the JSON-serialized header and claims segments and the raw
//! signature bytes go through this codec.

use crate::error::Result;

/// Encodes bytes as base64url without padding.
///
/// # Examples
///
/// ```
/// use jose_compact::jose::encoding;
///
/// let text = encoding::encode(b"hello");
/// assert_eq!(text, "aGVsbG8");
/// assert!(!text.contains('='));
/// ```
#[must_use]
pub fn encode(data: &[u8]) -> String {
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, data)
}

/// Decodes unpadded base64url text into raw bytes.
///
/// Accepts input without trailing padding; the standard alphabet's `+`
/// and `/` are not part of the URL-safe alphabet and are rejected.
///
/// # Errors
///
/// Returns [`JoseError::MalformedEncoding`](crate::error::JoseError::MalformedEncoding)
/// if `text` contains characters outside the URL-safe alphabet.
///
/// # Examples
///
/// ```
/// use jose_compact::jose::encoding;
///
/// let bytes = encoding::decode("aGVsbG8").unwrap();
/// assert_eq!(bytes, b"hello");
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(base64::Engine::decode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JoseError;

    #[test]
    fn test_encode_no_padding() {
        // "hello!" pads to "aGVsbG8h" + "=" in standard base64
        let text = encode(b"hello!");
        assert!(!text.contains('='), "base64url must not contain padding");
    }

    #[test]
    fn test_encode_url_safe_alphabet() {
        let text = encode(&[0xff, 0xfe, 0xfd]);
        assert!(!text.contains('+'), "base64url must not contain +");
        assert!(!text.contains('/'), "base64url must not contain /");
        assert_eq!(text, "__79");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let data: Vec<u8> = (0..=255).collect();
        let decoded = decode(&encode(&data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_decode_accepts_unpadded_input() {
        // One-byte payloads always need padding in standard base64
        assert_eq!(decode("aQ").unwrap(), b"i");
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        let result = decode("a+b/");
        assert!(matches!(result, Err(JoseError::MalformedEncoding(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        let result = decode("not base64url!");
        assert!(matches!(result, Err(JoseError::MalformedEncoding(_))));
    }

    #[test]
    fn test_empty_roundtrip() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }
}
