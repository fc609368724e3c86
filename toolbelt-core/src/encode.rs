//! Base64 and URL percent encode-decode, UTF-8 safe in both directions.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode text as standard-alphabet base64.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard-alphabet base64 back into text.
pub fn base64_decode(input: &str) -> Result<String, EncodeError> {
    let bytes = STANDARD.decode(input.trim().as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Percent-encode text for use in a URL component.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode percent-encoded text.
pub fn url_decode(input: &str) -> Result<String, EncodeError> {
    Ok(urlencoding::decode(input)?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trip() {
        let input = "hello, Toolbelt! 你好";
        assert_eq!(base64_decode(&base64_encode(input)).unwrap(), input);
    }

    #[test]
    fn base64_known_value() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn base64_decode_rejects_garbage() {
        assert!(matches!(
            base64_decode("not base64!!!"),
            Err(EncodeError::Base64(_))
        ));
    }

    #[test]
    fn base64_decode_rejects_invalid_utf8() {
        // 0xFF 0xFE is valid base64 payload but not valid UTF-8.
        let encoded = STANDARD.encode([0xFF, 0xFE]);
        assert!(matches!(
            base64_decode(&encoded),
            Err(EncodeError::Utf8(_))
        ));
    }

    #[test]
    fn url_round_trip() {
        let input = "a b&c=d/e?f#g 中文";
        assert_eq!(url_decode(&url_encode(input)).unwrap(), input);
    }

    #[test]
    fn url_encode_known_value() {
        assert_eq!(url_encode("a b&c"), "a%20b%26c");
    }
}
