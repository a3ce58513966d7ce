//! Base64 transport decoding for PCM payloads.

use base64::Engine as _;

use crate::error::AudioResult;

/// Decodes a standard (padded) base64 string into raw bytes.
///
/// Malformed input fails with [`AudioError::Decode`](crate::AudioError::Decode)
/// and no partial output is returned.
pub fn decode_base64(encoded: &str) -> AudioResult<Vec<u8>> {
    Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
}

/// Encodes raw bytes as a standard (padded) base64 string.
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioError;

    #[test]
    fn test_decode_known_payload() {
        let bytes = decode_base64("AAD/fwCAAQA=").unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80, 0x01, 0x00]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_base64("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        let err = decode_base64("AA$A").unwrap_err();
        assert!(matches!(err, AudioError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_url_safe_alphabet() {
        // '-' and '_' belong to the URL-safe alphabet only.
        assert!(decode_base64("AA-_").is_err());
    }

    #[test]
    fn test_decode_rejects_missing_padding() {
        assert!(decode_base64("AAD/fwCAAQA").is_err());
    }

    #[test]
    fn test_encode_matches_decode() {
        let bytes = [0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80, 0x01, 0x00];
        assert_eq!(encode_base64(&bytes), "AAD/fwCAAQA=");
    }
}
