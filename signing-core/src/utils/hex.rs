// signing-core/src/utils/hex.rs
//
// Hex Formatting Helpers
// Chuẩn hóa chuỗi hex: bỏ/thêm prefix "0x", lower-case, decode

use crate::error::SignerResult;

/// Bỏ prefix `0x` / `0X` nếu có.
#[inline]
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Bỏ prefix và chuyển về lower-case.
///
/// Dạng chuẩn dùng để so sánh address và decode signature.
pub fn strip_hex_prefix_and_lower(value: &str) -> String {
    strip_hex_prefix(value).to_ascii_lowercase()
}

/// Thêm prefix `0x` (idempotent).
pub fn add_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") || value.starts_with("0X") {
        value.to_string()
    } else {
        format!("0x{}", value)
    }
}

/// Decode hex string, chấp nhận có hoặc không có `0x`, không phân biệt hoa/thường.
///
/// # Errors
/// [`SignerError::Decode`](crate::error::SignerError::Decode) nếu độ dài lẻ
/// hoặc chứa ký tự không phải hex.
pub fn decode_hex(value: &str) -> SignerResult<Vec<u8>> {
    Ok(hex::decode(strip_hex_prefix_and_lower(value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignerError;

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("0XABCD"), "ABCD");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
        assert_eq!(strip_hex_prefix(""), "");
        // Chỉ bỏ prefix một lần
        assert_eq!(strip_hex_prefix("0x0xab"), "0xab");
    }

    #[test]
    fn test_strip_hex_prefix_and_lower() {
        assert_eq!(
            strip_hex_prefix_and_lower("0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            "f39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(strip_hex_prefix_and_lower("ABCDEF"), "abcdef");
    }

    #[test]
    fn test_add_hex_prefix() {
        assert_eq!(add_hex_prefix("abcd"), "0xabcd");
        assert_eq!(add_hex_prefix("0xabcd"), "0xabcd");
        assert_eq!(add_hex_prefix(""), "0x");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("00ff").unwrap(), vec![0x00, 0xff]);
        assert!(decode_hex("0x").unwrap().is_empty());
    }

    #[test]
    fn test_decode_hex_rejects_malformed() {
        assert!(matches!(decode_hex("0xabc"), Err(SignerError::Decode(_)))); // odd length
        assert!(matches!(decode_hex("0xzz"), Err(SignerError::Decode(_))));
        assert!(matches!(decode_hex("hello"), Err(SignerError::Decode(_))));
    }
}
