use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Decodes a hex encoded Ed25519 public key.
///
/// # Returns
/// - `Some([u8; 32])` - The key was exactly 64 hex digits
/// - `None` - Wrong length or a non-hex character
pub fn parse_public_key(value: &str) -> Option<[u8; 32]> {
    let value = value.trim();
    if value.len() != 64 || !value.is_ascii() {
        return None;
    }

    let mut key = [0u8; 32];
    for (byte, pair) in key.iter_mut().zip(value.as_bytes().chunks(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *byte = u8::from_str_radix(pair, 16).ok()?;
    }

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_id() {
        assert_eq!(parse_u64_from_string("1234".to_string()).unwrap(), 1234);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result = parse_u64_from_string("abc".to_string());

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }

    #[test]
    fn decodes_public_key() {
        let key = parse_public_key(
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        )
        .unwrap();

        assert_eq!(key[0], 0xd7);
        assert_eq!(key[31], 0x1a);
    }

    #[test]
    fn rejects_short_or_non_hex_key() {
        assert!(parse_public_key("d75a98").is_none());
        assert!(parse_public_key(&"zz".repeat(32)).is_none());
    }
}
