//! Byte-aligned text codecs and the base64 field codec.
//!
//! Byte decoding is all-or-nothing: a hex or binary string turns into text
//! only when it splits into whole bytes that are all printable ASCII.

use std::num::IntErrorKind;

use crate::base::{strip_whitespace, Base};
use crate::error::ConvertError;

/// Printable ASCII range accepted and produced by the text codecs.
pub const PRINTABLE: std::ops::RangeInclusive<u32> = 32..=126;

/// Decode pairs of hex digits into printable ASCII, or `""`.
///
/// ```
/// use radix_engine::codec::hex_to_ascii;
///
/// assert_eq!(hex_to_ascii("3434"), "44");
/// assert_eq!(hex_to_ascii("0A41"), "");
/// ```
pub fn hex_to_ascii(hex: &str) -> String {
    decode_groups(hex, 2, 16).unwrap_or_default()
}

/// Decode 8-bit groups of binary digits into printable ASCII, or `""`.
pub fn binary_to_ascii(binary: &str) -> String {
    decode_groups(binary, 8, 2).unwrap_or_default()
}

/// Byte decoding for the numeric field `base`; other bases decode to `""`.
pub fn decode_bytes(base: Base, text: &str) -> String {
    match base {
        Base::Binary => binary_to_ascii(text),
        Base::Hex => hex_to_ascii(text),
        Base::Decimal | Base::Base64 | Base::Ascii => String::new(),
    }
}

fn decode_groups(digits: &str, group: usize, radix: u32) -> Option<String> {
    if digits.is_empty() || digits.len() % group != 0 {
        return None;
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // All ASCII from here on, so byte chunks are valid `str` slices.
    digits
        .as_bytes()
        .chunks(group)
        .map(|chunk| {
            let chunk = std::str::from_utf8(chunk).ok()?;
            let code = u32::from_str_radix(chunk, radix).ok()?;
            PRINTABLE.contains(&code).then(|| char::from(code as u8))
        })
        .collect()
}

/// Encode printable ASCII text as uppercase hex, two digits per character.
///
/// ```
/// use radix_engine::encode_ascii;
///
/// assert_eq!(encode_ascii("Hello").unwrap(), "48656C6C6F");
/// assert!(encode_ascii("tab\there").is_err());
/// ```
pub fn encode_ascii(text: &str) -> Result<String, ConvertError> {
    if let Some((position, ch)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !PRINTABLE.contains(&u32::from(*c)))
    {
        return Err(ConvertError::NonPrintable { ch, position });
    }
    Ok(text.chars().map(|c| format!("{:02X}", u32::from(c))).collect())
}

/// Numeric value of printable ASCII text read as big-endian bytes.
pub fn ascii_to_value(text: &str) -> Result<i64, ConvertError> {
    let hex = encode_ascii(text)?;
    if hex.is_empty() {
        return Err(ConvertError::Empty);
    }
    i64::from_str_radix(&hex, 16).map_err(|_| ConvertError::OutOfRange)
}

/// Base64 of the decimal digit string of `value` (`85` encodes `"85"`).
pub fn encode_base64_decimal(value: i64) -> String {
    base64::encode(value.to_string())
}

/// Inverse of [`encode_base64_decimal`]. Whitespace is ignored.
pub fn decode_base64_decimal(text: &str) -> Result<i64, ConvertError> {
    let clean = strip_whitespace(text);
    if clean.is_empty() {
        return Err(ConvertError::Empty);
    }
    let bytes = base64::decode(&clean).map_err(|_| ConvertError::InvalidBase64)?;
    let decoded = String::from_utf8(bytes).map_err(|_| ConvertError::NotANumber)?;
    let numeral = decoded.trim();
    if !Base::Decimal.is_plain_numeral(numeral) || numeral.chars().any(char::is_whitespace) {
        return Err(ConvertError::NotANumber);
    }
    numeral.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::OutOfRange,
        _ => ConvertError::NotANumber,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_ascii_all_or_nothing() {
        assert_eq!(hex_to_ascii("48656C6C6F"), "Hello");
        assert_eq!(hex_to_ascii("48656c6c6f"), "Hello");
        assert_eq!(hex_to_ascii("486"), "");
        assert_eq!(hex_to_ascii("48FF"), "");
        assert_eq!(hex_to_ascii("1F"), "");
        assert_eq!(hex_to_ascii("7E"), "~");
        assert_eq!(hex_to_ascii("+F"), "");
        assert_eq!(hex_to_ascii(""), "");
    }

    #[test]
    fn binary_to_ascii_needs_whole_bytes() {
        assert_eq!(binary_to_ascii("01000001"), "A");
        assert_eq!(binary_to_ascii("0100000101000010"), "AB");
        assert_eq!(binary_to_ascii("1000001"), "");
        assert_eq!(binary_to_ascii("00000001"), "");
    }

    #[test]
    fn decode_bytes_dispatch() {
        assert_eq!(decode_bytes(Base::Hex, "4142"), "AB");
        assert_eq!(decode_bytes(Base::Binary, "01000001"), "A");
        assert_eq!(decode_bytes(Base::Decimal, "65"), "");
    }

    #[test]
    fn encode_ascii_rejects_before_encoding() {
        assert_eq!(encode_ascii(" ~").unwrap(), "207E");
        assert_eq!(
            encode_ascii("ok\u{7f}"),
            Err(ConvertError::NonPrintable {
                ch: '\u{7f}',
                position: 2
            })
        );
        assert!(encode_ascii("é").is_err());
        assert_eq!(encode_ascii("").unwrap(), "");
    }

    #[test]
    fn ascii_values() {
        assert_eq!(ascii_to_value("A"), Ok(65));
        assert_eq!(ascii_to_value("44"), Ok(0x3434));
        assert_eq!(ascii_to_value("~~~~~~~~"), Ok(0x7E7E_7E7E_7E7E_7E7E));
        assert_eq!(ascii_to_value("Hello world"), Err(ConvertError::OutOfRange));
        assert_eq!(ascii_to_value(""), Err(ConvertError::Empty));
    }

    #[test]
    fn base64_encodes_decimal_text() {
        assert_eq!(encode_base64_decimal(85), "ODU=");
        assert_eq!(encode_base64_decimal(16), "MTY=");
        assert_eq!(encode_base64_decimal(-5), "LTU=");
    }

    #[test]
    fn base64_decode_paths() {
        assert_eq!(decode_base64_decimal("ODU="), Ok(85));
        assert_eq!(decode_base64_decimal(" LT U= "), Ok(-5));
        assert_eq!(decode_base64_decimal("!!!"), Err(ConvertError::InvalidBase64));
        // "abc"
        assert_eq!(decode_base64_decimal("YWJj"), Err(ConvertError::NotANumber));
        assert_eq!(decode_base64_decimal(""), Err(ConvertError::Empty));
    }
}
