//! Canonical derivation: every representation of one integer.

use serde::{Deserialize, Serialize};

use crate::base::Base;
use crate::codec::{encode_base64_decimal, PRINTABLE};
use crate::error::ConvertError;
use crate::twos::twos_complement_decode;

/// All projections of a canonical value.
///
/// `signed_decimal` and `bit_length` are only populated for non-negative
/// values; `signed_decimal` additionally needs the most significant bit of
/// the authoritative binary string to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representation {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
    pub base64: String,
    pub ascii: String,
    pub signed_decimal: String,
    pub bit_length: Option<u32>,
}

impl Representation {
    /// The representation of an empty field: everything blank.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Text of the field for `base`.
    pub fn field(&self, base: Base) -> &str {
        match base {
            Base::Decimal => &self.decimal,
            Base::Binary => &self.binary,
            Base::Hex => &self.hex,
            Base::Base64 => &self.base64,
            Base::Ascii => &self.ascii,
        }
    }
}

/// Derive every representation of `value`.
///
/// `source_binary` is the binary text the user typed (leading zeros
/// included); when non-empty it decides `signed_decimal` and `bit_length`
/// instead of the minimal binary string. `bit_width` zero-pads the binary
/// rendering of a non-negative value.
///
/// ```
/// use radix_engine::derive_all;
///
/// let rep = derive_all(2, None, Some(3));
/// assert_eq!(rep.binary, "010");
///
/// let rep = derive_all(224, None, None);
/// assert_eq!(rep.signed_decimal, "-32");
/// assert_eq!(rep.bit_length, Some(8));
/// ```
pub fn derive_all(value: i64, source_binary: Option<&str>, bit_width: Option<u32>) -> Representation {
    let mut binary = Base::Binary.render(value).unwrap_or_default();
    if let Some(width) = bit_width.filter(|w| *w > 0 && value >= 0) {
        binary = format!("{:0w$b}", value, w = width as usize);
    }

    let ascii = u32::try_from(value)
        .ok()
        .filter(|code| PRINTABLE.contains(code))
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default();

    let (signed_decimal, bit_length) = if value >= 0 {
        let authoritative = source_binary.filter(|s| !s.is_empty()).unwrap_or(binary.as_str());
        let signed = if authoritative.starts_with('1') {
            twos_complement_decode(authoritative)
                .map(|v| v.to_string())
                .unwrap_or_default()
        } else {
            String::new()
        };
        let bits = u32::try_from(authoritative.len()).unwrap_or(u32::MAX);
        (signed, Some(bits))
    } else {
        (String::new(), None)
    };

    let rep = Representation {
        decimal: value.to_string(),
        hex: Base::Hex.render(value).unwrap_or_default(),
        base64: encode_base64_decimal(value),
        binary,
        ascii,
        signed_decimal,
        bit_length,
    };
    log::debug!("derived {value}: {rep:?}");
    rep
}

/// Derive from the decimal field's text. Empty text and a lone `-` give the
/// empty representation.
pub fn derive_from_text(
    text: &str,
    source_binary: Option<&str>,
    bit_width: Option<u32>,
) -> Result<Representation, ConvertError> {
    let text = text.trim();
    if text.is_empty() || text == "-" {
        return Ok(Representation::empty());
    }
    let value = Base::Decimal.parse_numeral(text)?;
    Ok(derive_all(value, source_binary, bit_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_positive() {
        let rep = derive_all(85, None, None);
        assert_eq!(rep.decimal, "85");
        assert_eq!(rep.binary, "1010101");
        assert_eq!(rep.hex, "55");
        assert_eq!(rep.base64, "ODU=");
        assert_eq!(rep.ascii, "U");
        assert_eq!(rep.signed_decimal, "-43");
        assert_eq!(rep.bit_length, Some(7));
    }

    #[test]
    fn derive_negative() {
        let rep = derive_all(-26, None, Some(8));
        assert_eq!(rep.binary, "-11010");
        assert_eq!(rep.hex, "-1A");
        assert_eq!(rep.base64, "LTI2");
        assert_eq!(rep.ascii, "");
        assert_eq!(rep.signed_decimal, "");
        assert_eq!(rep.bit_length, None);
    }

    #[test]
    fn derive_zero() {
        let rep = derive_all(0, None, None);
        assert_eq!(rep.binary, "0");
        assert_eq!(rep.signed_decimal, "");
        assert_eq!(rep.bit_length, Some(1));
    }

    #[test]
    fn source_binary_preserves_leading_zeros() {
        let rep = derive_all(53, Some("00110101"), None);
        assert_eq!(rep.binary, "110101");
        assert_eq!(rep.signed_decimal, "");
        assert_eq!(rep.bit_length, Some(8));

        let rep = derive_all(224, Some("11100000"), None);
        assert_eq!(rep.signed_decimal, "-32");
        assert_eq!(rep.bit_length, Some(8));

        // Empty source binary falls back to the computed one.
        let rep = derive_all(5, Some(""), None);
        assert_eq!(rep.bit_length, Some(3));
    }

    #[test]
    fn bit_width_pads() {
        let rep = derive_all(2, None, Some(3));
        assert_eq!(rep.binary, "010");
        assert_eq!(rep.signed_decimal, "");
        assert_eq!(rep.bit_length, Some(3));

        // Narrower than the value: no truncation.
        assert_eq!(derive_all(8, None, Some(2)).binary, "1000");
        assert_eq!(derive_all(8, None, Some(0)).binary, "1000");
    }

    #[test]
    fn ascii_only_for_printable() {
        assert_eq!(derive_all(31, None, None).ascii, "");
        assert_eq!(derive_all(32, None, None).ascii, " ");
        assert_eq!(derive_all(126, None, None).ascii, "~");
        assert_eq!(derive_all(127, None, None).ascii, "");
    }

    #[test]
    fn extremes() {
        let rep = derive_all(i64::MIN, None, None);
        assert_eq!(rep.binary, format!("-1{}", "0".repeat(63)));
        let rep = derive_all(i64::MAX, None, None);
        assert_eq!(rep.bit_length, Some(63));
        assert_eq!(rep.signed_decimal, "-1");
    }

    #[test]
    fn derive_from_text_edge_cases() {
        assert_eq!(derive_from_text("", None, None), Ok(Representation::empty()));
        assert_eq!(derive_from_text("-", None, None), Ok(Representation::empty()));
        assert_eq!(derive_from_text(" 16 ", None, None).unwrap().base64, "MTY=");
        assert!(derive_from_text("12abc", None, None).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(derive_all(65, None, None)).unwrap();
        assert_eq!(json["signedDecimal"], "-63");
        assert_eq!(json["bitLength"], 7);
        assert_eq!(json["ascii"], "A");
    }
}
