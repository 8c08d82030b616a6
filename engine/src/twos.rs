//! Two's-complement encoding at fixed panel widths and decoding of
//! arbitrary-width digit strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Panel widths the fixed-width view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Smallest value representable at this width.
    pub fn min(self) -> i128 {
        -(1i128 << (self.bits() - 1))
    }

    /// Largest value representable at this width.
    pub fn max(self) -> i128 {
        (1i128 << (self.bits() - 1)) - 1
    }
}

impl TryFrom<u32> for Width {
    type Error = ConvertError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(ConvertError::UnsupportedWidth(other)),
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> u32 {
        width.bits()
    }
}

/// Accepts `8` as well as the display form `8-bit`.
impl FromStr for Width {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("-bit");
        let bits: u32 = digits
            .parse()
            .map_err(|_| ConvertError::InvalidWidth(s.to_string()))?;
        Width::try_from(bits)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A fixed-width encoding, or the displayable `Overflow` sentinel when the
/// value does not fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum TwosComplement {
    Bits(String),
    Overflow,
}

impl TwosComplement {
    pub fn bits(&self) -> Option<&str> {
        match self {
            TwosComplement::Bits(bits) => Some(bits),
            TwosComplement::Overflow => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, TwosComplement::Overflow)
    }
}

impl fmt::Display for TwosComplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwosComplement::Bits(bits) => f.write_str(bits),
            TwosComplement::Overflow => f.write_str("Overflow"),
        }
    }
}

impl From<TwosComplement> for String {
    fn from(value: TwosComplement) -> String {
        value.to_string()
    }
}

/// Encode `value` as a zero-padded two's-complement string of `width` bits.
///
/// ```
/// use radix_engine::{twos_complement_encode, TwosComplement, Width};
///
/// assert_eq!(
///     twos_complement_encode(-1, Width::W8),
///     TwosComplement::Bits("11111111".into())
/// );
/// assert_eq!(twos_complement_encode(128, Width::W8), TwosComplement::Overflow);
/// ```
pub fn twos_complement_encode(value: impl Into<i128>, width: Width) -> TwosComplement {
    let value = value.into();
    if value < width.min() || value > width.max() {
        return TwosComplement::Overflow;
    }
    let bits = width.bits();
    let unsigned = if value >= 0 { value } else { (1i128 << bits) + value };
    TwosComplement::Bits(format!("{:0w$b}", unsigned, w = bits as usize))
}

/// Interpret a binary digit string as two's complement at its own width.
///
/// ```
/// use radix_engine::twos_complement_decode;
///
/// assert_eq!(twos_complement_decode("11100000"), Ok(-32));
/// assert_eq!(twos_complement_decode("00110101"), Ok(53));
/// ```
pub fn twos_complement_decode(digits: &str) -> Result<i64, ConvertError> {
    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }
    if !digits.chars().all(|c| c == '0' || c == '1') {
        return Err(ConvertError::InvalidNumeral {
            base: crate::Base::Binary,
            text: digits.to_string(),
        });
    }
    let bits = digits.len();
    if bits > 64 {
        return Err(ConvertError::WidthOutOfRange(bits));
    }
    let unsigned = i128::from(
        u64::from_str_radix(digits, 2).map_err(|_| ConvertError::WidthOutOfRange(bits))?,
    );
    let signed = if unsigned >= 1i128 << (bits - 1) {
        unsigned - (1i128 << bits)
    } else {
        unsigned
    };
    i64::try_from(signed).map_err(|_| ConvertError::OutOfRange)
}

/// Render `value` at every requested panel width.
pub fn fixed_width_panels(value: i64, widths: &[Width]) -> Vec<(Width, TwosComplement)> {
    widths
        .iter()
        .map(|&width| (width, twos_complement_encode(value, width)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_positive_and_negative() {
        assert_eq!(twos_complement_encode(5, Width::W8).to_string(), "00000101");
        assert_eq!(twos_complement_encode(-32, Width::W8).to_string(), "11100000");
        assert_eq!(
            twos_complement_encode(-1, Width::W16).to_string(),
            "1111111111111111"
        );
        assert_eq!(
            twos_complement_encode(i64::MIN, Width::W64).to_string(),
            format!("1{}", "0".repeat(63))
        );
    }

    #[test]
    fn overflow_boundaries() {
        for width in Width::ALL {
            assert!(twos_complement_encode(width.max() + 1, width).is_overflow());
            assert!(twos_complement_encode(width.min() - 1, width).is_overflow());
            assert!(!twos_complement_encode(width.max(), width).is_overflow());
            assert!(!twos_complement_encode(width.min(), width).is_overflow());
        }
        assert_eq!(twos_complement_encode(128, Width::W8).to_string(), "Overflow");
    }

    #[test]
    fn width_from_str() {
        assert_eq!("16".parse::<Width>(), Ok(Width::W16));
        assert_eq!("64-bit".parse::<Width>(), Ok(Width::W64));
        assert_eq!("12".parse::<Width>(), Err(ConvertError::UnsupportedWidth(12)));
        assert!(matches!("wide".parse::<Width>(), Err(ConvertError::InvalidWidth(_))));
    }

    #[test]
    fn decode_widths() {
        assert_eq!(twos_complement_decode("1"), Ok(-1));
        assert_eq!(twos_complement_decode("0"), Ok(0));
        assert_eq!(twos_complement_decode("100"), Ok(-4));
        assert_eq!(twos_complement_decode(&"1".repeat(64)), Ok(-1));
        assert_eq!(
            twos_complement_decode(&format!("0{}", "1".repeat(63))),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert_eq!(twos_complement_decode(""), Err(ConvertError::Empty));
        assert!(twos_complement_decode("102").is_err());
        assert_eq!(
            twos_complement_decode(&"1".repeat(65)),
            Err(ConvertError::WidthOutOfRange(65))
        );
    }

    #[test]
    fn panels_cover_requested_widths() {
        let panels = fixed_width_panels(200, &Width::ALL);
        assert_eq!(panels.len(), 4);
        assert_eq!(panels[0], (Width::W8, TwosComplement::Overflow));
        assert_eq!(panels[1].1.bits(), Some("0000000011001000"));
    }

    #[test]
    fn width_serde_uses_bit_counts() {
        let json = serde_json::to_string(&Width::ALL).unwrap();
        assert_eq!(json, "[8,16,32,64]");
        let parsed: Vec<Width> = serde_json::from_str("[16,32]").unwrap();
        assert_eq!(parsed, vec![Width::W16, Width::W32]);
        assert!(serde_json::from_str::<Width>("12").is_err());
    }

    #[test]
    fn sentinel_serializes_as_text() {
        let json = serde_json::to_string(&twos_complement_encode(300, Width::W8)).unwrap();
        assert_eq!(json, "\"Overflow\"");
    }
}
