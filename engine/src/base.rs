//! The five textual representations a value can be edited in.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use radix_parser::Radix;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Characters an expression may use besides the digits of its base.
pub const OPERATOR_CHARS: &str = "+-*/%()&|^<>~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Decimal,
    Binary,
    Hex,
    Base64,
    Ascii,
}

impl Base {
    pub const ALL: [Base; 5] = [Base::Decimal, Base::Binary, Base::Hex, Base::Base64, Base::Ascii];

    /// Numeral radix for the numeric bases; `None` for base64 and ASCII.
    pub fn radix(self) -> Option<Radix> {
        match self {
            Base::Decimal => Some(Radix::Decimal),
            Base::Binary => Some(Radix::Binary),
            Base::Hex => Some(Radix::Hex),
            Base::Base64 | Base::Ascii => None,
        }
    }

    /// Whether expressions typed in this field can be evaluated on commit.
    pub fn supports_expressions(self) -> bool {
        self.radix().is_some()
    }

    pub fn is_digit(self, ch: char) -> bool {
        self.radix().is_some_and(|r| r.is_digit(ch))
    }

    /// A non-empty run of this base's digits with an optional leading `-`.
    /// Whitespace is ignored.
    pub fn is_plain_numeral(self, text: &str) -> bool {
        let clean = strip_whitespace(text);
        let digits = clean.strip_prefix('-').unwrap_or(&clean);
        !digits.is_empty() && digits.chars().all(|c| self.is_digit(c))
    }

    /// Whether every character is a digit of this base or an operator.
    pub fn is_expression_charset(self, text: &str) -> bool {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| self.is_digit(c) || OPERATOR_CHARS.contains(c))
    }

    /// Parse a plain numeral (optional `-`, digits of this base).
    pub fn parse_numeral(self, text: &str) -> Result<i64, ConvertError> {
        let invalid = || ConvertError::InvalidNumeral {
            base: self,
            text: text.to_string(),
        };
        let radix = self.radix().ok_or_else(invalid)?;
        if !self.is_plain_numeral(text) {
            return Err(invalid());
        }
        i64::from_str_radix(&strip_whitespace(text), radix.value()).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::OutOfRange,
            _ => invalid(),
        })
    }

    /// Render `value` in this base using the `-`-prefixed magnitude
    /// convention. `None` for base64 and ASCII, which are not positional.
    pub fn render(self, value: i64) -> Option<String> {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        match self {
            Base::Decimal => Some(value.to_string()),
            Base::Binary => Some(format!("{sign}{magnitude:b}")),
            Base::Hex => Some(format!("{sign}{magnitude:X}")),
            Base::Base64 | Base::Ascii => None,
        }
    }

    /// Error message shown when the field contains characters it cannot hold.
    pub fn charset_hint(self) -> &'static str {
        match self {
            Base::Decimal => "Only 0-9 and operators allowed",
            Base::Binary => "Only 0, 1, and operators allowed",
            Base::Hex => "Only 0-9, A-F, and operators allowed",
            Base::Base64 => "Invalid Base64 encoding",
            Base::Ascii => "Only printable ASCII (32-126) allowed",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Base::Decimal => "decimal",
            Base::Binary => "binary",
            Base::Hex => "hex",
            Base::Base64 => "base64",
            Base::Ascii => "ascii",
        })
    }
}

impl FromStr for Base {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dec" | "decimal" | "10" => Ok(Base::Decimal),
            "bin" | "binary" | "2" => Ok(Base::Binary),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hex),
            "b64" | "base64" => Ok(Base::Base64),
            "ascii" | "text" => Ok(Base::Ascii),
            _ => Err(ConvertError::UnknownBase(s.to_string())),
        }
    }
}

pub(crate) fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numerals() {
        assert!(Base::Binary.is_plain_numeral("0101"));
        assert!(Base::Binary.is_plain_numeral("-1 0 1"));
        assert!(!Base::Binary.is_plain_numeral("-"));
        assert!(!Base::Binary.is_plain_numeral("102"));
        assert!(Base::Hex.is_plain_numeral("dead"));
        assert!(!Base::Hex.is_plain_numeral("A+F"));
        assert!(!Base::Base64.is_plain_numeral("12"));
    }

    #[test]
    fn expression_charset() {
        assert!(Base::Binary.is_expression_charset("100 >> 1"));
        assert!(!Base::Binary.is_expression_charset("102"));
        assert!(Base::Hex.is_expression_charset("(A+f)*~3"));
        assert!(!Base::Decimal.is_expression_charset("1; drop"));
    }

    #[test]
    fn parse_numeral_signs_and_errors() {
        assert_eq!(Base::Binary.parse_numeral("-101"), Ok(-5));
        assert_eq!(Base::Hex.parse_numeral("ff"), Ok(255));
        assert_eq!(Base::Decimal.parse_numeral("9223372036854775808"), Err(ConvertError::OutOfRange));
        assert_eq!(Base::Decimal.parse_numeral("-9223372036854775808"), Ok(i64::MIN));
        assert!(matches!(
            Base::Decimal.parse_numeral("+5"),
            Err(ConvertError::InvalidNumeral { .. })
        ));
        assert!(Base::Ascii.parse_numeral("5").is_err());
    }

    #[test]
    fn render_uses_magnitude_convention() {
        assert_eq!(Base::Binary.render(-5).as_deref(), Some("-101"));
        assert_eq!(Base::Hex.render(255).as_deref(), Some("FF"));
        assert_eq!(Base::Hex.render(i64::MIN).as_deref(), Some("-8000000000000000"));
        assert_eq!(Base::Ascii.render(65), None);
    }

    #[test]
    fn from_str_aliases() {
        assert_eq!("bin".parse::<Base>(), Ok(Base::Binary));
        assert_eq!("HEX".parse::<Base>(), Ok(Base::Hex));
        assert_eq!("b64".parse::<Base>(), Ok(Base::Base64));
        assert!("octal".parse::<Base>().is_err());
    }
}
