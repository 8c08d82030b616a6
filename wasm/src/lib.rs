//! Browser bindings for the conversion engine.
//!
//! Values cross the boundary as decimal strings so JavaScript never rounds
//! a 64-bit integer through `Number`. Structured results are JSON.

use radix_engine::{derive_all, Base, ConverterConfig, Evaluation, Session, Width};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

fn parse_base(base: &str) -> Result<Base, JsValue> {
    base.parse::<Base>().map_err(js_err)
}

fn parse_decimal(value: &str) -> Result<i64, JsValue> {
    Base::Decimal.parse_numeral(value).map_err(js_err)
}

/// Evaluate an expression typed in `base` and return the derived
/// representation as JSON. Binary shifts keep the operand's bit width.
#[wasm_bindgen]
pub fn evaluate(base: &str, text: &str) -> Result<String, JsValue> {
    let base = parse_base(base)?;
    let evaluation = match base {
        Base::Binary => radix_engine::evaluate_binary_expression(text).map_err(js_err)?,
        Base::Hex => Evaluation::plain(radix_engine::evaluate_hex_expression(text).map_err(js_err)?),
        Base::Decimal => {
            Evaluation::plain(radix_engine::evaluate_decimal_expression(text).map_err(js_err)?)
        }
        Base::Base64 | Base::Ascii => {
            return Err(js_err(radix_engine::EvalError::Unsupported(base)))
        }
    };
    to_json(&derive_all(evaluation.value, None, evaluation.bit_width))
}

/// Every representation of a decimal value, as JSON.
#[wasm_bindgen(js_name = deriveAll)]
pub fn derive_all_json(
    decimal: &str,
    source_binary: Option<String>,
    bit_width: Option<u32>,
) -> Result<String, JsValue> {
    let rep = radix_engine::derive_from_text(decimal, source_binary.as_deref(), bit_width)
        .map_err(js_err)?;
    to_json(&rep)
}

/// Printable ASCII from byte-aligned hex or binary digits, or `""`.
#[wasm_bindgen(js_name = decodeBytes)]
pub fn decode_bytes(base: &str, digits: &str) -> Result<String, JsValue> {
    Ok(radix_engine::decode_bytes(parse_base(base)?, digits))
}

#[wasm_bindgen(js_name = encodeAscii)]
pub fn encode_ascii(text: &str) -> Result<String, JsValue> {
    radix_engine::encode_ascii(text).map_err(js_err)
}

/// Zero-padded bits, or `"Overflow"`.
#[wasm_bindgen(js_name = twosComplementEncode)]
pub fn twos_complement_encode(decimal: &str, width: u32) -> Result<String, JsValue> {
    let width = Width::try_from(width).map_err(js_err)?;
    Ok(radix_engine::twos_complement_encode(parse_decimal(decimal)?, width).to_string())
}

/// Decimal text of a two's-complement bit string.
#[wasm_bindgen(js_name = twosComplementDecode)]
pub fn twos_complement_decode(bits: &str) -> Result<String, JsValue> {
    radix_engine::twos_complement_decode(bits)
        .map(|v| v.to_string())
        .map_err(js_err)
}

/// A five-field converter bound to one page.
#[wasm_bindgen]
pub struct ConverterSession {
    inner: Session,
}

#[wasm_bindgen]
impl ConverterSession {
    /// `config_json` is optional; omitted keys take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ConverterSession, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str::<ConverterConfig>(json).map_err(js_err)?
            }
            _ => ConverterConfig::default(),
        };
        Ok(ConverterSession {
            inner: Session::new(config),
        })
    }

    /// Apply a keystroke-level edit. Rejects with the field's message; the
    /// snapshot still reflects the edit either way.
    pub fn edit(&mut self, base: &str, text: &str) -> Result<(), JsValue> {
        let base = parse_base(base)?;
        self.inner.edit(base, text).map_err(js_err)
    }

    /// Evaluate the field's expression, as on Enter.
    pub fn commit(&mut self, base: &str) -> Result<(), JsValue> {
        let base = parse_base(base)?;
        self.inner.commit(base).map_err(js_err)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.inner.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only success paths: building a `JsValue` error needs a JS host.

    #[test]
    fn evaluate_returns_json() {
        let json = evaluate("bin", "100>>1").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["decimal"], "2");
        assert_eq!(value["binary"], "010");
    }

    #[test]
    fn derive_all_json_fields() {
        let json = derive_all_json("85", None, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base64"], "ODU=");
        assert_eq!(value["signedDecimal"], "-43");
    }

    #[test]
    fn twos_complement_helpers() {
        assert_eq!(twos_complement_encode("-32", 8).unwrap(), "11100000");
        assert_eq!(twos_complement_encode("128", 8).unwrap(), "Overflow");
        assert_eq!(twos_complement_decode("11100000").unwrap(), "-32");
        assert_eq!(decode_bytes("hex", "4142").unwrap(), "AB");
        assert_eq!(encode_ascii("AB").unwrap(), "4142");
    }

    #[test]
    fn session_snapshot() {
        let mut session = ConverterSession::new(None).unwrap();
        session.edit("dec", "32+53").unwrap();
        session.commit("dec").unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(&session.snapshot().unwrap()).unwrap();
        assert_eq!(snapshot["fields"]["hex"], "55");
        assert_eq!(snapshot["derived"]["bitLength"], 7);
    }
}
