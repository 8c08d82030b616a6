//! Field synchronization for a converter front end.
//!
//! A [`Session`] owns the text of the five fields. Editing one field
//! re-derives every other field from the canonical value; the edited field
//! keeps its text until a commit rewrites it. Decimal, binary and hex fields
//! hold expressions until committed; base64 and ASCII propagate on every
//! edit.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::adapters::{
    evaluate_binary_expression, evaluate_decimal_expression, evaluate_hex_expression, Evaluation,
};
use crate::base::{strip_whitespace, Base};
use crate::codec::{ascii_to_value, binary_to_ascii, decode_base64_decimal, encode_ascii, hex_to_ascii};
use crate::config::ConverterConfig;
use crate::derive::{derive_all, Representation};
use crate::error::{ConvertError, FieldError, FieldErrorKind};
use crate::twos::{fixed_width_panels, TwosComplement, Width};

/// One fixed-width two's-complement panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelEntry {
    pub width: Width,
    pub encoding: TwosComplement,
}

/// Read-only outputs computed from the current field texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPanel {
    pub signed_decimal: String,
    pub bit_length: Option<u32>,
    pub fixed_width: Vec<PanelEntry>,
}

/// Everything a front end needs to render the converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub fields: BTreeMap<Base, String>,
    pub errors: BTreeMap<Base, FieldError>,
    pub last_edited: Option<Base>,
    pub derived: DerivedPanel,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: ConverterConfig,
    texts: BTreeMap<Base, String>,
    errors: BTreeMap<Base, FieldError>,
    value: Option<i64>,
    bit_width: Option<u32>,
    last_edited: Option<Base>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(ConverterConfig::default())
    }
}

impl Session {
    pub fn new(config: ConverterConfig) -> Self {
        Session {
            config,
            texts: Base::ALL.iter().map(|&b| (b, String::new())).collect(),
            errors: BTreeMap::new(),
            value: None,
            bit_width: None,
            last_edited: None,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn text(&self, base: Base) -> &str {
        self.texts.get(&base).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, base: Base) -> Option<&FieldError> {
        self.errors.get(&base)
    }

    /// Canonical value after the last successful edit or commit.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Bit width kept by the last binary shift commit.
    pub fn bit_width(&self) -> Option<u32> {
        self.bit_width
    }

    pub fn last_edited(&self) -> Option<Base> {
        self.last_edited
    }

    /// Return to the idle state: all fields empty, no errors.
    pub fn clear(&mut self) {
        *self = Session::new(self.config.clone());
    }

    /// Replace the text of `base` as the user typed it.
    pub fn edit(&mut self, base: Base, text: &str) -> Result<(), FieldError> {
        log::debug!("edit {base}: {text:?}");
        self.last_edited = Some(base);
        match base {
            Base::Decimal | Base::Binary | Base::Hex => self.edit_numeric(base, text),
            Base::Base64 => self.edit_base64(text),
            Base::Ascii => self.edit_ascii(text),
        }
    }

    /// Evaluate the expression in `base` and rewrite every field, including
    /// `base` itself. No-op for base64/ASCII and when expressions are
    /// disabled.
    pub fn commit(&mut self, base: Base) -> Result<(), FieldError> {
        if !base.supports_expressions() || !self.config.expressions {
            return Ok(());
        }
        let clean = strip_whitespace(self.text(base));
        if clean.is_empty() || clean == "-" {
            return Ok(());
        }
        self.last_edited = Some(base);

        let outcome = match base {
            Base::Binary => evaluate_binary_expression(&clean),
            Base::Hex => evaluate_hex_expression(&clean).map(Evaluation::plain),
            _ => evaluate_decimal_expression(&clean).map(Evaluation::plain),
        };
        match outcome {
            Ok(eval) => {
                self.errors.remove(&base);
                let rep = derive_all(eval.value, None, eval.bit_width);
                self.set_text(base, rep.field(base).to_string());
                self.propagate(base, eval.value, eval.bit_width, &rep);
                Ok(())
            }
            Err(err) => {
                let unsigned: String = clean.chars().filter(|c| *c != '-').collect();
                if base.is_plain_numeral(&unsigned) {
                    return Ok(());
                }
                self.fail(
                    base,
                    FieldError::new(FieldErrorKind::InvalidExpression, format!("Invalid expression: {err}")),
                )
            }
        }
    }

    /// Signed-decimal/bit-length panel and fixed-width panels for the
    /// current decimal text. The binary field's text, when it is a plain
    /// digit run, keeps its leading zeros in the computation.
    pub fn derived(&self) -> DerivedPanel {
        let Ok(value) = Base::Decimal.parse_numeral(self.text(Base::Decimal)) else {
            return DerivedPanel::default();
        };
        let typed: String = self
            .text(Base::Binary)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let source_binary = (!typed.is_empty() && typed.chars().all(|c| c == '0' || c == '1'))
            .then_some(typed.as_str());
        let rep = derive_all(value, source_binary, None);

        let mut panel = DerivedPanel {
            fixed_width: fixed_width_panels(value, &self.config.fixed_width_panels)
                .into_iter()
                .map(|(width, encoding)| PanelEntry { width, encoding })
                .collect(),
            ..DerivedPanel::default()
        };
        if self.config.signed_panel {
            panel.signed_decimal = rep.signed_decimal;
            panel.bit_length = rep.bit_length;
        }
        panel
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            fields: self.texts.clone(),
            errors: self.errors.clone(),
            last_edited: self.last_edited,
            derived: self.derived(),
        }
    }

    // ========================================================================
    // Per-field edit handlers
    // ========================================================================

    fn edit_numeric(&mut self, base: Base, text: &str) -> Result<(), FieldError> {
        let text = if base == Base::Hex {
            text.to_ascii_uppercase()
        } else {
            text.to_string()
        };
        let clean = strip_whitespace(&text);
        self.set_text(base, text);

        if clean.is_empty() || clean == "-" {
            self.reset_except(base);
            return Ok(());
        }
        if !base.is_expression_charset(&clean) {
            return self.fail(
                base,
                FieldError::new(FieldErrorKind::MalformedInput, base.charset_hint()),
            );
        }
        self.errors.remove(&base);
        if !base.is_plain_numeral(&clean) {
            log::debug!("{base} field holds an expression; waiting for commit");
            return Ok(());
        }

        let value = match base.parse_numeral(&clean) {
            Ok(value) => value,
            Err(err) => {
                return self.fail(
                    base,
                    FieldError::new(FieldErrorKind::MalformedInput, err.to_string()),
                )
            }
        };
        let digits = clean.strip_prefix('-').unwrap_or(&clean);
        let rep = match base {
            Base::Binary => Representation {
                ascii: binary_to_ascii(digits),
                ..derive_all(value, Some(digits), None)
            },
            Base::Hex => {
                let magnitude = format!("{:b}", value.unsigned_abs());
                Representation {
                    ascii: hex_to_ascii(digits),
                    ..derive_all(value, Some(magnitude.as_str()), None)
                }
            }
            _ => derive_all(value, None, None),
        };
        self.propagate(base, value, None, &rep);
        Ok(())
    }

    fn edit_base64(&mut self, text: &str) -> Result<(), FieldError> {
        let clean = strip_whitespace(text);
        self.set_text(Base::Base64, clean.clone());
        if clean.is_empty() {
            self.reset_except(Base::Base64);
            return Ok(());
        }
        match decode_base64_decimal(&clean) {
            Ok(value) => {
                self.errors.remove(&Base::Base64);
                let rep = derive_all(value, None, None);
                self.propagate(Base::Base64, value, None, &rep);
                Ok(())
            }
            Err(ConvertError::InvalidBase64) => self.fail(
                Base::Base64,
                FieldError::new(FieldErrorKind::EncodingFailure, "Invalid Base64 encoding"),
            ),
            Err(_) => self.fail(
                Base::Base64,
                FieldError::new(FieldErrorKind::EncodingFailure, "Invalid Base64 or not a number"),
            ),
        }
    }

    fn edit_ascii(&mut self, text: &str) -> Result<(), FieldError> {
        self.set_text(Base::Ascii, text.to_string());
        if text.is_empty() {
            self.reset_except(Base::Ascii);
            return Ok(());
        }
        let hex = match encode_ascii(text) {
            Ok(hex) => hex,
            Err(_) => {
                return self.fail(
                    Base::Ascii,
                    FieldError::new(FieldErrorKind::MalformedInput, Base::Ascii.charset_hint()),
                )
            }
        };
        let value = match ascii_to_value(text) {
            Ok(value) => value,
            Err(err) => {
                return self.fail(
                    Base::Ascii,
                    FieldError::new(FieldErrorKind::MalformedInput, err.to_string()),
                )
            }
        };
        self.errors.remove(&Base::Ascii);
        let rep = Representation {
            hex,
            ..derive_all(value, None, None)
        };
        self.propagate(Base::Ascii, value, None, &rep);
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn set_text(&mut self, base: Base, text: String) {
        self.texts.insert(base, text);
    }

    fn fail(&mut self, base: Base, error: FieldError) -> Result<(), FieldError> {
        log::debug!("{base} field error: {error}");
        self.errors.insert(base, error.clone());
        Err(error)
    }

    /// Write every field except `source` from `rep`.
    fn propagate(&mut self, source: Base, value: i64, bit_width: Option<u32>, rep: &Representation) {
        for base in Base::ALL {
            if base != source {
                self.set_text(base, rep.field(base).to_string());
            }
        }
        self.value = Some(value);
        self.bit_width = bit_width;
    }

    /// Clearing a field clears its siblings and its own error.
    fn reset_except(&mut self, source: Base) {
        for base in Base::ALL {
            if base != source {
                self.set_text(base, String::new());
            }
        }
        self.errors.remove(&source);
        self.value = None;
        self.bit_width = None;
    }
}
