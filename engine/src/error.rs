use std::fmt;

use radix_parser::ParseError;
use serde::Serialize;
use thiserror::Error;

use crate::base::Base;

/// Errors produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The text does not tokenize or parse in the field's base.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error("division by zero")]
    DivisionByZero,
    /// A literal or intermediate result left the 64-bit signed range.
    #[error("result does not fit in 64-bit signed range")]
    Overflow,
    #[error("shift count {0} is out of range")]
    ShiftOutOfRange(i64),
    #[error("{0} fields do not support expressions")]
    Unsupported(Base),
}

/// Errors produced by the conversion helpers and codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("empty input")]
    Empty,
    #[error("`{text}` is not a valid {base} numeral")]
    InvalidNumeral { base: Base, text: String },
    #[error("value does not fit in 64-bit signed range")]
    OutOfRange,
    #[error("character {ch:?} at position {position} is outside printable ASCII (32-126)")]
    NonPrintable { ch: char, position: usize },
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("decoded base64 payload is not a decimal number")]
    NotANumber,
    #[error("two's complement width {0} is out of range (1-64)")]
    WidthOutOfRange(usize),
    #[error("unsupported panel width {0}; expected 8, 16, 32 or 64")]
    UnsupportedWidth(u32),
    #[error("`{0}` is not a panel width")]
    InvalidWidth(String),
    #[error("unknown base `{0}`")]
    UnknownBase(String),
}

/// Classification of a per-field error shown next to the edited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    /// Characters outside the allowed set for the field.
    MalformedInput,
    /// Passes the character filter but does not evaluate.
    InvalidExpression,
    /// Base64 payload cannot be decoded to a decimal number.
    EncodingFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}
