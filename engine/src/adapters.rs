//! Per-base expression entry points.
//!
//! Numerals are lexed in the field's own base, so `A+F` in the hex field is
//! `10 + 15`. The binary field additionally recognizes the bare shift shape
//! `<digits> << <count>` / `<digits> >> <count>` and keeps the operand's bit
//! width where the result allows it.

use serde::Serialize;

use crate::base::{strip_whitespace, Base};
use crate::error::EvalError;
use crate::eval::evaluate;

/// Result of evaluating a binary-field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub value: i64,
    /// Width the binary rendering must be zero-padded to, when the
    /// expression was a width-preserving shift.
    pub bit_width: Option<u32>,
}

impl Evaluation {
    pub fn plain(value: i64) -> Self {
        Self {
            value,
            bit_width: None,
        }
    }

    pub fn preserves_bits(&self) -> bool {
        self.bit_width.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Left,
    Right,
}

pub fn evaluate_decimal_expression(text: &str) -> Result<i64, EvalError> {
    evaluate(Base::Decimal, &strip_whitespace(text))
}

pub fn evaluate_hex_expression(text: &str) -> Result<i64, EvalError> {
    evaluate(Base::Hex, &strip_whitespace(text).to_ascii_uppercase())
}

/// Evaluate a binary-field expression.
///
/// ```
/// use radix_engine::evaluate_binary_expression;
///
/// let right = evaluate_binary_expression("100>>1").unwrap();
/// assert_eq!((right.value, right.bit_width), (2, Some(3)));
///
/// let left = evaluate_binary_expression("100<<1").unwrap();
/// assert_eq!((left.value, left.bit_width), (8, None));
/// ```
pub fn evaluate_binary_expression(text: &str) -> Result<Evaluation, EvalError> {
    let clean = strip_whitespace(text);
    if let Some((operand, shift, count)) = split_bare_shift(&clean) {
        return bare_shift(operand, shift, count);
    }
    evaluate(Base::Binary, &clean).map(Evaluation::plain)
}

/// Match `[01]+ (<<|>>) [0-9]+` exactly. The count is decimal.
fn split_bare_shift(clean: &str) -> Option<(&str, Shift, &str)> {
    [("<<", Shift::Left), (">>", Shift::Right)]
        .into_iter()
        .find_map(|(pat, shift)| {
            let (operand, count) = clean.split_once(pat)?;
            let is_operand = !operand.is_empty() && operand.chars().all(|c| c == '0' || c == '1');
            let is_count = !count.is_empty() && count.chars().all(|c| c.is_ascii_digit());
            (is_operand && is_count).then_some((operand, shift, count))
        })
}

fn bare_shift(operand: &str, shift: Shift, count: &str) -> Result<Evaluation, EvalError> {
    let width = u32::try_from(operand.len()).unwrap_or(u32::MAX);
    let unsigned = u64::from_str_radix(operand, 2).map_err(|_| EvalError::Overflow)?;
    // Only fails on overflow; a huge count shifts everything out.
    let count = count.parse::<u64>().unwrap_or(u64::MAX);

    let result = match shift {
        Shift::Right => {
            let shifted = if count >= 64 { 0 } else { unsigned >> count };
            let value = i64::try_from(shifted).map_err(|_| EvalError::Overflow)?;
            Evaluation {
                value,
                bit_width: Some(width),
            }
        }
        Shift::Left => {
            let shifted: u128 = match unsigned {
                0 => 0,
                _ if count >= 64 => return Err(EvalError::Overflow),
                n => u128::from(n) << count,
            };
            let value = i64::try_from(shifted).map_err(|_| EvalError::Overflow)?;
            let fits = width >= 64 || shifted < (1u128 << width);
            Evaluation {
                value,
                bit_width: fits.then_some(width),
            }
        }
    };
    log::debug!(
        "bare shift {operand} {:?} {count} -> {} (bit width {:?})",
        shift,
        result.value,
        result.bit_width
    );
    Ok(result)
}
