//! Interpreter for parsed integer expressions.
//!
//! `+ - * /` and negation are exact: intermediates are rationals, and the
//! final value is floored once, so `7/2*2` is 7. The bitwise operators, the
//! shifts and `%` work on integers and truncate a fractional operand toward
//! zero first. Overflow is reported instead of wrapping.

use std::num::IntErrorKind;

use radix_parser::ast::{BinOp, Expr, UnaryOp};
use radix_parser::parse_expression;

use crate::base::Base;
use crate::error::EvalError;

/// Evaluate `text` as an expression whose numerals are written in `base`.
///
/// ```
/// use radix_engine::{evaluate, Base};
///
/// assert_eq!(evaluate(Base::Decimal, "32+53"), Ok(85));
/// assert_eq!(evaluate(Base::Hex, "A+F"), Ok(25));
/// assert_eq!(evaluate(Base::Decimal, "7/2*2"), Ok(7));
/// assert!(evaluate(Base::Decimal, "1; drop").is_err());
/// ```
pub fn evaluate(base: Base, text: &str) -> Result<i64, EvalError> {
    let radix = base.radix().ok_or(EvalError::Unsupported(base))?;
    let result = parse_expression(text, radix)
        .map_err(EvalError::from)
        .and_then(|expr| eval_expr(&expr));
    match &result {
        Ok(value) => log::debug!("{base} expression {text:?} = {value}"),
        Err(err) => log::debug!("{base} expression {text:?} rejected: {err}"),
    }
    result
}

/// Evaluate an already-parsed expression tree, flooring the exact result.
pub fn eval_expr(expr: &Expr) -> Result<i64, EvalError> {
    eval_exact(expr)?.floor()
}

fn eval_exact(expr: &Expr) -> Result<Ratio, EvalError> {
    match expr {
        Expr::Number { digits, radix, .. } => {
            let value = i64::from_str_radix(digits, radix.value()).map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => EvalError::Overflow,
                // The lexer only emits non-empty digit runs of the radix.
                _ => unreachable!("lexer produced invalid literal {digits:?}"),
            })?;
            Ok(Ratio::from(value))
        }
        Expr::UnaryOp { op, operand, .. } => {
            let v = eval_exact(operand)?;
            match op {
                UnaryOp::Neg => v.neg(),
                UnaryOp::BitNot => Ok(Ratio::from(!v.trunc()?)),
            }
        }
        Expr::BinOp { op, lhs, rhs, .. } => {
            let a = eval_exact(lhs)?;
            let b = eval_exact(rhs)?;
            apply_binop(*op, a, b)
        }
    }
}

fn apply_binop(op: BinOp, a: Ratio, b: Ratio) -> Result<Ratio, EvalError> {
    match op {
        BinOp::Add => a.add(b),
        BinOp::Sub => a.add(b.neg()?),
        BinOp::Mul => a.mul(b),
        BinOp::Div => a.div(b),
        BinOp::Mod => {
            let (a, b) = (a.trunc()?, b.trunc()?);
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // i64::MIN % -1 is mathematically 0.
            Ok(Ratio::from(a.wrapping_rem(b)))
        }
        BinOp::Shl => shift_left(a.trunc()?, b.trunc()?),
        BinOp::Shr => {
            let (a, b) = (a.trunc()?, b.trunc()?);
            if b < 0 {
                return Err(EvalError::ShiftOutOfRange(b));
            }
            Ok(Ratio::from(if b >= 64 { a >> 63 } else { a >> b }))
        }
        BinOp::BitAnd => Ok(Ratio::from(a.trunc()? & b.trunc()?)),
        BinOp::BitXor => Ok(Ratio::from(a.trunc()? ^ b.trunc()?)),
        BinOp::BitOr => Ok(Ratio::from(a.trunc()? | b.trunc()?)),
    }
}

fn shift_left(a: i64, b: i64) -> Result<Ratio, EvalError> {
    if !(0..64).contains(&b) {
        return Err(EvalError::ShiftOutOfRange(b));
    }
    Ok(Ratio::integer(i128::from(a) << b))
}

/// Exact rational intermediate. Always reduced, with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ratio {
    num: i128,
    den: i128,
}

impl From<i64> for Ratio {
    fn from(value: i64) -> Self {
        Ratio::integer(i128::from(value))
    }
}

impl Ratio {
    fn integer(num: i128) -> Self {
        Ratio { num, den: 1 }
    }

    fn new(num: i128, den: i128) -> Result<Self, EvalError> {
        if den == 0 {
            return Err(EvalError::DivisionByZero);
        }
        let (num, den) = if den < 0 {
            (checked(num.checked_neg())?, checked(den.checked_neg())?)
        } else {
            (num, den)
        };
        // gcd <= den, so it fits back into i128.
        let g = i128::try_from(gcd(num.unsigned_abs(), den.unsigned_abs()))
            .map_err(|_| EvalError::Overflow)?;
        Ok(Ratio {
            num: num / g,
            den: den / g,
        })
    }

    fn neg(self) -> Result<Self, EvalError> {
        Ok(Ratio {
            num: checked(self.num.checked_neg())?,
            den: self.den,
        })
    }

    fn add(self, other: Ratio) -> Result<Self, EvalError> {
        let lhs = checked(self.num.checked_mul(other.den))?;
        let rhs = checked(other.num.checked_mul(self.den))?;
        Ratio::new(
            checked(lhs.checked_add(rhs))?,
            checked(self.den.checked_mul(other.den))?,
        )
    }

    fn mul(self, other: Ratio) -> Result<Self, EvalError> {
        Ratio::new(
            checked(self.num.checked_mul(other.num))?,
            checked(self.den.checked_mul(other.den))?,
        )
    }

    fn div(self, other: Ratio) -> Result<Self, EvalError> {
        if other.num == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ratio::new(
            checked(self.num.checked_mul(other.den))?,
            checked(self.den.checked_mul(other.num))?,
        )
    }

    /// Round toward zero, for the integer-only operators.
    fn trunc(self) -> Result<i64, EvalError> {
        i64::try_from(self.num / self.den).map_err(|_| EvalError::Overflow)
    }

    /// Round toward negative infinity.
    fn floor(self) -> Result<i64, EvalError> {
        i64::try_from(self.num.div_euclid(self.den)).map_err(|_| EvalError::Overflow)
    }
}

fn checked(value: Option<i128>) -> Result<i128, EvalError> {
    value.ok_or(EvalError::Overflow)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
