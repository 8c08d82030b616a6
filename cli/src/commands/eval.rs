use anyhow::{bail, Result};
use radix_engine::{
    derive_all, evaluate_binary_expression, evaluate_decimal_expression, evaluate_hex_expression,
    Base, Evaluation,
};

/// Evaluate `expr` in `base`. Binary shifts keep the operand's bit width.
pub fn eval(base: Base, expr: &str) -> Result<Evaluation> {
    let evaluation = match base {
        Base::Decimal => Evaluation::plain(evaluate_decimal_expression(expr)?),
        Base::Binary => evaluate_binary_expression(expr)?,
        Base::Hex => Evaluation::plain(evaluate_hex_expression(expr)?),
        Base::Base64 | Base::Ascii => bail!("{base} input does not support expressions"),
    };
    Ok(evaluation)
}

/// Result in the expression's own base, followed by its decimal value when
/// the two differ.
pub fn render_eval(base: Base, evaluation: &Evaluation) -> String {
    let rep = derive_all(evaluation.value, None, evaluation.bit_width);
    let own = rep.field(base);
    if base == Base::Decimal {
        own.to_string()
    } else {
        format!("{own} ({})", rep.decimal)
    }
}

pub fn eval_command(base: Base, expr: &str) -> Result<()> {
    let evaluation = eval(base, expr)?;
    println!("{}", render_eval(base, &evaluation));
    Ok(())
}
