/// Owned AST types for integer expressions.
///
/// Literals keep their source digits together with the radix they were
/// lexed in; turning them into machine integers is the evaluator's job so
/// that range errors are reported in one place.

/// Source location for error reporting (1-based column on a single line).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub col: usize,
}

/// Numeral base a source string is lexed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Whether `ch` is a digit of this radix. Hex accepts both cases.
    pub fn is_digit(self, ch: char) -> bool {
        match self {
            Radix::Binary => ch == '0' || ch == '1',
            Radix::Decimal => ch.is_ascii_digit(),
            Radix::Hex => ch.is_ascii_hexdigit(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    BitNot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number {
        digits: String,
        radix: Radix,
        span: Span,
    },
    UnaryOp {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },
    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. } | Expr::UnaryOp { span, .. } | Expr::BinOp { span, .. } => {
                *span
            }
        }
    }
}
