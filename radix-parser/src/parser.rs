/// Pratt parser for integer arithmetic/bitwise expressions.
///
/// Precedence, loosest first: `|`, `^`, `&`, `<< >>`, `+ -`, `* / %`,
/// prefix `- ~`. All binary operators are left-associative.

use crate::ast::*;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Binding power of the prefix operators `-` and `~`.
const PREFIX_BP: u8 = 13;

/// Limit on both parenthesis/prefix nesting and the depth of the built tree.
/// Parsing and evaluation recurse along these, so the cap bounds their stack.
pub const MAX_DEPTH: usize = 256;

/// Parse a complete expression in the given radix.
///
/// ```
/// use radix_parser::{parse_expression, ast::{BinOp, Expr, Radix}};
///
/// let expr = parse_expression("A+F", Radix::Hex).unwrap();
/// assert!(matches!(expr, Expr::BinOp { op: BinOp::Add, .. }));
/// ```
pub fn parse_expression(source: &str, radix: Radix) -> Result<Expr, ParseError> {
    let tokens = Lexer::tokenize(source, radix)?;
    let mut parser = Parser::new(tokens, radix);
    parser.do_parse_expression()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    radix: Radix,
    /// Open parentheses and prefix operators on the current descent.
    nesting: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>, radix: Radix) -> Self {
        Self {
            tokens,
            pos: 0,
            radix,
            nesting: 0,
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos];
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            let tok = self.peek();
            Err(ParseError::new(
                format!("expected `{}`, found `{}`", kind.name(), tok_display(tok)),
                tok.span.col,
            ))
        }
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn enter(&mut self, sp: Span) -> Result<(), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(too_deep(sp));
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    // ========================================================================
    // Entry
    // ========================================================================

    fn do_parse_expression(&mut self) -> Result<Expr, ParseError> {
        let (expr, _) = self.parse_expr_bp(0)?;
        if !self.at(TokenKind::Eof) {
            let tok = self.peek();
            return Err(ParseError::new(
                format!("unexpected `{}` after expression", tok_display(tok)),
                tok.span.col,
            ));
        }
        Ok(expr)
    }

    // ========================================================================
    // Expressions
    //
    // Each parse function returns the expression with its tree depth.
    // ========================================================================

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<(Expr, usize), ParseError> {
        let (mut lhs, mut depth) = self.parse_prefix()?;

        while let Some((l_bp, r_bp)) = infix_bp(self.peek_kind()) {
            if l_bp < min_bp {
                break;
            }
            let op_span = self.span();
            let op = token_to_binop(self.advance().kind);
            let (rhs, rhs_depth) = self.parse_expr_bp(r_bp)?;
            depth = deeper(depth.max(rhs_depth), op_span)?;
            let sp = lhs.span();
            lhs = Expr::BinOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span: sp,
            };
        }

        Ok((lhs, depth))
    }

    fn parse_prefix(&mut self) -> Result<(Expr, usize), ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Tilde => UnaryOp::BitNot,
            _ => return self.parse_atom(),
        };
        let sp = self.span();
        self.enter(sp)?;
        self.advance();
        let (operand, depth) = self.parse_expr_bp(PREFIX_BP)?;
        self.leave();
        let expr = Expr::UnaryOp {
            op,
            operand: Box::new(operand),
            span: sp,
        };
        Ok((expr, deeper(depth, sp)?))
    }

    fn parse_atom(&mut self) -> Result<(Expr, usize), ParseError> {
        let sp = self.span();
        match self.peek_kind() {
            TokenKind::Integer => {
                let digits = self.advance().lexeme.clone();
                let expr = Expr::Number {
                    digits,
                    radix: self.radix,
                    span: sp,
                };
                Ok((expr, 1))
            }
            TokenKind::LParen => {
                self.enter(sp)?;
                self.advance();
                let inner = self.parse_expr_bp(0)?;
                self.expect(TokenKind::RParen)?;
                self.leave();
                Ok(inner)
            }
            _ => {
                let tok = self.peek();
                Err(ParseError::new(
                    format!("expected expression, found `{}`", tok_display(tok)),
                    tok.span.col,
                ))
            }
        }
    }
}

fn deeper(depth: usize, sp: Span) -> Result<usize, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(too_deep(sp));
    }
    Ok(depth + 1)
}

fn too_deep(sp: Span) -> ParseError {
    ParseError::new("expression nested too deeply", sp.col)
}

// ============================================================================
// Pratt precedence helpers
// ============================================================================

/// Returns (left_bp, right_bp) for infix operators. None if not infix.
fn infix_bp(kind: TokenKind) -> Option<(u8, u8)> {
    Some(match kind {
        TokenKind::Pipe => (1, 2),
        TokenKind::Caret => (3, 4),
        TokenKind::Amp => (5, 6),
        TokenKind::Shl | TokenKind::Shr => (7, 8),
        TokenKind::Plus | TokenKind::Minus => (9, 10),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => (11, 12),
        _ => return None,
    })
}

fn token_to_binop(kind: TokenKind) -> BinOp {
    match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::Percent => BinOp::Mod,
        TokenKind::Shl => BinOp::Shl,
        TokenKind::Shr => BinOp::Shr,
        TokenKind::Amp => BinOp::BitAnd,
        TokenKind::Caret => BinOp::BitXor,
        TokenKind::Pipe => BinOp::BitOr,
        _ => unreachable!("not a binary operator: {kind:?}"),
    }
}

fn tok_display(tok: &Token) -> String {
    if tok.kind == TokenKind::Eof || tok.lexeme.is_empty() {
        tok.kind.name().to_string()
    } else {
        tok.lexeme.clone()
    }
}
