//! Single-pass O(n) lexer for integer expressions in a fixed radix.
//!
//! Every maximal run of digits of the active radix becomes one `Integer`
//! token, so `1010+11` in binary lexes as `1010`, `+`, `11`.
use crate::ast::{Radix, Span};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    radix: Radix,
    pos: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn tokenize(source: &'a str, radix: Radix) -> Result<Vec<Token>, ParseError> {
        let mut lexer = Lexer {
            source,
            bytes: source.as_bytes(),
            radix,
            pos: 0,
            col: 1,
        };
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token()?;
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        log::trace!("lexed {} tokens from {:?} ({:?})", tokens.len(), source, radix);
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> u8 {
        let ch = self.bytes[self.pos];
        self.pos += 1;
        self.col += 1;
        ch
    }

    fn span(&self) -> Span {
        Span { col: self.col }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }
    }

    fn token(&self, kind: TokenKind, sp: Span, offset: usize) -> Token {
        Token {
            kind,
            span: sp,
            lexeme: kind.name().into(),
            byte_offset: offset,
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let sp = self.span();
        let offset = self.pos;

        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: sp,
                lexeme: String::new(),
                byte_offset: offset,
            });
        };

        if self.radix.is_digit(ch as char) {
            return Ok(self.lex_number(sp));
        }

        // Two-character shift operators. A lone `<` or `>` is a comparison,
        // which has no integer result.
        if ch == b'<' || ch == b'>' {
            self.advance();
            if self.peek() != Some(ch) {
                return Err(ParseError::new(
                    format!("comparison `{}` is not supported; use `<<` or `>>`", ch as char),
                    sp.col,
                ));
            }
            self.advance();
            let kind = if ch == b'<' { TokenKind::Shl } else { TokenKind::Shr };
            return Ok(self.token(kind, sp, offset));
        }

        let kind = match ch {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'&' => TokenKind::Amp,
            b'|' => TokenKind::Pipe,
            b'^' => TokenKind::Caret,
            b'~' => TokenKind::Tilde,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            _ => return Err(self.unexpected(sp)),
        };
        self.advance();
        Ok(self.token(kind, sp, offset))
    }

    fn lex_number(&mut self, sp: Span) -> Token {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if self.radix.is_digit(ch as char) {
                self.advance();
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Integer,
            span: sp,
            lexeme: self.source[start..self.pos].to_ascii_uppercase(),
            byte_offset: start,
        }
    }

    fn unexpected(&self, sp: Span) -> ParseError {
        let ch = self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}');
        if ch.is_ascii_alphanumeric() {
            ParseError::new(
                format!("digit `{ch}` is not valid in base {}", self.radix.value()),
                sp.col,
            )
        } else {
            ParseError::new(format!("unexpected character `{ch}`"), sp.col)
        }
    }
}
