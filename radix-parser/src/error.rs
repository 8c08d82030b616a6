/// Parse error with source location.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub col: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, col: usize) -> Self {
        Self {
            message: message.into(),
            col,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at col {}: {}", self.col, self.message)
    }
}

impl std::error::Error for ParseError {}
