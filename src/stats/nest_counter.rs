// src/stats/nest_counter.rs
//! ネスト深度カウンタ

use std::io::{self, Write};

use super::TokenSink;
use crate::scanner::TokenKind;

/// Tracks the running `()` and `{}` nesting plus the maximum of each.
///
/// The depths are signed: malformed input with more closers than openers
/// drives them negative, and that is reported as-is rather than clamped.
#[derive(Debug, Default)]
pub struct NestCounter {
    paren_depth: i64,
    brace_depth: i64,
    max_paren: i64,
    max_brace: i64,
}

impl NestCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paren_depth: 0,
            brace_depth: 0,
            max_paren: 0,
            max_brace: 0,
        }
    }

    #[must_use]
    pub const fn paren_depth(&self) -> i64 {
        self.paren_depth
    }

    #[must_use]
    pub const fn brace_depth(&self) -> i64 {
        self.brace_depth
    }

    #[must_use]
    pub const fn max_paren(&self) -> i64 {
        self.max_paren
    }

    #[must_use]
    pub const fn max_brace(&self) -> i64 {
        self.max_brace
    }
}

impl TokenSink for NestCounter {
    fn take_token(&mut self, token: TokenKind) {
        match token {
            TokenKind::OpenParen => self.paren_depth += 1,
            TokenKind::CloseParen => self.paren_depth -= 1,
            TokenKind::OpenBrace => self.brace_depth += 1,
            TokenKind::CloseBrace => self.brace_depth -= 1,
            _ => {}
        }

        self.max_paren = self.max_paren.max(self.paren_depth);
        self.max_brace = self.max_brace.max(self.brace_depth);
    }

    fn on_line_boundary(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "( {:<2} {{ {:<2} ", self.paren_depth, self.brace_depth)
    }

    fn on_end_of_stream(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Maximum nesting of {{}}: {}", self.max_brace)?;
        writeln!(out, "Maximum nesting of (): {}", self.max_paren)
    }
}
