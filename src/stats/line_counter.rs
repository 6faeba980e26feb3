// src/stats/line_counter.rs
//! 行番号カウンタ

use std::io::{self, Write};

use super::TokenSink;
use crate::scanner::TokenKind;

/// Counts Newline tokens. When a line boundary is printed, the running count
/// is the number of the line that just ended (1-based).
#[derive(Debug, Default)]
pub struct LineCounter {
    count: usize,
}

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Total number of lines seen so far.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.count
    }
}

impl TokenSink for LineCounter {
    fn take_token(&mut self, token: TokenKind) {
        if token == TokenKind::Newline {
            self.count += 1;
        }
    }

    fn on_line_boundary(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{:>4} ", self.count)
    }

    fn on_end_of_stream(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Total number of lines: {}", self.count)
    }
}
