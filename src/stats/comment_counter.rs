// src/stats/comment_counter.rs
//! コメント/コード行分類カウンタ

use std::io::{self, Write};

use super::TokenSink;
use crate::scanner::TokenKind;

/// Classifies every line as blank, comment-only, code-only, or both.
///
/// Comment tokens mark the line as commented; any token other than Comment or
/// Newline marks it as code. The Newline token tallies the line and resets
/// both flags.
#[derive(Debug, Default)]
pub struct CommentCounter {
    code_seen: bool,
    comment_seen: bool,
    blank: usize,
    comment_only: usize,
    code_only: usize,
    code_and_comment: usize,
}

impl CommentCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code_seen: false,
            comment_seen: false,
            blank: 0,
            comment_only: 0,
            code_only: 0,
            code_and_comment: 0,
        }
    }

    #[must_use]
    pub const fn blank(&self) -> usize {
        self.blank
    }

    #[must_use]
    pub const fn comment_only(&self) -> usize {
        self.comment_only
    }

    #[must_use]
    pub const fn code_only(&self) -> usize {
        self.code_only
    }

    #[must_use]
    pub const fn code_and_comment(&self) -> usize {
        self.code_and_comment
    }

    /// Comment lines (mixed lines included) per hundred code lines (mixed
    /// lines included). 0 when the file has no code line at all.
    #[must_use]
    pub fn comment_ratio(&self) -> f64 {
        let code = self.code_only + self.code_and_comment;
        if code == 0 {
            return 0.0;
        }
        let comments = self.comment_only + self.code_and_comment;
        comments as f64 / code as f64 * 100.0
    }
}

impl TokenSink for CommentCounter {
    fn take_token(&mut self, token: TokenKind) {
        match token {
            TokenKind::Comment => self.comment_seen = true,
            TokenKind::Newline => {
                match (self.code_seen, self.comment_seen) {
                    (true, true) => self.code_and_comment += 1,
                    (true, false) => self.code_only += 1,
                    (false, true) => self.comment_only += 1,
                    (false, false) => self.blank += 1,
                }
                self.code_seen = false;
                self.comment_seen = false;
            }
            _ => self.code_seen = true,
        }
    }

    fn on_end_of_stream(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Number of blank lines ................. {}", self.blank)?;
        writeln!(out, "Number of comment only lines .......... {}", self.comment_only)?;
        writeln!(out, "Number of code only lines ............. {}", self.code_only)?;
        writeln!(out, "Number of lines with code and comments  {}", self.code_and_comment)?;
        writeln!(out, "Comment to code ratio ................. {:.1}%", self.comment_ratio())
    }
}
