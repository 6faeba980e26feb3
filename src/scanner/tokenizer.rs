// src/scanner/tokenizer.rs
//! The scanning state machine.
//!
//! [`Tokenizer::next_token`] produces exactly one [`TokenKind`] per call. The
//! only state surviving between calls is whether a `/* */` comment is still
//! open: a comment spanning lines L1..L3 comes out as
//! `Comment, Newline, Comment, Newline, Comment` so line-oriented consumers
//! keep advancing even mid-comment.

use std::io::{self, BufRead};

use super::char_class::{CharCategory, CharClassifier};
use super::cursor::Cursor;

/// 粗粒度トークン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    /// A quoted literal; `'..'` and `".."` are deliberately not distinguished
    String,
    Newline,
    Operator,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Number,
    EndOfStream,
    Identifier,
}

/// Scanner state carried across `next_token` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// A `/*` comment is open and `*/` has not been seen yet.
    InsideComment,
}

/// トークナイザ
pub struct Tokenizer {
    classes: CharClassifier,
    state: ScanState,
}

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classes: CharClassifier::new(),
            state: ScanState::Normal,
        }
    }

    /// True while a block comment is open across calls.
    #[must_use]
    pub fn is_inside_comment(&self) -> bool {
        self.state == ScanState::InsideComment
    }

    /// Scan the next token off the cursor.
    pub fn next_token<R: BufRead>(&mut self, cursor: &mut Cursor<R>) -> io::Result<TokenKind> {
        // A resumed comment must not let intervening whitespace escape
        // classification, so this check comes before the whitespace skip.
        if self.state == ScanState::InsideComment {
            return self.read_comment(cursor);
        }

        while self.classes.is(cursor.current(), CharCategory::Whitespace) {
            cursor.advance()?;
        }

        if cursor.current().is_none() {
            return Ok(TokenKind::EndOfStream);
        }

        match self.classes.category(cursor.current()) {
            CharCategory::Letter => {
                while matches!(
                    self.classes.category(cursor.current()),
                    CharCategory::Letter | CharCategory::Digit
                ) {
                    cursor.advance()?;

                    // An identifier cut off by end of stream produces no
                    // token. Numbers below keep theirs.
                    if cursor.current().is_none() {
                        return Ok(TokenKind::EndOfStream);
                    }
                }
                Ok(TokenKind::Identifier)
            }

            CharCategory::Digit => {
                while self.classes.is(cursor.current(), CharCategory::Digit) {
                    cursor.advance()?;

                    if cursor.current().is_none() {
                        break;
                    }
                }
                Ok(TokenKind::Number)
            }

            CharCategory::OpenParen => {
                cursor.advance()?;
                Ok(TokenKind::OpenParen)
            }
            CharCategory::CloseParen => {
                cursor.advance()?;
                Ok(TokenKind::CloseParen)
            }
            CharCategory::OpenBrace => {
                cursor.advance()?;
                Ok(TokenKind::OpenBrace)
            }
            CharCategory::CloseBrace => {
                cursor.advance()?;
                Ok(TokenKind::CloseBrace)
            }

            CharCategory::SingleQuote | CharCategory::DoubleQuote => read_literal(cursor),

            CharCategory::Newline => {
                cursor.advance()?;
                Ok(TokenKind::Newline)
            }

            CharCategory::Slash => {
                if cursor.peek() == Some(b'*') {
                    return self.read_comment(cursor);
                }

                if cursor.peek() == Some(b'/') {
                    loop {
                        match cursor.current() {
                            // The terminator stays unconsumed: a newline
                            // becomes its own token on the next call.
                            None | Some(b'\n') => return Ok(TokenKind::Comment),
                            Some(_) => cursor.advance()?,
                        }
                    }
                }

                // A lone '/' is an ordinary operator.
                cursor.advance()?;
                Ok(TokenKind::Operator)
            }

            CharCategory::Operator => {
                cursor.advance()?;
                Ok(TokenKind::Operator)
            }

            CharCategory::EndOfStream => Ok(TokenKind::EndOfStream),

            CharCategory::Whitespace => {
                unreachable!("whitespace is consumed by the skip loop")
            }
        }
    }

    /// Block-comment scan, entered fresh on `/` + `*` lookahead or resumed
    /// while the previous call left the comment open.
    fn read_comment<R: BufRead>(&mut self, cursor: &mut Cursor<R>) -> io::Result<TokenKind> {
        // A newline inside the comment surfaces as its own token.
        if self.classes.is(cursor.current(), CharCategory::Newline) {
            cursor.advance()?;
            return Ok(TokenKind::Newline);
        }

        self.state = ScanState::InsideComment;

        loop {
            if cursor.current() == Some(b'*') && cursor.peek() == Some(b'/') {
                self.state = ScanState::Normal;
                cursor.advance()?;
                cursor.advance()?;
                return Ok(TokenKind::Comment);
            }

            match cursor.current() {
                // Leave the newline for the next call's entry check.
                Some(b'\n') => return Ok(TokenKind::Comment),
                // Unterminated comment; nothing left to scan.
                None => return Ok(TokenKind::EndOfStream),
                Some(_) => cursor.advance()?,
            }
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn read_literal<R: BufRead>(cursor: &mut Cursor<R>) -> io::Result<TokenKind> {
    let quote = cursor.current();
    loop {
        cursor.advance()?;

        if cursor.current().is_none() {
            // Unterminated literal is discarded.
            return Ok(TokenKind::EndOfStream);
        }

        if cursor.current() == quote {
            break;
        }

        if cursor.current() == Some(b'\\') {
            // Skip whatever is escaped, no interpretation.
            cursor.advance()?;
        }
    }

    cursor.advance()?;
    Ok(TokenKind::String)
}
