// src/stats/mod.rs
//! Token consumers that accumulate per-file statistics.

pub mod comment_counter;
pub mod line_counter;
pub mod nest_counter;
pub mod report;

pub use comment_counter::CommentCounter;
pub use line_counter::LineCounter;
pub use nest_counter::NestCounter;
pub use report::FileReport;

use std::io::{self, Write};

use crate::scanner::TokenKind;

/// 統計コレクタ共通インターフェース
///
/// The engine feeds every emitted token to every sink, in emission order. The
/// two hooks are optional; collectors with nothing to print per line or per
/// file keep the default no-ops.
pub trait TokenSink {
    /// Consume one token.
    fn take_token(&mut self, token: TokenKind);

    /// Fires exactly when a Newline token is produced, before the line text
    /// itself is echoed.
    fn on_line_boundary(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Fires once, after the last token.
    fn on_end_of_stream(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
