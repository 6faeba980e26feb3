// src/scanner/cursor.rs
//! Buffered cursor over a byte source.

use std::io::{self, BufRead};

/// 先読み1バイト付きカーソル
///
/// `lookahead` is always the byte immediately following `current`, fetched one
/// step ahead so 2-byte sequences (`//`, `/*`, `*/`) never need backtracking.
/// Every consumed byte is retained in `pending_line` until the caller flushes
/// it with [`Cursor::take_line`].
pub struct Cursor<R> {
    reader: R,
    current: Option<u8>,
    lookahead: Option<u8>,
    pending_line: Vec<u8>,
}

impl<R: BufRead> Cursor<R> {
    /// Primes `current` and `lookahead` from the first two bytes of `reader`.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let current = fetch(&mut reader)?;
        let lookahead = fetch(&mut reader)?;
        Ok(Self {
            reader,
            current,
            lookahead,
            pending_line: Vec::new(),
        })
    }

    /// Current byte, `None` once the source is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// The byte after `current`. Never consumes.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.lookahead
    }

    /// Consume one byte: the departing byte joins the pending line, the
    /// lookahead becomes current and a new lookahead is fetched. Advancing
    /// past end of stream stays at `None` indefinitely.
    pub fn advance(&mut self) -> io::Result<()> {
        if let Some(byte) = self.current {
            self.pending_line.push(byte);
        }
        self.current = self.lookahead;
        self.lookahead = fetch(&mut self.reader)?;
        Ok(())
    }

    /// Hand over the bytes consumed since the last flush and clear them.
    pub fn take_line(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pending_line)
    }
}

fn fetch<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    let buf = reader.fill_buf()?;
    let Some(&byte) = buf.first() else {
        return Ok(None);
    };
    reader.consume(1);
    Ok(Some(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookahead_tracks_current() {
        let mut cursor = Cursor::new(&b"abc"[..]).unwrap();
        assert_eq!(cursor.current(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'b'));

        cursor.advance().unwrap();
        assert_eq!(cursor.current(), Some(b'b'));
        assert_eq!(cursor.peek(), Some(b'c'));

        cursor.advance().unwrap();
        assert_eq!(cursor.current(), Some(b'c'));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_reading_past_end_of_stream_is_safe() {
        let mut cursor = Cursor::new(&b"x"[..]).unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.current(), None);
        // Stays at None no matter how often we advance.
        for _ in 0..10 {
            cursor.advance().unwrap();
            assert_eq!(cursor.current(), None);
            assert_eq!(cursor.peek(), None);
        }
    }

    #[test]
    fn test_take_line_returns_consumed_bytes() {
        let mut cursor = Cursor::new(&b"ab\ncd"[..]).unwrap();
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.take_line(), b"ab\n");
        // The buffer restarts empty; current is already on the next line.
        assert_eq!(cursor.current(), Some(b'c'));
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.take_line(), b"cd");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new(&b""[..]).unwrap();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
        cursor.advance().unwrap();
        assert_eq!(cursor.take_line(), b"");
    }

    #[test]
    fn test_advancing_at_end_does_not_grow_pending_line() {
        let mut cursor = Cursor::new(&b"a"[..]).unwrap();
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.take_line(), b"a");
    }
}
