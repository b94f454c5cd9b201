//! Whitespace-collapsing accumulator for SQL fragments

use std::fmt;

/// Accumulates SQL text, collapsing every run of spaces, tabs and newlines
/// into a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlBuffer {
    buf: Vec<u8>,
}

impl SqlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one byte; whitespace is written as a single space unless the
    /// buffer already ends in one
    pub fn write_sql(&mut self, b: u8) {
        match b {
            b'\n' | b'\t' | b' ' => {
                if self.buf.last() != Some(&b' ') {
                    self.buf.push(b' ');
                }
            }
            _ => self.buf.push(b),
        }
    }

    /// Append every byte of `sql`
    pub fn write_sql_str(&mut self, sql: &str) {
        for b in sql.bytes() {
            self.write_sql(b);
        }
    }

    /// Take the accumulated text, leaving the buffer empty
    pub fn dump(&mut self) -> String {
        let buf = std::mem::take(&mut self.buf);
        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View of the accumulated text without draining it
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }
}

impl fmt::Display for SqlBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}
