//! Line input for the REPL.

use std::io::{self, BufRead};

/// A reusable line buffer over any [`BufRead`] source.
///
/// Reading from a generic source instead of stdin directly keeps the REPL
/// loop testable against in-memory input.
pub struct InputBuffer<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> InputBuffer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Read the next line with surrounding whitespace trimmed.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns an error if reading from the underlying source fails.
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(self.buffer.trim()))
    }
}
