use std::borrow::Cow;
use std::io::{self, BufRead};

use freqbars_logging::freq_warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Newline-delimited lines from a byte stream.
///
/// A trailing `\r` is dropped and a last line without a newline is still
/// returned. Invalid UTF-8 is replaced rather than treated as fatal.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    warned_lossy: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            warned_lossy: false,
        }
    }

    /// Next line, or `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<Cow<'_, str>>, InputError> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&self.buf);
        if matches!(line, Cow::Owned(_)) && !self.warned_lossy {
            freq_warn!("input is not valid UTF-8; invalid bytes are replaced");
            self.warned_lossy = true;
        }
        Ok(Some(line))
    }
}
