//! Output sinks.
//!
//! A [`Writer`] receives the rendered text as an ordered sequence of chunks,
//! zero or more per formatting call. Implementations must take each chunk as
//! delivered: no reordering, no dropping. A sink failure aborts the call,
//! and chunks written before the failure stay written.

use std::io;

use crate::error::FormatError;

/// Destination for rendered text.
pub trait Writer {
    /// Receives one chunk of rendered output.
    fn write_chunk(&mut self, chunk: &str) -> Result<(), FormatError>;
}

/// Accumulates chunks in memory. Never fails.
impl Writer for String {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), FormatError> {
        self.push_str(chunk);
        Ok(())
    }
}

/// Sink over any [`io::Write`] stream.
///
/// I/O failures, end-of-stream included, surface as [`FormatError::Sink`].
pub struct StreamWriter<W: io::Write> {
    inner: W,
}

impl StreamWriter<io::Stdout> {
    /// Sink writing to the process standard output stream.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamWriter<io::Stderr> {
    /// Sink writing to the process standard error stream.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: io::Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Gives the underlying stream back.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Writer for StreamWriter<W> {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), FormatError> {
        self.inner.write_all(chunk.as_bytes())?;
        Ok(())
    }
}
