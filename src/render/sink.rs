//! Destinations for rendered text.
//!
//! The renderer hands text to a Sink chunk by chunk and propagates the first
//! failure without retrying; whether to truncate, grow, or reject is up to
//! the sink.

use std::io;
use std::str::from_utf8;

use log::debug;


pub trait Sink {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError>;
}

#[derive(Debug)]
pub enum SinkError {
    Overflow { capacity: usize },
    Io(io::Error),
    Fmt,
}

/// Fixed-capacity byte buffer.
///
/// A chunk that does not fit is stored up to exactly `capacity` bytes and
/// Overflow is reported; the prefix accepted so far stays readable.
#[derive(Debug)]
pub struct BoundedBuf {
    buf: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

/// Streams chunks into any io::Write.
pub struct IoSink<W: io::Write> {
    writer: W,
}

/// Callback sink; the closure's captures play the role of a context pointer.
pub struct FnSink<F>(pub F);


impl BoundedBuf {
    pub fn new(capacity: usize) -> Self {
        Self {
            // Grows on demand; capacity is only a bound.
            buf: Vec::new(),
            capacity,
            truncated: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Contents as text. A truncation inside a multi-byte char drops that
    /// partial char here, but as_bytes() still holds it.
    pub fn as_str(&self) -> &str {
        match from_utf8(&self.buf) {
            Ok(s) => s,
            Err(err) => {
                let valid = &self.buf[..err.valid_up_to()];
                // valid_up_to guarantees this prefix is UTF-8.
                from_utf8(valid).unwrap_or_default()
            }
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}


impl Sink for BoundedBuf {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        let remaining = self.capacity - self.buf.len();
        let bytes = chunk.as_bytes();
        if bytes.len() <= remaining {
            self.buf.extend_from_slice(bytes);
            return Ok(());
        }

        self.buf.extend_from_slice(&bytes[..remaining]);
        self.truncated = true;
        debug!(
            "BoundedBuf full: dropped {} of {} bytes",
            bytes.len() - remaining,
            bytes.len()
        );
        Err(SinkError::Overflow {
            capacity: self.capacity,
        })
    }
}

impl Sink for String {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        self.push_str(chunk);
        Ok(())
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        self.writer
            .write_all(chunk.as_bytes())
            .map_err(SinkError::Io)
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str) -> Result<(), SinkError>,
{
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        (self.0)(chunk)
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        (**self).write_chunk(chunk)
    }
}


#[cfg(test)]
#[path = "./sink_test.rs"]
mod sink_test;
