//! Bridges between Sink and fmt::Write.
//!
//! Grounded values render through fmt::Write, which cannot carry a cause in
//! its error; SinkWriter keeps the Sink's error aside so the renderer can
//! surface it. FormatterSink goes the other way, letting Display reuse the
//! renderer.

use std::fmt;

use super::sink::{Sink, SinkError};


pub struct SinkWriter<'a> {
    sink: &'a mut dyn Sink,
    error: Option<SinkError>,
}

pub struct FormatterSink<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}


impl<'a> SinkWriter<'a> {
    pub fn new(sink: &'a mut dyn Sink) -> Self {
        Self { sink, error: None }
    }

    /// Error from the underlying Sink, if that is what failed.
    pub fn take_error(&mut self) -> Option<SinkError> {
        self.error.take()
    }
}

impl<'a, F: fmt::Write> FormatterSink<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a> fmt::Write for SinkWriter<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        match self.sink.write_chunk(s) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.error = Some(err);
                Err(fmt::Error)
            }
        }
    }
}

impl<'a, F: fmt::Write> Sink for FormatterSink<'a, F> {
    fn write_chunk(&mut self, chunk: &str) -> Result<(), SinkError> {
        self.fmt_writer
            .write_str(chunk)
            .map_err(|_| SinkError::Fmt)
    }
}
