//! Destinations for rendered output.

use std::io::Write;

use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to write output, error: {source}"))]
    Write { source: std::io::Error },
}

/// Receives finished output text, newlines included.
pub trait OutputSink {
    /// Appends `text` to the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be delivered.
    fn write(&mut self, text: &str) -> Result<(), Error>;
}

impl OutputSink for String {
    fn write(&mut self, text: &str) -> Result<(), Error> {
        self.push_str(text);
        Ok(())
    }
}

/// Forwards output to any [`std::io::Write`], flushing after every write so
/// that a table shows up as soon as it is rendered.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self { Self { writer } }

    #[cfg(test)]
    fn into_inner(self) -> W { self.writer }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write(&mut self, text: &str) -> Result<(), Error> {
        self.writer.write_all(text.as_bytes()).context(WriteSnafu)?;
        self.writer.flush().context(WriteSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_appends() {
        let mut sink = String::new();
        OutputSink::write(&mut sink, "a\n").expect("string sink never fails");
        OutputSink::write(&mut sink, "b\n").expect("string sink never fails");
        assert_eq!(sink, "a\nb\n");
    }

    #[test]
    fn test_writer_sink_forwards_bytes() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write("╔══╗\n").expect("vec sink never fails");
        assert_eq!(sink.into_inner(), "╔══╗\n".as_bytes());
    }

    #[test]
    fn test_writer_sink_reports_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disconnected"))
            }

            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let mut sink = WriterSink::new(Broken);
        let err = sink.write("x").unwrap_err();
        assert_eq!(err.to_string(), "Failed to write output, error: disconnected");
    }
}
