//! Stream backend implementation

use std::fmt::{self, Display};
use std::io::{self, Write};

use parking_lot::Mutex;

use super::join_operands;
use super::traits::Backend;
use crate::logger::Logger;

/// A backend that writes `<colored-name> <message>` to a stream
///
/// `printf` and `print` write exactly what they are given after the name;
/// only `println` ends the line. Write errors are ignored.
pub struct StreamBackend {
    sink: Mutex<Box<dyn Write + Send>>,
    colored: bool,
}

impl std::fmt::Debug for StreamBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamBackend")
            .field("colored", &self.colored)
            .finish()
    }
}

impl Default for StreamBackend {
    fn default() -> Self {
        Self::stderr()
    }
}

impl StreamBackend {
    /// Write to standard error
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Write to standard output
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Write to a custom sink
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
            colored: true,
        }
    }

    /// Print logger names without ANSI colors
    pub fn without_color(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    fn prefix(&self, logger: &Logger) -> String {
        if self.colored {
            logger.colorize(logger.name()).to_string()
        } else {
            logger.name().to_string()
        }
    }

    fn write(&self, line: fmt::Arguments<'_>) {
        let mut sink = self.sink.lock();
        let _ = sink.write_fmt(line);
        let _ = sink.flush();
    }
}

impl Backend for StreamBackend {
    fn printf(&self, logger: &Logger, args: fmt::Arguments<'_>) {
        self.write(format_args!("{} {}", self.prefix(logger), args));
    }

    fn print(&self, logger: &Logger, args: &[&dyn Display]) {
        self.write(format_args!("{} {}", self.prefix(logger), join_operands(args, "")));
    }

    fn println(&self, logger: &Logger, args: &[&dyn Display]) {
        let prefix = self.prefix(logger);
        if args.is_empty() {
            self.write(format_args!("{}\n", prefix));
        } else {
            self.write(format_args!("{} {}\n", prefix, join_operands(args, " ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logger_with, CaptureBuffer};

    #[test]
    fn test_stream_backend_printf() {
        let buffer = CaptureBuffer::new();
        let backend = StreamBackend::with_writer(buffer.clone()).without_color();
        let logger = logger_with("net/http", backend);

        logger.printf(format_args!("status {}\n", 200));
        assert_eq!(buffer.contents(), "net/http status 200\n");
    }

    #[test]
    fn test_stream_backend_print() {
        let buffer = CaptureBuffer::new();
        let backend = StreamBackend::with_writer(buffer.clone()).without_color();
        let logger = logger_with("db", backend);

        logger.print(&[&"rows=", &3]);
        assert_eq!(buffer.contents(), "db rows=3");
    }

    #[test]
    fn test_stream_backend_println() {
        let buffer = CaptureBuffer::new();
        let backend = StreamBackend::with_writer(buffer.clone()).without_color();
        let logger = logger_with("db", backend);

        logger.println(&[&"open", &"pool", &4]);
        logger.println(&[]);
        assert_eq!(buffer.contents(), "db open pool 4\ndb\n");
    }

    #[test]
    fn test_stream_backend_colored_keeps_name() {
        let buffer = CaptureBuffer::new();
        let backend = StreamBackend::with_writer(buffer.clone());
        assert!(backend.is_colored());

        let logger = logger_with("cache", backend);
        logger.println(&[&"hit"]);

        let out = buffer.contents();
        assert!(out.contains("cache"));
        assert!(out.ends_with(" hit\n"));
    }
}
