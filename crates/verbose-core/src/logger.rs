//! Named, enable-flagged logger handles

use std::fmt::{self, Display};

use colored::{Color, ColoredString, Colorize};

use crate::backend::{BackendHandle, SharedBackend};

/// A logger for one module
///
/// Whether it produces output is decided once, when it is acquired. Disabled
/// loggers never reach their backend. Enabled ones write through the backend
/// their `Verbose` instance holds at call time, so a backend swap applies to
/// loggers acquired before it.
#[derive(Clone)]
pub struct Logger {
    name: String,
    enabled: bool,
    color: Color,
    backend: BackendHandle,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("color", &self.color)
            .finish()
    }
}

impl Logger {
    pub(crate) fn new(
        name: impl Into<String>,
        enabled: bool,
        color: Color,
        backend: BackendHandle,
    ) -> Self {
        Self {
            name: name.into(),
            enabled,
            color,
            backend,
        }
    }

    /// The module name this logger was acquired for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether output calls reach the backend
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Color assigned at acquisition
    pub fn color(&self) -> Color {
        self.color
    }

    /// Paint `text` with this logger's color
    pub fn colorize(&self, text: &str) -> ColoredString {
        text.color(self.color)
    }

    fn current_backend(&self) -> SharedBackend {
        // clone out so a backend may swap backends without deadlocking
        self.backend.read().clone()
    }

    /// Write a formatted message, see `vprintf!`
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            self.current_backend().printf(self, args);
        }
    }

    /// Write operands back to back, see `vprint!`
    pub fn print(&self, args: &[&dyn Display]) {
        if self.enabled {
            self.current_backend().print(self, args);
        }
    }

    /// Write operands separated by spaces and end the line, see `vprintln!`
    pub fn println(&self, args: &[&dyn Display]) {
        if self.enabled {
            self.current_backend().println(self, args);
        }
    }
}

/// Write a formatted message through a logger
///
/// Arguments are not evaluated when the logger is disabled.
///
/// ```
/// use verbose_core::{vprintf, StaticSpecSource, Verbose};
///
/// let verbose = Verbose::new().with_source(StaticSpecSource::new(""));
/// let logger = verbose.from("db");
/// vprintf!(logger, "opened {} connections\n", 4);
/// ```
#[macro_export]
macro_rules! vprintf {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.printf(format_args!($($arg)*));
        }
    }};
}

/// Write operands back to back through a logger
#[macro_export]
macro_rules! vprint {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.print(&[$(&$arg as &dyn ::std::fmt::Display),*]);
        }
    }};
}

/// Write space separated operands and end the line through a logger
#[macro_export]
macro_rules! vprintln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.println(&[$(&$arg as &dyn ::std::fmt::Display),*]);
        }
    }};
}
