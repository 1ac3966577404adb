//! `log` facade backend implementation

use std::fmt::{self, Display};

use log::Level;

use super::join_operands;
use super::traits::Backend;
use crate::logger::Logger;

/// Target of every record emitted by `LogBackend`
pub const LOG_TARGET: &str = "verbose";

/// A backend that forwards `<name>: <message>` records to the `log` facade
///
/// Whatever logger implementation the application installed (env_logger,
/// a tracing bridge, ...) decides on timestamps and the final layout.
/// Records use the `verbose` target, so `RUST_LOG=verbose=info` shows them
/// with env_logger.
#[derive(Debug, Clone, Copy)]
pub struct LogBackend {
    level: Level,
}

impl Default for LogBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBackend {
    /// Emit records at `Info` level
    pub fn new() -> Self {
        Self::with_level(Level::Info)
    }

    /// Emit records at a custom level
    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Backend for LogBackend {
    fn printf(&self, logger: &Logger, args: fmt::Arguments<'_>) {
        log::log!(target: LOG_TARGET, self.level, "{}: {}", logger.name(), args);
    }

    fn print(&self, logger: &Logger, args: &[&dyn Display]) {
        log::log!(target: LOG_TARGET, self.level, "{}: {}", logger.name(), join_operands(args, ""));
    }

    fn println(&self, logger: &Logger, args: &[&dyn Display]) {
        log::log!(target: LOG_TARGET, self.level, "{}: {}", logger.name(), join_operands(args, " "));
    }
}
