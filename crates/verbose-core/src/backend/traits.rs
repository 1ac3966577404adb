//! Backend trait definition

use std::fmt::{self, Display};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logger::Logger;

/// Renders log calls of enabled loggers
///
/// Loggers only reach their backend when enabled, so implementations never
/// need to check `Logger::is_enabled`.
///
/// Implementations:
/// - `StreamBackend`: writes to stderr, stdout or a custom writer
/// - `LogBackend`: forwards to the `log` facade
/// - `NoopBackend`: silent backend for testing
pub trait Backend: Send + Sync {
    /// Write a message built from format arguments
    fn printf(&self, logger: &Logger, args: fmt::Arguments<'_>);

    /// Write operands back to back
    fn print(&self, logger: &Logger, args: &[&dyn Display]);

    /// Write operands separated by spaces, then end the line
    fn println(&self, logger: &Logger, args: &[&dyn Display]);
}

/// Type alias for an Arc-wrapped backend
pub type SharedBackend = Arc<dyn Backend>;

/// The swappable backend slot shared by a `Verbose` instance and its loggers
pub type BackendHandle = Arc<RwLock<SharedBackend>>;
