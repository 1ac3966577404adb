//! Process-wide default instance
//!
//! Most programs only need one `Verbose`. These functions use a shared
//! instance that reads `VERBOSE` and writes to stderr until told otherwise.

use once_cell::sync::Lazy;

use crate::backend::{Backend, SharedBackend};
use crate::logger::Logger;
use crate::runtime::RuntimeContext;
use crate::verbose::Verbose;

static GLOBAL: Lazy<Verbose> = Lazy::new(Verbose::new);

/// The process-wide instance
pub fn global() -> &'static Verbose {
    &GLOBAL
}

/// Derive the process-wide runtime context from `entry_path`
///
/// Only the first initialization counts, see `Verbose::init`.
pub fn init(entry_path: &str) -> &'static RuntimeContext {
    GLOBAL.init(entry_path)
}

/// The process-wide runtime context, derived now if needed
#[track_caller]
pub fn runtime() -> &'static RuntimeContext {
    GLOBAL.runtime()
}

/// A logger named after the caller's source file
///
/// ```no_run
/// let logger = verbose_core::auto();
/// logger.println(&[&"starting"]);
/// ```
#[track_caller]
pub fn auto() -> Logger {
    GLOBAL.auto()
}

/// A logger named after a source file path
#[track_caller]
pub fn from_file(path: &str) -> Logger {
    GLOBAL.from_file(path)
}

/// A logger with an explicit name
#[track_caller]
pub fn from(name: &str) -> Logger {
    GLOBAL.from(name)
}

/// Route every logger of the process-wide instance through `backend`
pub fn set_backend(backend: impl Backend + 'static) {
    GLOBAL.set_backend(backend);
}

/// The backend the process-wide loggers currently write through
pub fn backend() -> SharedBackend {
    GLOBAL.backend()
}

/// A logger named after the enclosing module
///
/// `auto!()` uses the process-wide instance, `auto!(verbose)` a given one.
/// `::` separators become `/`, so `my_app::net` is named `my_app/net`.
///
/// ```
/// use verbose_core::{auto, StaticSpecSource, Verbose};
///
/// let verbose = Verbose::new().with_source(StaticSpecSource::new("*"));
/// let logger = auto!(verbose);
/// assert_eq!(logger.name(), module_path!().replace("::", "/"));
/// ```
#[macro_export]
macro_rules! auto {
    () => {
        $crate::from(&$crate::module_name(module_path!()))
    };
    ($verbose:expr) => {
        $verbose.from(&$crate::module_name(module_path!()))
    };
}
