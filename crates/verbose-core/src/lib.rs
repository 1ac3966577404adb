//! Verbose Core
//!
//! Debug messages per module, switched on by the `VERBOSE` environment
//! variable. `VERBOSE` holds comma separated names where `*` matches one or
//! more characters; a logger produces output when its name contains a match.
//!
//! ```text
//! VERBOSE='*'              every logger
//! VERBOSE='my_app/net*,db' anything under my_app/net, and db
//! VERBOSE=                 nothing (same as unset)
//! ```
//!
//! Loggers are acquired by name, after the enclosing module, or after the
//! caller's source file:
//!
//! ```rust,no_run
//! use verbose_core::{auto, vprintf, vprintln, LogBackend};
//!
//! let by_module = auto!();
//! let by_file = verbose_core::auto();
//! let by_name = verbose_core::from("db/pool");
//!
//! verbose_core::set_backend(LogBackend::new());
//! vprintf!(by_name, "opened {} connections", 4);
//! vprintln!(by_module, "ready");
//! vprintln!(by_file, "ready");
//! ```
//!
//! Everything above goes through a process-wide `Verbose` instance. Programs
//! that prefer explicit wiring build their own with `Verbose::new()` and
//! acquire loggers from it.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod logger;
pub mod pattern;
pub mod runtime;
mod global;
mod verbose;

#[cfg(test)]
mod test_support;

pub use backend::{Backend, LogBackend, NoopBackend, SharedBackend, StreamBackend};
pub use color::Palette;
pub use config::{EnvSpecSource, SpecSource, StaticSpecSource};
pub use error::{VerboseError, VerboseResult};
pub use logger::Logger;
pub use pattern::{CompiledPattern, PatternSet};
pub use runtime::{PathResolver, RuntimeContext};
pub use verbose::{module_name, Verbose};

pub use global::{
    auto, backend as current_backend, from, from_file, global, init,
    runtime as current_runtime, set_backend,
};
