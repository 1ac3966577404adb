//! Runtime context: root directory, module names and enablement
//!
//! - `PathResolver`: turns source file paths into module names
//! - `RuntimeContext`: a resolver plus the compiled enablement spec

mod context;
mod path;

pub use context::RuntimeContext;
pub use path::{PathResolver, SOURCES_MARKER, VENDOR_MARKER};
