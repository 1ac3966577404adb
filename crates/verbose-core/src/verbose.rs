//! The `Verbose` instance: runtime context, palette and backend in one place

use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::backend::{Backend, BackendHandle, SharedBackend, StreamBackend};
use crate::color::Palette;
use crate::config::{EnvSpecSource, SharedSpecSource, SpecSource};
use crate::error::{VerboseError, VerboseResult};
use crate::logger::Logger;
use crate::runtime::RuntimeContext;

/// Hands out loggers
///
/// The runtime context is derived on first use, exactly once, even when
/// several threads acquire loggers at the same time. The enablement spec is
/// read at that moment and never again. Unless an entry path was configured,
/// the directory of the first acquisition's source file becomes the entry
/// path.
///
/// # Example
///
/// ```
/// use verbose_core::{NoopBackend, StaticSpecSource, Verbose};
///
/// let verbose = Verbose::new()
///     .with_source(StaticSpecSource::new("mymod*"))
///     .with_backend(NoopBackend::new());
///
/// assert!(verbose.from("mymodule/sub").is_enabled());
/// assert!(!verbose.from("other").is_enabled());
/// ```
pub struct Verbose {
    source: SharedSpecSource,
    entry_path: Option<String>,
    runtime: OnceCell<RuntimeContext>,
    palette: Palette,
    backend: BackendHandle,
}

impl std::fmt::Debug for Verbose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verbose")
            .field("source", &self.source.name())
            .field("entry_path", &self.entry_path)
            .field("runtime", &self.runtime.get())
            .field("palette", &self.palette)
            .finish()
    }
}

impl Default for Verbose {
    fn default() -> Self {
        Self::new()
    }
}

impl Verbose {
    /// Read `VERBOSE`, rotate the default palette, write to stderr
    pub fn new() -> Self {
        let backend: SharedBackend = Arc::new(StreamBackend::stderr());
        Self {
            source: Arc::new(EnvSpecSource::new()),
            entry_path: None,
            runtime: OnceCell::new(),
            palette: Palette::new(),
            backend: Arc::new(RwLock::new(backend)),
        }
    }

    /// Take the enablement spec from another source
    pub fn with_source(mut self, source: impl SpecSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Use a custom palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Start with another backend
    pub fn with_backend(self, backend: impl Backend + 'static) -> Self {
        self.set_backend(backend);
        self
    }

    /// Derive the root directory from this path instead of the first caller
    pub fn with_entry_path(mut self, entry_path: impl Into<String>) -> Self {
        self.entry_path = Some(entry_path.into());
        self
    }

    /// Derive the runtime context from `entry_path`
    ///
    /// Idempotent: once the context exists, later calls return it unchanged
    /// whatever path they pass.
    pub fn init(&self, entry_path: &str) -> &RuntimeContext {
        self.runtime
            .get_or_init(|| RuntimeContext::new(entry_path, self.source.read()))
    }

    /// Like `init`, but fails when the context came from another entry path
    pub fn try_init(&self, entry_path: &str) -> VerboseResult<&RuntimeContext> {
        let runtime = self.init(entry_path);
        if runtime.entry_path() == entry_path {
            Ok(runtime)
        } else {
            Err(VerboseError::already_initialized(
                runtime.entry_path(),
                entry_path,
            ))
        }
    }

    /// The runtime context, derived now if needed
    #[track_caller]
    pub fn runtime(&self) -> &RuntimeContext {
        let caller = Location::caller();
        self.runtime.get_or_init(|| {
            let entry_path = self
                .entry_path
                .clone()
                .unwrap_or_else(|| caller_directory(caller.file()));
            RuntimeContext::new(entry_path, self.source.read())
        })
    }

    /// Check if the runtime context was derived already
    pub fn is_initialized(&self) -> bool {
        self.runtime.get().is_some()
    }

    /// A logger named after the caller's source file
    #[track_caller]
    pub fn auto(&self) -> Logger {
        self.from_file(Location::caller().file())
    }

    /// A logger named after a source file path
    #[track_caller]
    pub fn from_file(&self, path: &str) -> Logger {
        let name = self.runtime().resolve_module_name(path);
        self.from(&name)
    }

    /// A logger with an explicit name
    #[track_caller]
    pub fn from(&self, name: &str) -> Logger {
        let enabled = self.runtime().is_enabled(name);
        Logger::new(name, enabled, self.palette.pick(), Arc::clone(&self.backend))
    }

    /// Route every logger of this instance through `backend`
    pub fn set_backend(&self, backend: impl Backend + 'static) {
        self.set_shared_backend(Arc::new(backend));
    }

    /// Like `set_backend`, for a backend that is already shared
    pub fn set_shared_backend(&self, backend: SharedBackend) {
        *self.backend.write() = backend;
    }

    /// The backend loggers currently write through
    pub fn backend(&self) -> SharedBackend {
        self.backend.read().clone()
    }
}

/// Directory of a caller's source file
fn caller_directory(file: &str) -> String {
    Path::new(file)
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Render a `module_path!()` the way path-derived names look
///
/// ```
/// assert_eq!(verbose_core::module_name("my_app::net::http"), "my_app/net/http");
/// ```
pub fn module_name(module_path: &str) -> String {
    module_path.replace("::", "/")
}
