//! Runtime context derived once per `Verbose` instance

use super::path::PathResolver;
use crate::pattern::PatternSet;

/// Everything derived from the entry path and the enablement spec
///
/// Immutable once built. `Verbose` builds exactly one per instance, on first
/// use, and hands out shared references afterwards.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    resolver: PathResolver,
    spec: String,
    patterns: PatternSet,
}

impl RuntimeContext {
    /// Derive the context from an entry path and a raw enablement spec
    pub fn new(entry_path: impl Into<String>, spec: impl Into<String>) -> Self {
        let resolver = PathResolver::new(entry_path);
        let spec = spec.into();
        let patterns = PatternSet::compile(&spec);

        log::debug!(
            "verbose runtime initialized: entry={:?} root={:?} windows={} patterns={}",
            resolver.entry_path(),
            resolver.root_directory(),
            resolver.is_windows(),
            patterns.len()
        );

        Self {
            resolver,
            spec,
            patterns,
        }
    }

    /// The entry path the root directory was derived from
    pub fn entry_path(&self) -> &str {
        self.resolver.entry_path()
    }

    /// Whether paths are split on `\`
    pub fn is_windows(&self) -> bool {
        self.resolver.is_windows()
    }

    /// Everything before the first `src` segment of the entry path
    pub fn root_directory(&self) -> &str {
        self.resolver.root_directory()
    }

    /// The raw enablement spec, as read at initialization
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The compiled enablement patterns
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Check if a logger with this name should produce output
    pub fn is_enabled(&self, name: &str) -> bool {
        self.patterns.is_enabled(name)
    }

    /// Resolve a source file path to a module name
    pub fn resolve_module_name(&self, path: &str) -> String {
        self.resolver.resolve_module_name(path)
    }
}
