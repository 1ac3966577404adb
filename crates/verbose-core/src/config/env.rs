//! Environment variable spec source

use std::env;

use super::traits::SpecSource;

/// Variable read by default
pub const DEFAULT_ENV_VAR: &str = "VERBOSE";

/// Spec source that reads an environment variable
///
/// An unset variable, or one that is not valid unicode, reads as the empty
/// spec and disables every logger.
///
/// # Example
///
/// ```
/// use verbose_core::config::{EnvSpecSource, SpecSource};
///
/// let source = EnvSpecSource::new();
/// assert_eq!(source.var(), "VERBOSE");
///
/// let custom = EnvSpecSource::with_var("MYAPP_VERBOSE");
/// assert_eq!(custom.var(), "MYAPP_VERBOSE");
/// ```
#[derive(Debug, Clone)]
pub struct EnvSpecSource {
    var: String,
}

impl Default for EnvSpecSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSpecSource {
    /// Read the `VERBOSE` variable
    pub fn new() -> Self {
        Self::with_var(DEFAULT_ENV_VAR)
    }

    /// Read a custom variable
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl SpecSource for EnvSpecSource {
    fn name(&self) -> &str {
        "env"
    }

    fn read(&self) -> String {
        env::var(&self.var).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_default_var() {
        let source = EnvSpecSource::default();
        assert_eq!(source.var(), DEFAULT_ENV_VAR);
        assert_eq!(source.name(), "env");
    }

    #[test]
    fn test_env_source_read() {
        env::set_var("VERBOSE_TEST_ENV_SOURCE_READ", "a,b");

        let source = EnvSpecSource::with_var("VERBOSE_TEST_ENV_SOURCE_READ");
        assert_eq!(source.read(), "a,b");

        env::remove_var("VERBOSE_TEST_ENV_SOURCE_READ");
    }

    #[test]
    fn test_env_source_unset() {
        let source = EnvSpecSource::with_var("VERBOSE_TEST_ENV_SOURCE_UNSET_XYZ");
        assert_eq!(source.read(), "");
    }
}
