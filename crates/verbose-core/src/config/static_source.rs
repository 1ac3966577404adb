//! Fixed spec source

use super::traits::SpecSource;

/// Spec source holding a fixed string
///
/// # Example
///
/// ```
/// use verbose_core::config::{SpecSource, StaticSpecSource};
///
/// let source = StaticSpecSource::new("net/*,db");
/// assert_eq!(source.read(), "net/*,db");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSpecSource {
    spec: String,
}

impl StaticSpecSource {
    pub fn new(spec: impl Into<String>) -> Self {
        Self { spec: spec.into() }
    }
}

impl SpecSource for StaticSpecSource {
    fn name(&self) -> &str {
        "static"
    }

    fn read(&self) -> String {
        self.spec.clone()
    }
}
