//! No-op backend implementation

use std::fmt::{self, Display};

use super::traits::Backend;
use crate::logger::Logger;

/// A backend that does nothing
///
/// Useful for silencing every logger of an instance without touching the
/// enablement spec.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl NoopBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for NoopBackend {
    fn printf(&self, _logger: &Logger, _args: fmt::Arguments<'_>) {}
    fn print(&self, _logger: &Logger, _args: &[&dyn Display]) {}
    fn println(&self, _logger: &Logger, _args: &[&dyn Display]) {}
}
