//! Spec source trait

use std::sync::Arc;

/// Supplies the raw enablement spec
///
/// `Verbose` asks its source exactly once, when the runtime context is
/// derived. Later changes to the source are not observed.
pub trait SpecSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// The current enablement spec, empty when nothing is configured
    fn read(&self) -> String;
}

/// Type alias for an Arc-wrapped source
pub type SharedSpecSource = Arc<dyn SpecSource>;
