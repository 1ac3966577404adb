//! Where the enablement spec comes from
//!
//! - `EnvSpecSource`: reads `VERBOSE` (or another variable) from the environment
//! - `StaticSpecSource`: a fixed spec, for tests and embedding

mod traits;
mod env;
mod static_source;

pub use traits::{SharedSpecSource, SpecSource};
pub use env::{EnvSpecSource, DEFAULT_ENV_VAR};
pub use static_source::StaticSpecSource;
