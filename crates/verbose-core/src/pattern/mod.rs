//! Enablement patterns
//!
//! The enablement spec is a comma separated list of names where `*` stands
//! for "one or more characters":
//! - `*` enables every logger
//! - `net/*,db` enables names containing `db`, or `net/` followed by more text
//! - an empty spec enables nothing

mod matcher;

pub use matcher::{CompiledPattern, PatternSet};
