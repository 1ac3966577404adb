//! Pattern compilation and matching

use regex::Regex;

use crate::error::{VerboseError, VerboseResult};

/// Escaped form of the wildcard once it went through `regex::escape`
const ESCAPED_WILDCARD: &str = r"\*";

/// What the wildcard stands for
const WILDCARD_EXPANSION: &str = ".+";

/// A single enablement token compiled to an unanchored regular expression
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile one token of the enablement spec
    ///
    /// Every regex metacharacter is taken literally except `*`.
    pub fn compile(token: &str) -> VerboseResult<Self> {
        let source = regex::escape(token).replace(ESCAPED_WILDCARD, WILDCARD_EXPANSION);
        let regex = Regex::new(&source).map_err(|e| VerboseError::invalid_pattern(token, e))?;
        Ok(Self { regex })
    }

    /// The regular expression source this token compiled to
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Check if any substring of `name` matches
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The compiled form of a whole enablement spec
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile a comma separated enablement spec
    ///
    /// Empty tokens are dropped. A token the regex engine rejects is logged
    /// and skipped, the remaining tokens still apply.
    pub fn compile(spec: &str) -> Self {
        let patterns = spec
            .split(',')
            .filter(|token| !token.is_empty())
            .filter_map(|token| match CompiledPattern::compile(token) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("skipping enablement pattern: {}", e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    /// Check if `name` is matched by at least one pattern
    pub fn is_enabled(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the set enables nothing
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the compiled patterns in spec order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}
