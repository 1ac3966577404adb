//! Module names derived from source file paths
//!
//! A project keeps its code under a `src` directory. The part of the entry
//! path before the first `src` segment is the root directory, and a module
//! name is the directory of a source file relative to `<root>/src/`.
//! Code copied under a `vendor` directory is named after what follows the
//! last `vendor` segment instead.

/// Segment marking the start of a project's sources
pub const SOURCES_MARKER: &str = "src";

/// Segment marking vendored dependencies
pub const VENDOR_MARKER: &str = "vendor";

/// Resolves source file paths to module names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    entry_path: String,
    is_windows: bool,
    root_directory: String,
    /// `<root>/src/`, absent when the entry path has no `src` segment
    sources_prefix: Option<String>,
}

impl PathResolver {
    /// Derive the root directory from an entry path
    pub fn new(entry_path: impl Into<String>) -> Self {
        let entry_path = entry_path.into();
        let is_windows = entry_path.contains('\\');
        let separator = if is_windows { "\\" } else { "/" };

        let segments: Vec<&str> = entry_path.split(separator).collect();
        let marker = segments.iter().position(|s| *s == SOURCES_MARKER);

        let (root_directory, sources_prefix) = match marker {
            Some(index) => {
                let root = segments[..index].join(separator);
                let prefix = segments[..=index].join(separator) + separator;
                (root, Some(prefix))
            }
            None => (String::new(), None),
        };

        Self {
            entry_path,
            is_windows,
            root_directory,
            sources_prefix,
        }
    }

    /// The path this resolver was derived from
    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }

    /// Whether the entry path uses `\` separators
    pub fn is_windows(&self) -> bool {
        self.is_windows
    }

    /// Everything before the first `src` segment of the entry path
    pub fn root_directory(&self) -> &str {
        &self.root_directory
    }

    /// The separator all path splitting uses
    pub fn separator(&self) -> char {
        if self.is_windows {
            '\\'
        } else {
            '/'
        }
    }

    /// Resolve a source file path to a module name
    ///
    /// ```
    /// use verbose_core::runtime::PathResolver;
    ///
    /// let resolver = PathResolver::new("/what/ever/src");
    /// assert_eq!(resolver.resolve_module_name("/what/ever/src/package/some/main.go"), "package/some");
    /// assert_eq!(resolver.resolve_module_name("/what/ever/src/package/vendor/some/lib.go"), "some");
    /// ```
    pub fn resolve_module_name(&self, path: &str) -> String {
        if self.is_vendored(path) {
            self.path_from_vendor(path)
        } else {
            self.path_from_root(path)
        }
    }

    /// Check if any segment of `path` is `vendor`
    pub fn is_vendored(&self, path: &str) -> bool {
        path.split(self.separator()).any(|s| s == VENDOR_MARKER)
    }

    /// Directory of whatever follows the last `vendor` segment
    pub fn path_from_vendor(&self, path: &str) -> String {
        let separator = self.separator();
        let joiner = separator.to_string();
        let segments: Vec<&str> = path.split(separator).collect();

        let rest = match segments.iter().rposition(|s| *s == VENDOR_MARKER) {
            Some(index) => segments[index + 1..].join(joiner.as_str()),
            None => path.to_string(),
        };

        directory(&rest, separator)
    }

    /// Directory of `path` relative to `<root>/src/`
    ///
    /// A file directly under `<root>/src/` is named after the last segment of
    /// the root directory, `.` when the root is empty. A path outside the
    /// sources root keeps its full directory. Directories always split on `/`
    /// here, Windows entry paths included.
    pub fn path_from_root(&self, path: &str) -> String {
        let stripped = self
            .sources_prefix
            .as_deref()
            .and_then(|prefix| path.strip_prefix(prefix));

        let separator = self.separator();
        match stripped {
            Some(relative) if !relative.contains(|c| c == '/' || c == separator) => {
                self.root_name().unwrap_or(".").to_string()
            }
            Some(relative) => directory(relative, '/'),
            None => directory(path, '/'),
        }
    }

    /// Last segment of the root directory, the directory holding `src`
    fn root_name(&self) -> Option<&str> {
        self.root_directory
            .rsplit(self.separator())
            .next()
            .filter(|name| !name.is_empty())
    }
}

/// Drop the last component of `path`, `.` when there is no directory part
fn directory(path: &str, separator: char) -> String {
    match path.rfind(separator) {
        Some(0) => separator.to_string(),
        Some(index) => path[..index].to_string(),
        None => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_entry_path() {
        let resolver = PathResolver::new("whatever/src/your/pkg/main.go");
        assert!(!resolver.is_windows());
        assert_eq!(resolver.root_directory(), "whatever");
        assert_eq!(resolver.entry_path(), "whatever/src/your/pkg/main.go");
    }

    #[test]
    fn test_windows_detection() {
        let path = "c:\\whatever\\src\\your\\pkg\\main.go";
        let resolver = PathResolver::new(path);
        assert!(resolver.is_windows());
        assert_eq!(resolver.separator(), '\\');
        assert_eq!(resolver.root_directory(), "c:\\whatever");
        assert_eq!(resolver.entry_path(), path);
    }

    #[test]
    fn test_first_src_segment_wins() {
        let resolver = PathResolver::new("/home/me/src/project/src/bin");
        assert_eq!(resolver.root_directory(), "/home/me");
    }

    #[test]
    fn test_missing_marker_gives_empty_root() {
        let resolver = PathResolver::new("/opt/app/bin");
        assert_eq!(resolver.root_directory(), "");
    }

    #[test]
    fn test_is_vendored() {
        let resolver = PathResolver::new("/what/ever/src");
        assert!(!resolver.is_vendored("/what/ever/src/package/main.go"));
        assert!(resolver.is_vendored("/what/ever/src/package/vendor/some/lib.go"));
        // only whole segments count
        assert!(!resolver.is_vendored("/what/ever/src/vendors/some/lib.go"));
    }

    #[test]
    fn test_path_from_vendor() {
        let resolver = PathResolver::new("/what/ever/src");
        assert_eq!(
            resolver.path_from_vendor("/what/ever/src/package/vendor/some/lib.go"),
            "some"
        );
    }

    #[test]
    fn test_path_from_vendor_uses_last_segment() {
        let resolver = PathResolver::new("/what/ever/src");
        assert_eq!(
            resolver.path_from_vendor("/src/a/vendor/b/vendor/c/d/lib.go"),
            "c/d"
        );
    }

    #[test]
    fn test_path_from_vendor_windows() {
        let resolver = PathResolver::new("c:\\what\\src");
        assert_eq!(
            resolver.resolve_module_name("c:\\what\\src\\pkg\\vendor\\some\\sub\\lib.go"),
            "some\\sub"
        );
    }

    #[test]
    fn test_path_from_root() {
        let resolver = PathResolver::new("/what/ever/src");
        assert_eq!(
            resolver.path_from_root("/what/ever/src/package/some/main.go"),
            "package/some"
        );
    }

    #[test]
    fn test_path_from_root_relative_sources() {
        let resolver = PathResolver::new("src");
        assert_eq!(resolver.root_directory(), "");
        assert_eq!(resolver.resolve_module_name("src/net/server.rs"), "net");
        assert_eq!(resolver.resolve_module_name("src/main.rs"), ".");
    }

    #[test]
    fn test_sources_root_file_named_after_root() {
        let resolver = PathResolver::new("crates/verbose-core/src");
        assert_eq!(resolver.resolve_module_name("crates/verbose-core/src/lib.rs"), "verbose-core");
        assert_eq!(resolver.resolve_module_name("crates/verbose-core/src/net/mod.rs"), "net");

        let absolute = PathResolver::new("/what/ever/src");
        assert_eq!(absolute.resolve_module_name("/what/ever/src/main.go"), "ever");
    }

    #[test]
    fn test_path_outside_root_keeps_directory() {
        let resolver = PathResolver::new("crates/app/src");
        assert_eq!(
            resolver.resolve_module_name("crates/lib/src/lib.rs"),
            "crates/lib/src"
        );

        let unrooted = PathResolver::new("/opt/app/bin");
        assert_eq!(unrooted.resolve_module_name("/opt/app/bin/main.rs"), "/opt/app/bin");
    }

    #[test]
    fn test_windows_root_path_splits_on_slash() {
        let resolver = PathResolver::new("c:\\what\\src\\main.go");
        assert_eq!(resolver.resolve_module_name("c:\\what\\src\\pkg\\main.go"), ".");
        assert_eq!(resolver.resolve_module_name("c:\\what\\src\\pkg/sub/main.go"), "pkg/sub");
    }

    #[test]
    fn test_directory() {
        assert_eq!(directory("a/b/c.rs", '/'), "a/b");
        assert_eq!(directory("c.rs", '/'), ".");
        assert_eq!(directory("/c.rs", '/'), "/");
    }
}
