//! Context types for rule execution.

/// Context provided to rules for the file being checked.
///
/// The path is kept as a raw string because some hosts report it with
/// Windows-style `\` separators regardless of the platform the checker
/// runs on. All extraction helpers normalize to `/` first so directory
/// checks behave identically on every OS.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file as reported by the host.
    pub path: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    /// Path with all `\` separators replaced by `/`.
    #[must_use]
    pub fn normalized_path(&self) -> String {
        self.path.replace('\\', "/")
    }

    /// Basename of the file (final path segment).
    #[must_use]
    pub fn file_name(&self) -> String {
        let normalized = self.normalized_path();
        normalized
            .rsplit('/')
            .next()
            .unwrap_or(normalized.as_str())
            .to_string()
    }

    /// Basename of the immediate parent directory, empty when the path
    /// has no directory component.
    #[must_use]
    pub fn parent_directory_name(&self) -> String {
        let normalized = self.normalized_path();
        let mut segments: Vec<&str> = normalized.split('/').collect();
        segments.pop(); // drop the file name
        segments.pop().unwrap_or("").to_string()
    }
}
