use crate::error::DiscoveryError;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Walks a docs root and collects the markdown files to chunk.
pub struct MarkdownWalker {
    root: PathBuf,
    max_file_size: usize,
    exclude_patterns: Vec<String>,
}

impl MarkdownWalker {
    pub fn new(root: impl AsRef<Path>, max_file_size: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_file_size,
            exclude_patterns: vec![],
        }
    }

    pub fn with_excludes(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    /// Walk the docs root and collect all eligible markdown files, sorted
    /// so chunk identifiers are stable from run to run.
    pub fn walk(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !self.root.exists() {
            return Err(DiscoveryError::RootNotFound(
                self.root.display().to_string(),
            ));
        }
        if !self.root.is_dir() {
            return Err(DiscoveryError::NotADirectory(
                self.root.display().to_string(),
            ));
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(true) // Respect .gitignore, .ignore, etc.
            .hidden(false)
            .require_git(false)
            .build();

        let mut files = Vec::new();

        for entry in walker {
            let entry = entry.map_err(|e| DiscoveryError::WalkFailed(e.to_string()))?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if path.components().any(|c| c.as_os_str() == ".git") {
                continue;
            }

            if !is_markdown(path) {
                continue;
            }

            if !self.matches_patterns(path) {
                continue;
            }

            if let Ok(metadata) = fs::metadata(path)
                && metadata.len() > self.max_file_size as u64
            {
                tracing::debug!("Skipping large file: {:?}", path);
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        tracing::info!(
            "Found {} markdown files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    /// Check that the file does not match any exclude pattern
    fn matches_patterns(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        !self
            .exclude_patterns
            .iter()
            .any(|pattern| path_str.contains(pattern))
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collects_only_markdown() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.md", "# A");
        write_file(dir.path(), "b.txt", "not markdown");
        write_file(dir.path(), "sub/c.md", "# C");

        let files = MarkdownWalker::new(dir.path(), 1_048_576).walk().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "c.md"]);
    }

    #[test]
    fn test_results_are_sorted() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "z.md", "z");
        write_file(dir.path(), "a.md", "a");
        write_file(dir.path(), "m.md", "m");

        let files = MarkdownWalker::new(dir.path(), 1_048_576).walk().unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_missing_root_errors() {
        let result = MarkdownWalker::new("/nonexistent/docs", 1_048_576).walk();
        assert!(matches!(result, Err(DiscoveryError::RootNotFound(_))));
    }

    #[test]
    fn test_root_that_is_a_file_errors() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.md", "# A");
        let result = MarkdownWalker::new(dir.path().join("a.md"), 1_048_576).walk();
        assert!(matches!(result, Err(DiscoveryError::NotADirectory(_))));
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "keep.md", "keep");
        write_file(dir.path(), "drafts/skip.md", "skip");

        let files = MarkdownWalker::new(dir.path(), 1_048_576)
            .with_excludes(vec!["drafts".to_string()])
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.md"));
    }

    #[test]
    fn test_oversized_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "small.md", "tiny");
        write_file(dir.path(), "big.md", &"x".repeat(2048));

        let files = MarkdownWalker::new(dir.path(), 1024).walk().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("small.md"));
    }

    #[test]
    fn test_uppercase_extension_is_accepted() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "README.MD", "# readme");

        let files = MarkdownWalker::new(dir.path(), 1_048_576).walk().unwrap();
        assert_eq!(files.len(), 1);
    }
}
