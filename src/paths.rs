/// Path normalization and platform locations
///
/// Chunk identifiers embed their source path, so paths are flattened to a
/// forward-slash form that is stable across platforms before use.
use std::path::{Path, PathBuf};

/// Normalizes a path to forward-slash form: backslashes become `/`,
/// `.` segments are dropped, and `..` segments collapse lexically.
///
/// The result is what gets stored in chunk ids and record metadata, so a
/// corpus indexed on Windows and one indexed on Linux produce the same
/// identifiers.
pub fn normalize_path(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let absolute = raw.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Platform-specific file locations
pub struct PlatformPaths;

impl PlatformPaths {
    /// Get the appropriate config directory for the current platform
    ///
    /// - Windows: %APPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else if cfg!(target_os = "macos") {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
                .unwrap_or_else(|_| PathBuf::from("."))
        } else {
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
                })
                .unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Get default config file path
    ///
    /// Returns: {config_dir}/markdown-rag/config.toml
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("markdown-rag").join("config.toml")
    }
}
