/// Configuration system for markdown-rag
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::{ConfigError, RagError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chunking engine configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Document discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Chunk record export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Knowledge-base resources refreshed from upstream repositories
    #[serde(default = "default_resources")]
    pub resources: Vec<ResourceSpec>,
}

/// Chunking engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk body
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Characters of trailing context carried between consecutive chunks;
    /// must stay below max_chunk_size
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

/// Document discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Root directory scanned for markdown documents
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Maximum file size to chunk (in bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,

    /// Path substrings excluded from discovery
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Chunk record export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination for the pre-embedding records JSON
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,
}

/// One upstream repository feeding the local knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Short name used to select the resource from the CLI
    pub name: String,

    /// Git URL cloned (shallow) on every update
    pub url: String,

    /// Directory within the clone that holds the documents
    #[serde(default)]
    pub subdir: String,

    /// Directories removed from the clone before copying
    #[serde(default)]
    pub prune: Vec<String>,

    /// Local directory replaced wholesale by the update
    pub target: PathBuf,
}

// Default value functions
fn default_max_chunk_size() -> usize {
    500
}

fn default_chunk_overlap() -> usize {
    100
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("knowledge_resources")
}

fn default_max_file_size() -> usize {
    1_048_576 // 1 MB
}

fn default_exclude_patterns() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string()]
}

fn default_records_path() -> PathBuf {
    PathBuf::from("pre_embeddings.json")
}

fn default_resources() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec {
            name: "js".to_string(),
            url: "https://github.com/babalae/bettergi-scripts-list.git".to_string(),
            subdir: "repo/js".to_string(),
            prune: Vec::new(),
            target: PathBuf::from("knowledge_resources/js"),
        },
        ResourceSpec {
            name: "official".to_string(),
            url: "https://github.com/huiyadanli/bettergi-docs.git".to_string(),
            subdir: "src".to_string(),
            prune: vec![
                "dev".to_string(),
                ".vuepress".to_string(),
                "assets".to_string(),
            ],
            target: PathBuf::from("knowledge_resources/official"),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunking: ChunkingConfig::default(),
            discovery: DiscoveryConfig::default(),
            export: ExportConfig::default(),
            resources: default_resources(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            max_file_size: default_max_file_size(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, RagError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or create default
    pub fn load_or_default() -> Result<Self, RagError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), RagError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), RagError> {
        if self.chunking.max_chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "chunking.max_chunk_size".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.chunking.chunk_overlap == 0 {
            return Err(ConfigError::InvalidValue {
                key: "chunking.chunk_overlap".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        // An overlap window as large as a whole chunk would carry the entire
        // previous chunk forward on every split.
        if self.chunking.chunk_overlap >= self.chunking.max_chunk_size {
            return Err(ConfigError::InvalidValue {
                key: "chunking.chunk_overlap".to_string(),
                reason: format!(
                    "must be smaller than max_chunk_size ({}), got {}",
                    self.chunking.max_chunk_size, self.chunking.chunk_overlap
                ),
            }
            .into());
        }

        if self.discovery.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "discovery.max_file_size".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        for resource in &self.resources {
            if resource.name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "resources.name".to_string(),
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            if resource.url.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("resources.{}.url", resource.name),
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("MARKDOWN_RAG_DOCS_DIR") {
            self.discovery.docs_dir = PathBuf::from(dir);
        }

        if let Ok(size) = std::env::var("MARKDOWN_RAG_MAX_CHUNK_SIZE")
            && let Ok(size) = size.parse()
        {
            self.chunking.max_chunk_size = size;
        }

        if let Ok(overlap) = std::env::var("MARKDOWN_RAG_CHUNK_OVERLAP")
            && let Ok(overlap) = overlap.parse()
        {
            self.chunking.chunk_overlap = overlap;
        }

        if let Ok(path) = std::env::var("MARKDOWN_RAG_RECORDS_PATH") {
            self.export.records_path = PathBuf::from(path);
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, RagError> {
        let mut config = Self::load_or_default()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chunking.max_chunk_size, 500);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.discovery.docs_dir, PathBuf::from("knowledge_resources"));
        assert_eq!(config.resources.len(), 2);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_chunk_size() {
        let mut config = Config::default();
        config.chunking.max_chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_overlap_must_be_below_chunk_size() {
        let mut config = Config::default();
        config.chunking.max_chunk_size = 100;
        config.chunking.chunk_overlap = 100;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            RagError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_resource_without_url() {
        let mut config = Config::default();
        config.resources[0].url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut config = Config::default();
        config.chunking.max_chunk_size = 800;
        config.chunking.chunk_overlap = 120;

        config.save(path).unwrap();
        let loaded = Config::from_file(path).unwrap();

        assert_eq!(loaded.chunking.max_chunk_size, 800);
        assert_eq!(loaded.chunking.chunk_overlap, 120);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(
            result.unwrap_err(),
            RagError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = "[chunking]\nmax_chunk_size = 900\n";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chunking.max_chunk_size, 900);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.export.records_path, PathBuf::from("pre_embeddings.json"));
        assert_eq!(config.resources.len(), 2);
    }

    #[test]
    fn test_apply_env_overrides() {
        // Safety: This test is single-threaded and we clean up after ourselves
        unsafe {
            std::env::set_var("MARKDOWN_RAG_DOCS_DIR", "/srv/docs");
            std::env::set_var("MARKDOWN_RAG_MAX_CHUNK_SIZE", "750");
            std::env::set_var("MARKDOWN_RAG_CHUNK_OVERLAP", "60");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.discovery.docs_dir, PathBuf::from("/srv/docs"));
        assert_eq!(config.chunking.max_chunk_size, 750);
        assert_eq!(config.chunking.chunk_overlap, 60);

        // Safety: cleaning up test state
        unsafe {
            std::env::remove_var("MARKDOWN_RAG_DOCS_DIR");
            std::env::remove_var("MARKDOWN_RAG_MAX_CHUNK_SIZE");
            std::env::remove_var("MARKDOWN_RAG_CHUNK_OVERLAP");
        }
    }

    #[test]
    fn test_default_resources_cover_js_and_official() {
        let config = Config::default();
        let names: Vec<&str> = config.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["js", "official"]);
        assert_eq!(config.resources[1].prune, vec!["dev", ".vuepress", "assets"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.chunking.max_chunk_size, config.chunking.max_chunk_size);
        assert_eq!(parsed.resources.len(), config.resources.len());
    }
}
