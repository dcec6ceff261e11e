/// Centralized error types for markdown-rag using thiserror
///
/// Provides domain-specific error types for better error handling and
/// user-facing messages.
use thiserror::Error;

/// Main error type for the chunking pipeline
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while turning a document into chunks
#[derive(Error, Debug)]
pub enum ChunkingError {
    #[error("Failed to read document '{file}': {reason}")]
    FileRead { file: String, reason: String },
}

/// Errors raised while discovering markdown documents
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Docs root does not exist: {0}")]
    RootNotFound(String),

    #[error("Docs root is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to walk docs root: {0}")]
    WalkFailed(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Errors raised while refreshing knowledge-base resources
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Failed to clone '{url}': {reason}")]
    CloneFailed { url: String, reason: String },

    #[error("Cloned repository has no directory '{0}'; its layout may have changed")]
    MissingSubdir(String),

    #[error("Failed to remove '{path}': {reason}")]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to copy '{from}' to '{to}': {reason}")]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Unknown resource: {0}")]
    UnknownResource(String),
}

/// Errors raised while exporting chunk records
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write records to '{path}': {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Failed to serialize records: {0}")]
    SerializeFailed(String),
}

impl RagError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        RagError::Other(msg.into())
    }

    /// Check if this is a user error (bad input or config) vs system error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RagError::Config(ConfigError::InvalidValue { .. })
                | RagError::Discovery(DiscoveryError::RootNotFound(_))
                | RagError::Discovery(DiscoveryError::NotADirectory(_))
                | RagError::Resource(ResourceError::UnknownResource(_))
        )
    }
}
