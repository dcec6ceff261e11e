use crate::error::ExportError;
use crate::paths::normalize_path;
use serde::{Deserialize, Serialize};
use std::io::BufWriter;
use std::path::Path;

/// Metadata stored alongside every chunk in the vector store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Normalized path of the source document
    pub source: String,
    /// The chunk's first line (the owning heading)
    pub title: String,
    /// Position of the chunk within its document
    pub chunk_index: usize,
}

/// One embedding-ready chunk with its stable identifier and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// `{normalized-source-path}-{chunk_index}`
    pub id: String,
    #[serde(flatten)]
    pub metadata: ChunkMetadata,
    /// Full chunk text, heading line included
    pub text: String,
}

/// Wraps a document's chunks into records for the indexing side.
pub fn records_for_document(path: &Path, chunks: Vec<String>) -> Vec<ChunkRecord> {
    let source = normalize_path(path);

    chunks
        .into_iter()
        .enumerate()
        .map(|(chunk_index, text)| {
            let title = text.lines().next().unwrap_or_default().to_string();
            ChunkRecord {
                id: format!("{source}-{chunk_index}"),
                metadata: ChunkMetadata {
                    source: source.clone(),
                    title,
                    chunk_index,
                },
                text,
            }
        })
        .collect()
}

/// Writes a corpus's records as pretty-printed JSON for the embedding
/// collaborator to pick up.
pub fn write_records(path: &Path, records: &[ChunkRecord]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| ExportError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;

    Ok(())
}
