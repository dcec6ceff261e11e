//! Markdown-to-chunk segmentation engine
//!
//! Converts a markdown document into an ordered list of bounded-size text
//! chunks ready for embedding. Processing is a single top-down pass:
//! blocks (heading-delimited, front-matter aware) are split into
//! paragraphs, paragraphs into sentences, and sentences are greedily
//! merged into size-bounded chunks that carry a trailing overlap window
//! and the owning heading as their first line.
//!
//! The engine is synchronous and shares no state between documents, so
//! callers are free to chunk many documents in parallel.

mod blocks;
mod merge;
mod normalize;
mod paragraphs;
mod sentences;

pub use blocks::{Block, split_into_blocks};
pub use merge::merge_sentences_into_chunks;
pub use normalize::repair_broken_urls;
pub use paragraphs::split_paragraphs;
pub use sentences::split_sentences;

use crate::error::ChunkingError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Title given to content that no heading ever preceded.
pub const NO_TITLE: &str = "(no title)";

pub(crate) const CODE_FENCE: &str = "```";
pub(crate) const FRONT_MATTER_DELIMITER: &str = "---";
pub(crate) const FAQ_MARKER: &str = "❓";

/// One or more `#` characters followed by whitespace.
pub(crate) static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s").expect("valid heading pattern"));

/// Splits markdown documents into retrieval-ready chunks.
#[derive(Debug, Clone, Copy)]
pub struct DocumentChunker {
    max_chunk_size: usize,
    overlap_size: usize,
}

impl DocumentChunker {
    /// Creates a chunker bounded by `max_chunk_size` characters per chunk
    /// body, carrying up to `overlap_size` characters of trailing context
    /// between consecutive chunks. `overlap_size` must be smaller than
    /// `max_chunk_size`.
    pub fn new(max_chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            max_chunk_size,
            overlap_size,
        }
    }

    /// Reads a markdown file and returns its chunks in document order.
    pub fn chunk_file(&self, path: &Path) -> Result<Vec<String>, ChunkingError> {
        let text = std::fs::read_to_string(path).map_err(|e| ChunkingError::FileRead {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.chunk_text(&text))
    }

    /// Chunks already-read document text. Returns an empty list for
    /// documents with no chunkable content (e.g. front-matter only).
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();

        for block in split_into_blocks(text.lines()) {
            for paragraph in split_paragraphs(&block.content) {
                let sentences = split_sentences(&paragraph);
                chunks.extend(merge_sentences_into_chunks(
                    &block.title,
                    &sentences,
                    self.max_chunk_size,
                    self.overlap_size,
                ));
            }
        }

        chunks
    }
}
