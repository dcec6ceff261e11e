//! # Markdown RAG - Markdown Chunking for Retrieval Pipelines
//!
//! Turns a directory of markdown documents into bounded-size, overlap-aware
//! text chunks ready for embedding and nearest-neighbor retrieval, and keeps
//! the underlying knowledge base fresh from its upstream git repositories.
//!
//! ## Overview
//!
//! The heart of the crate is a layered segmentation engine: documents are
//! split into heading-delimited blocks (front-matter and fenced code aware),
//! blocks into paragraphs, paragraphs into sentences with URL-safe boundary
//! detection, and sentences are greedily merged into chunks that carry a
//! trailing overlap window and their heading as the first line. Embedding,
//! vector storage, and querying are external collaborators fed through the
//! exported chunk records.
//!
//! ## Pipeline
//!
//! ```text
//! docs root ──discovery──> *.md files
//!                             │ (parallel per document)
//!                 blocks → paragraphs → sentences → chunks
//!                             │
//!                     records {id, source, title, chunk_index, text}
//!                             │
//!                     pre_embeddings.json ──> embedding / indexing
//! ```
//!
//! ## Modules
//!
//! - [`chunking`]: the markdown-to-chunk segmentation engine
//! - [`discovery`]: markdown file discovery under a docs root
//! - [`records`]: chunk records and the pre-embedding JSON export
//! - [`resources`]: git-based knowledge-base resource updates
//! - [`config`]: configuration management with environment variable support
//! - [`cli`]: command-line interface
//! - [`error`]: error types and utilities
//! - [`paths`]: path normalization utilities
//!
//! ## Usage Example
//!
//! ```no_run
//! use markdown_rag::chunking::DocumentChunker;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let chunker = DocumentChunker::new(500, 100);
//!     let chunks = chunker.chunk_file(Path::new("docs/guide.md"))?;
//!
//!     for chunk in &chunks {
//!         println!("--- {} chars\n{chunk}", chunk.chars().count());
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Markdown-to-chunk segmentation engine
pub mod chunking;

/// Command-line interface
pub mod cli;

/// Configuration management with environment variable overrides
pub mod config;

/// Markdown document discovery
pub mod discovery;

/// Error types and utilities
pub mod error;

/// Path normalization and platform locations
pub mod paths;

/// Chunk records and pre-embedding export
pub mod records;

/// Knowledge-base resource updates from upstream repositories
pub mod resources;
