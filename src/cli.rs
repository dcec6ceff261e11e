use crate::chunking::DocumentChunker;
use crate::config::Config;
use crate::discovery::MarkdownWalker;
use crate::error::ResourceError;
use crate::records::{self, ChunkRecord};
use crate::resources;
use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::PathBuf;

/// Markdown knowledge-base chunking for embedding and retrieval
#[derive(Parser)]
#[command(name = "markdown-rag", version, about)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "MARKDOWN_RAG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chunk every markdown document under the docs root and export the
    /// pre-embedding records
    Chunk {
        /// Root directory scanned for markdown documents
        #[arg(long)]
        docs_dir: Option<PathBuf>,

        /// Destination for the records JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Maximum characters per chunk body
        #[arg(long)]
        max_chunk_size: Option<usize>,

        /// Characters of trailing context carried between chunks
        #[arg(long)]
        chunk_overlap: Option<usize>,
    },

    /// Refresh knowledge-base resources from their upstream repositories
    Update {
        /// Update only the named resource
        #[arg(long)]
        name: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default()?,
    };
    config.apply_env_overrides();

    match cli.command {
        Command::Chunk {
            docs_dir,
            output,
            max_chunk_size,
            chunk_overlap,
        } => {
            if let Some(dir) = docs_dir {
                config.discovery.docs_dir = dir;
            }
            if let Some(path) = output {
                config.export.records_path = path;
            }
            if let Some(size) = max_chunk_size {
                config.chunking.max_chunk_size = size;
            }
            if let Some(overlap) = chunk_overlap {
                config.chunking.chunk_overlap = overlap;
            }
            config.validate()?;
            run_chunk(&config)
        }
        Command::Update { name } => {
            config.validate()?;
            run_update(&config, name.as_deref())
        }
    }
}

/// Discover, chunk, and export the whole corpus. Documents are chunked in
/// parallel; the record order still follows the sorted file list.
fn run_chunk(config: &Config) -> Result<()> {
    let files = MarkdownWalker::new(&config.discovery.docs_dir, config.discovery.max_file_size)
        .with_excludes(config.discovery.exclude_patterns.clone())
        .walk()?;

    let chunker = DocumentChunker::new(
        config.chunking.max_chunk_size,
        config.chunking.chunk_overlap,
    );

    let per_document: Vec<Vec<ChunkRecord>> = files
        .par_iter()
        .map(|path| {
            let chunks = chunker.chunk_file(path)?;
            Ok(records::records_for_document(path, chunks))
        })
        .collect::<Result<_>>()?;

    let all_records: Vec<ChunkRecord> = per_document.into_iter().flatten().collect();

    tracing::info!(
        "Chunked {} documents into {} chunks",
        files.len(),
        all_records.len()
    );

    records::write_records(&config.export.records_path, &all_records)?;
    tracing::info!(
        "Wrote {} records to {}",
        all_records.len(),
        config.export.records_path.display()
    );

    Ok(())
}

fn run_update(config: &Config, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let spec = config
                .resources
                .iter()
                .find(|spec| spec.name == name)
                .ok_or_else(|| ResourceError::UnknownResource(name.to_string()))?;
            resources::update_resource(spec)?;
        }
        None => resources::update_all(&config.resources)?,
    }
    Ok(())
}
