use crate::config::ResourceSpec;
use crate::error::ResourceError;
use git2::FetchOptions;
use git2::build::RepoBuilder;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Updates every configured resource in order, stopping at the first
/// failure so a broken upstream never leaves later targets half-updated.
pub fn update_all(specs: &[ResourceSpec]) -> Result<(), ResourceError> {
    for spec in specs {
        update_resource(spec)?;
    }
    Ok(())
}

/// Refreshes a single resource: shallow-clone its repository into a
/// scratch directory, select the configured subdirectory, prune unwanted
/// directories, then replace the target wholesale.
pub fn update_resource(spec: &ResourceSpec) -> Result<(), ResourceError> {
    tracing::info!("Updating resource '{}' from {}", spec.name, spec.url);

    let scratch = TempDir::new().map_err(|e| ResourceError::CloneFailed {
        url: spec.url.clone(),
        reason: format!("failed to create scratch directory: {}", e),
    })?;

    clone_shallow(&spec.url, scratch.path())?;

    let source = if spec.subdir.is_empty() {
        scratch.path().to_path_buf()
    } else {
        scratch.path().join(&spec.subdir)
    };

    if !source.is_dir() {
        return Err(ResourceError::MissingSubdir(spec.subdir.clone()));
    }

    for prune in &spec.prune {
        let doomed = source.join(prune);
        if doomed.exists() {
            tracing::info!("Pruning {}", doomed.display());
            fs::remove_dir_all(&doomed).map_err(|e| ResourceError::RemoveFailed {
                path: doomed.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }

    replace_dir(&source, &spec.target)?;

    tracing::info!(
        "Resource '{}' updated at {}",
        spec.name,
        spec.target.display()
    );
    Ok(())
}

fn clone_shallow(url: &str, into: &Path) -> Result<(), ResourceError> {
    let mut fetch = FetchOptions::new();
    fetch.depth(1);

    RepoBuilder::new()
        .fetch_options(fetch)
        .clone(url, into)
        .map_err(|e| ResourceError::CloneFailed {
            url: url.to_string(),
            reason: e.message().to_string(),
        })?;

    Ok(())
}

/// Deletes `dst` if present, then copies `src` into its place.
fn replace_dir(src: &Path, dst: &Path) -> Result<(), ResourceError> {
    if dst.exists() {
        tracing::info!("Removing {}", dst.display());
        fs::remove_dir_all(dst).map_err(|e| ResourceError::RemoveFailed {
            path: dst.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    tracing::info!("Copying {} -> {}", src.display(), dst.display());
    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<(), ResourceError> {
    let copy_err = |reason: String| ResourceError::CopyFailed {
        from: src.display().to_string(),
        to: dst.display().to_string(),
        reason,
    };

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| copy_err(e.to_string()))?;
        let path = entry.path();

        // The clone's own metadata never belongs in the knowledge base.
        if path.components().any(|c| c.as_os_str() == ".git") {
            continue;
        }

        let relative = path
            .strip_prefix(src)
            .map_err(|e| copy_err(e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_err(e.to_string()))?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| copy_err(e.to_string()))?;
            }
            fs::copy(path, &target).map_err(|e| copy_err(e.to_string()))?;
        }
    }

    Ok(())
}
