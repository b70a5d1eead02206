use super::queue::Queue;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// List files directly inside `dir` that are not already queued, sorted by name.
/// Directories are skipped; an unreadable directory is an error.
pub fn list_available_files(dir: &Path, queue: &Queue) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        // Follows symlinks so a link to a directory is skipped too
        if entry.path().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };

        if queue.contains_input(name) {
            continue;
        }

        files.push(name.to_string());
    }

    Ok(files)
}
