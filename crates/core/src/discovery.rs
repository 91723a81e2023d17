//! Recursive docs directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("docs root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk docs directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the walked root.
    pub relative_path: PathBuf,
}

/// Walker for discovering documents with given extensions.
#[derive(Debug)]
pub struct DocsWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DocsWalker {
    /// Create a walker over `root` matching `extensions` (without the dot).
    pub fn new(root: &Path, extensions: &[String]) -> Result<Self, DiscoveryError> {
        let root = root
            .canonicalize()
            .map_err(|_| DiscoveryError::MissingRoot(root.display().to_string()))?;

        Ok(Self { root, extensions: extensions.to_vec() })
    }

    /// Walk the root and return matching files sorted by relative path.
    /// Hidden directories and dependency folders are skipped.
    pub fn walk(&self) -> Result<Vec<DocFile>, DiscoveryError> {
        // A single file is its own result, if it is a document at all.
        if self.root.is_file() {
            if !self.has_extension(&self.root) {
                return Ok(Vec::new());
            }
            let name = self.root.file_name().map(PathBuf::from).unwrap_or_default();
            return Ok(vec![DocFile { absolute_path: self.root.clone(), relative_path: name }]);
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry
                .map_err(|e| DiscoveryError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !path.is_file() || !self.has_extension(path) {
                continue;
            }

            let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
            files.push(DocFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x == e))
    }

    /// Get the walked root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    // Skip hidden files and directories
    if name.starts_with('.') {
        return true;
    }

    matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv")
}
