use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::error::SourceError;

/// Extension of record files picked up when expanding a directory
pub const RECORD_EXTENSION: &str = "txt";

/// Where batch inputs come from.
///
/// Implementations must be shareable across the rayon pool.
pub trait InputSource: Send + Sync {
    /// Expand user supplied paths into the list of inputs to validate
    fn resolve_inputs(&self, paths: &[PathBuf]) -> Vec<PathBuf>;

    /// Read one input as text
    fn read_text(&self, path: &Path) -> Result<String, SourceError>;
}

/// Reads records from the local filesystem.
///
/// Files given explicitly are kept whatever their extension. Directories are
/// walked recursively and contribute their `.txt` files in sorted order.
/// Paths that do not exist are skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FsSource {
    fn collect_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir).map_err(|source| SourceError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        paths.sort();

        for path in paths {
            if path.is_dir() {
                if let Err(err) = Self::collect_dir(&path, out) {
                    warn!("{}", err);
                }
            } else if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION))
            {
                out.push(path);
            }
        }

        Ok(())
    }
}

impl InputSource for FsSource {
    fn resolve_inputs(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut resolved = Vec::new();

        for path in paths {
            if path.is_dir() {
                let before = resolved.len();
                if let Err(err) = Self::collect_dir(path, &mut resolved) {
                    warn!("{}", err);
                }
                debug!(
                    "Directory {} contributed {} files",
                    path.display(),
                    resolved.len() - before
                );
            } else if path.is_file() {
                resolved.push(path.clone());
            } else {
                warn!("Path not found, skipping: {}", path.display());
            }
        }

        resolved
    }

    fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
