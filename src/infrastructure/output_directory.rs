// Output directory preparation and document writing
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_directory(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!("Output directory ready: {}", dir.display());
    Ok(())
}

/// Write `contents` to `path`, replacing any previous file.
pub fn write_document(path: &Path, contents: &str) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })
}
