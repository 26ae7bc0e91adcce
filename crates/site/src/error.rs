use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read {0:?}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Failed to write {0:?}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

impl SiteError {
    /// Path of the file the failed operation was aimed at.
    pub fn path(&self) -> &PathBuf {
        match self {
            SiteError::Read(path, _) | SiteError::Write(path, _) => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
