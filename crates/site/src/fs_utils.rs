use crate::error::{Result, SiteError};
use std::fs;
use std::path::Path;

/// Read a text file, tagging the error with the path and the operation.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SiteError::Read(path.to_path_buf(), e))
}

/// Write a text file, truncating any previous content.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| SiteError::Write(path.to_path_buf(), e))
}
