//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Safely open a file with rich error information
///
/// This function attempts to open a file and provides detailed
/// error information if the operation fails.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "File not found: {} (needed for: {})",
            path.display(),
            purpose
        )
        .into());
    }

    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "Path is not a file: {} (expected a file for: {})",
            path.display(),
            purpose
        )
        .into());
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied opening {}", path.display())
                }
                io::ErrorKind::NotFound => {
                    format!(
                        "File not found: {} - it may have been deleted during operation",
                        path.display()
                    )
                }
                _ => format!("Failed to open {} for: {}", path.display(), purpose),
            };

            Err(anyhow::Error::new(e).context(context).into())
        }
    }
}

/// Check that a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Directory not found: {} (needed for: {})",
            path.display(),
            purpose
        )
        .into());
    }

    if !path.is_dir() {
        return Err(anyhow::anyhow!(
            "Path is not a directory: {} (expected a directory for: {})",
            path.display(),
            purpose
        )
        .into());
    }

    fs::read_dir(path)
        .map(|_| ())
        .with_context(|| format!("Directory is not readable: {}", path.display()))
        .map_err(crate::error::Error::from)
}
