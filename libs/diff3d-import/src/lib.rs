//! # Diff3d Import Crate
//!
//! Raw line ingestion for the diff3d inspection pipeline.
//!
//! This crate knows nothing about geometry. It reads a text file into a list
//! of lines and enforces the input size limit; turning those lines into a
//! mesh is the downstream crate's job. Keeping the file I/O here means the
//! geometry layer can be tested entirely from in-memory line lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::MAX_FILE_SIZE;
use thiserror::Error;

/// Errors that can occur while ingesting a soup file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying I/O failure (missing file, permissions, read error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured import size limit
    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },
}

/// Reads every line of the file at `path`.
///
/// The file size is checked against [`config::constants::MAX_FILE_SIZE`]
/// before any content is read. Line terminators are stripped; empty lines are
/// preserved so that downstream record numbering matches the file.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ImportError> {
    let file = File::open(path)?;
    check_size(file.metadata()?.len())?;
    read_lines_from(BufReader::new(file))
}

/// Reads every line from an already-open reader.
///
/// Used directly by tests and by callers that source soup text from memory
/// rather than the filesystem. No size limit is applied here.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>, ImportError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn check_size(size: u64) -> Result<(), ImportError> {
    if size > MAX_FILE_SIZE {
        return Err(ImportError::FileTooLarge {
            size,
            max: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
