//! Catalog loading.
//!
//! A catalog is a newline-delimited UTF-8 text file; each line becomes one
//! immutable item. Everything downstream (palindrome filter, shuffle,
//! sorts, searches) operates on the in-memory `Vec<String>`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Errors raised while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads `path` into a vector of lines.
///
/// Line terminators are stripped, including a trailing `\r` from CRLF
/// files. Empty lines are kept; they are legitimate catalog entries.
pub fn load_lines(path: &Path) -> Result<Vec<String>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_owned(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let mut line = line.map_err(|source| CatalogError::Read {
            path: path.to_owned(),
            source,
        })?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }

    Ok(lines)
}
