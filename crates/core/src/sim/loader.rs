//! Trace Loader.
//!
//! Reads access traces from delimited text files. The loader contract is strict: it returns
//! either a non-empty trace or a [`LoadError`], never a silently empty sequence. It performs:
//! 1. **Line splitting:** One access per line; only the first comma-separated field is used.
//! 2. **Cleaning:** A leading UTF-8 byte-order mark is dropped, fields are trimmed, and blank
//!    lines and empty first fields are skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::common::{AccessTrace, LoadError, PageId};

/// Written at the start of text files by some Windows tools.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses trace text into page identifiers.
///
/// Returns an empty trace if the text holds no accesses; [`load_trace`] turns that into an error.
pub fn parse_trace(text: &str) -> AccessTrace {
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(PageId::from)
        .collect()
}

/// Loads an access trace from a file.
///
/// # Arguments
///
/// * `path` - Path to the trace file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and [`LoadError::Empty`] if it contains
/// no page identifiers.
pub fn load_trace(path: impl AsRef<Path>) -> Result<AccessTrace, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read trace file");

    let trace = parse_trace(&text);
    if trace.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        accesses = trace.len(),
        distinct = trace.distinct_count(),
        "loaded access trace"
    );
    Ok(trace)
}
