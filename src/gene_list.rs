//! Gene-list files: one regular expression per line.

use crate::error::{ConfigError, GrepFasError};
use crate::reader::LineReader;

use std::path::Path;

/// Read every non-empty, trimmed line of `path` (plain or gzip) as a pattern,
/// in file order.
pub fn load(path: &Path) -> Result<Vec<String>, GrepFasError> {
    let unreadable = |source| ConfigError::GeneList {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = match LineReader::from_path(path) {
        Ok(r) => r,
        Err(GrepFasError::Io { source, .. }) => return Err(unreadable(source).into()),
        Err(e) => return Err(e),
    };

    let mut patterns = Vec::new();
    loop {
        let line = match rdr.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(GrepFasError::Io { source, .. }) => return Err(unreadable(source).into()),
            Err(e) => return Err(e),
        };
        let pattern = String::from_utf8_lossy(line);
        let pattern = pattern.trim();
        if !pattern.is_empty() {
            patterns.push(pattern.to_string());
        }
    }
    log::debug!("loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}
