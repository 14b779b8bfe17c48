//! Loads training patterns from comma-separated text.
//!
//! Format: one record per line, `input_dims` numbers followed by the label.
//! Blank lines are skipped; the first malformed record aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::data::pattern::Pattern;
use crate::error::LoadError;

pub fn load_patterns<R: BufRead>(reader: R, input_dims: usize) -> Result<Vec<Pattern>, LoadError> {
    let mut patterns = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io { path: "<reader>".into(), source })?;
        if line.trim().is_empty() {
            continue;
        }
        let pattern = Pattern::parse(&line, input_dims)
            .map_err(|source| LoadError::Record { line: idx + 1, source })?;
        patterns.push(pattern);
    }

    if patterns.is_empty() {
        return Err(LoadError::Empty);
    }
    debug!(count = patterns.len(), input_dims, "loaded patterns");
    Ok(patterns)
}

pub fn load_patterns_file<P: AsRef<Path>>(path: P, input_dims: usize) -> Result<Vec<Pattern>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_patterns(BufReader::new(file), input_dims)
}
