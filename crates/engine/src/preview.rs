use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read back at most `limit` lines of a written domain list.
pub fn preview(path: &Path, limit: usize) -> Result<Vec<String>> {
    let read_err = |e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::open(path).map_err(read_err)?;
    BufReader::new(file)
        .lines()
        .take(limit)
        .map(|line| line.map(|l| l.trim().to_owned()).map_err(read_err))
        .collect()
}
