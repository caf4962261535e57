use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a line-delimited text file, one record per line
pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let records = split_records(&contents);
    debug!(path = %path.display(), records = records.len(), "input loaded");
    Ok(records)
}

/// Splits text into records on `\n` or `\r\n`
pub fn split_records(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}
