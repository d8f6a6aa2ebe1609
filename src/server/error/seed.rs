use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the activity seed dataset.
///
/// A missing seed file is not an error; these only cover a file that exists but
/// cannot be used.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file exists but could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid JSON or does not match the seed schema.
    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
