use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reference cases: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} reference cases did not match")]
    Mismatch { failed: usize, total: usize },
}
