use thiserror::Error;

/// Failures while resolving flags. Reported with exit status 2.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error(transparent)]
    Flags(#[from] clap::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Failures during a run. Reported with exit status 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path required")]
    PathRequired,
    #[error("path must have {ext} extension: {path}")]
    Extension { ext: &'static str, path: String },
    #[error("file not found")]
    NotFound,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Exec(String),
}
