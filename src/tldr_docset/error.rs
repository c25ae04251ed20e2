use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsetError {
    #[error("{0}")]
    Usage(String),

    #[error("could not load pages from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("search index error: {0}")]
    Index(#[from] rusqlite::Error),
}

impl DocsetError {
    pub(crate) fn fetch(url: &str, err: &reqwest::Error) -> Self {
        DocsetError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocsetError>;
