use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid counter spec: {0}")]
    InvalidSpec(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
