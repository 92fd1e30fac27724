use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("platform error: {0}")]
    Platform(String),
    #[error("snippet store error: {0}")]
    SnippetStore(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("classifier error: {0}")]
    Classifier(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
