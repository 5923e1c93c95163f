use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("could not find file at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not determine the current working directory: {source}")]
    WorkingDir { source: std::io::Error },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn working_dir(source: std::io::Error) -> Self {
        Self::WorkingDir { source }
    }
}
