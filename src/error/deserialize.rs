use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeserializeError {
    #[error("failed to deserialize JSON from '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to deserialize XML from '{path}': {source}")]
    Xml {
        path: PathBuf,
        source: quick_xml::DeError,
    },
}

impl DeserializeError {
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn xml(path: impl Into<PathBuf>, source: quick_xml::DeError) -> Self {
        Self::Xml {
            path: path.into(),
            source,
        }
    }
}
