//! Error types for discovery code generation

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid discovery document: {0}")]
    Parse(String),

    #[error("Unsupported type '{type_name}' for {context}")]
    UnsupportedType { type_name: String, context: String },

    #[error("Method '{method}' lists '{parameter}' in parameterOrder but declares no such parameter")]
    MissingParameter { method: String, parameter: String },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
