//! Error types for the wraith runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("No such file or directory: '{path}'")]
    FileNotFound { path: String },

    #[error("Cannot read '{path}': {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("CoffeeScript compilation failed: {message}")]
    Transpile { message: String },

    #[error("Unknown encoding label: '{label}'")]
    Encoding { label: String },
}

pub type Result<T> = std::result::Result<T, RunnerError>;

impl RunnerError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn transpile(message: impl Into<String>) -> Self {
        Self::Transpile {
            message: message.into(),
        }
    }

    pub fn encoding(label: impl Into<String>) -> Self {
        Self::Encoding {
            label: label.into(),
        }
    }
}
