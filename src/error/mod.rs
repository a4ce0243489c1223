//! Error types for scanning calendar documents

use std::path::{Path, PathBuf};

/// Errors raised while locating, reading or parsing calendar documents
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Calendar directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("JSON parse error in {}: {message}", path.display())]
    JsonParse {
        path: PathBuf,
        message: String,
        location: Option<(usize, usize)>,
    },

    #[error("Directory walk failed: {message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ScanError {
    pub fn root_not_found(path: &Path) -> Self {
        Self::RootNotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn encoding(path: &Path, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a parse error, keeping the line/column reported by serde_json
    pub fn json_parse(path: &Path, error: &serde_json::Error) -> Self {
        let location = if error.line() > 0 {
            Some((error.line(), error.column()))
        } else {
            None
        };
        // serde_json appends " at line L column C"; the location is kept separately
        let mut message = error.to_string();
        if location.is_some() {
            if let Some(idx) = message.rfind(" at line ") {
                message.truncate(idx);
            }
        }
        Self::JsonParse {
            path: path.to_path_buf(),
            message,
            location,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The file this error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootNotFound { path }
            | Self::Io { path, .. }
            | Self::Encoding { path, .. }
            | Self::JsonParse { path, .. } => Some(path.as_path()),
            Self::Walk { path, .. } => path.as_deref(),
            Self::Configuration { .. } => None,
        }
    }

    /// Create a user-friendly error message. Callers name the file themselves.
    pub fn user_message(&self) -> String {
        match self {
            Self::JsonParse {
                message,
                location: Some((line, col)),
                ..
            } => format!(
                "JSON parse error at line {}, column {}: {}",
                line, col, message
            ),
            Self::JsonParse { message, .. } => format!("JSON parse error: {}", message),
            Self::Io { source, .. } => format!("Failed to read file: {}", source),
            Self::Encoding { source, .. } => format!("Invalid UTF-8: {}", source),
            Self::Walk { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(error: walkdir::Error) -> Self {
        Self::Walk {
            path: error.path().map(Path::to_path_buf),
            message: error.to_string(),
        }
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
