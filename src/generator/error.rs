use super::templates::TemplateFailure;
use crate::models::ConfigError;
use thiserror::Error;

/// Broad category of a [`GenerationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    Config,
    Collision,
    Io,
    Template,
    Json,
}

/// Errors that abort a generation run.
///
/// Every variant names the destination-relative path of the artifact being
/// written when it occurred (empty for configuration errors raised before
/// the first artifact).
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Refusing to overwrite existing file {path}")]
    Collision { path: String },

    #[error("I/O error while writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error while writing {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: TemplateFailure,
    },

    #[error("Failed to serialize {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::Config(_) => GenerationErrorKind::Config,
            GenerationError::Collision { .. } => GenerationErrorKind::Collision,
            GenerationError::Io { .. } => GenerationErrorKind::Io,
            GenerationError::Template { .. } => GenerationErrorKind::Template,
            GenerationError::Json { .. } => GenerationErrorKind::Json,
        }
    }

    /// Destination-relative path of the failing artifact
    pub fn path(&self) -> &str {
        match self {
            GenerationError::Config(_) => "",
            GenerationError::Collision { path }
            | GenerationError::Io { path, .. }
            | GenerationError::Template { path, .. }
            | GenerationError::Json { path, .. } => path,
        }
    }

    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            GenerationError::Collision {
                path: path.to_string(),
            }
        } else {
            GenerationError::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}
