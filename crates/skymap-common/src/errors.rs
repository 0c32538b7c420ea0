use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures reading geometry or catalog input.
///
/// These are never fatal: callers log them and carry on with empty geometry.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("data unavailable at {path}: {reason}")]
    Unavailable { path: PathBuf, reason: String },

    #[error("malformed data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SkymapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
