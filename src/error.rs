use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering, decoding or configuring health reports.
#[derive(Error, Debug)]
pub enum HealthInfoError {
    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config could not be parsed
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading a config file failed
    #[error("failure read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered output was not valid UTF-8
    #[error("rendered json is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Config parsed but is not usable
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HealthInfoError>;
