use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("a linear gradient needs at least one color stop")]
    EmptyGradient,

    #[error("invalid color value: {0:?}")]
    InvalidColor(String),

    #[error("malformed theme config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not encode theme config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("theme config i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
