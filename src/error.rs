use thiserror::Error;

/// Conditions the rotation controller rejects.
///
/// Both are local mistakes made by whoever drives the controller. Neither one
/// is shown to a visitor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("cannot rotate an empty item sequence")]
    EmptySequence,

    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] CarouselError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentParseError {
    #[error("unknown intent '{0}', expected prev, next or jump:<index>")]
    Unknown(String),

    #[error("invalid jump target '{0}'")]
    BadIndex(String),

    #[error("scripted intent '{0}' must look like <frame>:<intent>")]
    MissingFrame(String),
}
