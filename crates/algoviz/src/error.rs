use thiserror::Error;

/// Every rejected operation. None of these end a session: the operation is
/// refused, no state changes, and the message is shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-integer or out-of-range value, or a bad configuration value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} is already in the tree")]
    DuplicateValue(i64),
    #[error("{0} is not in the tree")]
    NotFound(i64),
    /// Operation needs a non-empty tree, array or step history.
    #[error("the {0} is empty")]
    EmptyStructure(&'static str),
    /// Data or settings changed while a sorting run is active.
    #[error("a sorting run is in progress")]
    Busy,
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<algoviz_sorting::UnknownAlgorithm> for Error {
    fn from(e: algoviz_sorting::UnknownAlgorithm) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
