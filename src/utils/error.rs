//! Error handling.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted user record exists but is not a serialized JSON object.
    #[error("malformed record under `{key}`: {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("redirect loop while navigating to `{0}`")]
    RedirectLoop(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::Storage(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::Storage(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
