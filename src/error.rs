use thiserror::Error;

/// Everything that can go wrong while gathering portfolio content.
///
/// None of these reach the visitor: callers log them and fall back to the
/// bundled dataset.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Content store did not answer in time")]
    Timeout,

    #[cfg(feature = "ssr")]
    #[error("Content store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content store answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Couldn't decode content: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Fallback content unavailable: {message}")]
    Fallback { message: String },
}

impl ContentError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Splits timeouts out of transport errors so logs can tell them apart.
    #[cfg(feature = "ssr")]
    pub fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
