use reqwest::StatusCode;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum MusicApiError {
    /// Network, timeout or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(String),
    /// Client configuration is unusable (missing base URL, bad URL).
    #[error("config error: {0}")]
    Config(String),
}

/// Coarse failure classification used by the retry predicate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// No response was received: DNS, refused, reset, closed mid-response.
    Network,
    /// The attempt exceeded its timeout.
    Timeout,
    /// The server answered with an error status.
    Status(StatusCode),
    /// Anything that re-sending cannot fix.
    Other,
}

impl MusicApiError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Transport(err) if err.is_timeout() => ErrorClass::Timeout,
            Self::Transport(err) => match err.status() {
                Some(status) => ErrorClass::Status(status),
                None if err.is_builder() => ErrorClass::Other,
                None => ErrorClass::Network,
            },
            Self::Http { status, .. } => StatusCode::from_u16(*status)
                .map(ErrorClass::Status)
                .unwrap_or(ErrorClass::Other),
            Self::Decode(_) | Self::Config(_) => ErrorClass::Other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.class() == ErrorClass::Timeout
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
