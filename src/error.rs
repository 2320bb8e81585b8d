//! The errors thrown by the commands

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server side error, properly handled, returning a status code and a message
    #[error("protocol error {0}: {1}")]
    Protocol(u16, String),
    /// Error coming from the underlying http client
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to parse a json response")]
    SerdeJson(#[from] serde_json::Error),
}
