use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    // The identity provider could not be reached, answered with a
    // non-success status or an unparseable body
    #[error("Token request failed: {0}")]
    TokenRequestFailed(String),

    // The call to the protected server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    // The protected server answered with something unexpected
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::RequestFailed(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::UnexpectedResponse(e.to_string())
    }
}

pub type ClientResult<R> = Result<R, ClientError>;
