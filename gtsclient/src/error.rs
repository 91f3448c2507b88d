use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid api url {0}: {1}")]
    InvalidUrl(String, String),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
