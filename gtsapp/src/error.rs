use gtscore::error::{
    BackendError,
    ValidationError,
    ValueError,
};
use thiserror::Error;

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("no page at {0}")]
    UnknownRoute(String),
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<ValueError> for AppError {
    fn from(e: ValueError) -> Self {
        Self::Validation(e.into())
    }
}
