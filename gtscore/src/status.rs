use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::BackendError;

/// Response of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Health {
    pub ok: bool,
    #[serde(default)]
    pub db: String,
    #[serde(default)]
    pub test: i64,
}

#[async_trait]
pub trait StatusBackend {
    async fn health(&self) -> Result<Health, BackendError>;
}
