use async_trait::async_trait;
use crate::{
    error::BackendError,
    thesis::{
        Thesis,
        ThesisInput,
        ThesisListings,
    },
};

#[async_trait]
pub trait ThesisBackend {
    async fn list_theses(
        &self,
    ) -> Result<ThesisListings, BackendError>;
    async fn get_thesis(
        &self,
        id: i64,
    ) -> Result<Thesis, BackendError>;
    async fn add_thesis(
        &self,
        input: &ThesisInput,
    ) -> Result<i64, BackendError>;
    // topics and keywords are replaced wholesale by the server.
    async fn update_thesis(
        &self,
        id: i64,
        input: &ThesisInput,
    ) -> Result<bool, BackendError>;
    async fn delete_thesis(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
