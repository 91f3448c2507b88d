use async_trait::async_trait;
use crate::{
    error::BackendError,
    search::SearchQuery,
    thesis::ThesisListings,
};

#[async_trait]
pub trait SearchBackend {
    /// Remote search over theses; the server decides how `query.kind`
    /// narrows the match (title/abstract, topics or keywords).
    async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<ThesisListings, BackendError>;
}
