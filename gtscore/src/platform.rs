use async_trait::async_trait;
use crate::{
    error::BackendError,
    institute::traits::InstituteBackend,
    kind::EntityKind,
    person::traits::PersonBackend,
    search::traits::SearchBackend,
    status::StatusBackend,
    thesis::traits::ThesisBackend,
    university::traits::UniversityBackend,
};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}

/// GtsPlatform - everything the views need from the thesis API.
///
/// Composed from the per-entity backends so that any implementation of
/// those (the HTTP client, or a mock under test) can drive the views.
#[async_trait]
pub trait GtsPlatform: PersonBackend
    + UniversityBackend
    + InstituteBackend
    + ThesisBackend
    + SearchBackend
    + StatusBackend
    + PlatformUrl
    + Send
    + Sync
{
    /// Delete the record of `kind` identified by `id`.
    async fn delete_entity(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> Result<bool, BackendError> {
        log::debug!("delete_entity: {kind} {id}");
        match kind {
            EntityKind::Person => self.delete_person(id).await,
            EntityKind::University => self.delete_university(id).await,
            EntityKind::Institute => self.delete_institute(id).await,
            EntityKind::Thesis => self.delete_thesis(id).await,
        }
    }
}
