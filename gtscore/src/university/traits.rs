use async_trait::async_trait;
use crate::{
    error::BackendError,
    institute::Institutes,
    thesis::ThesisSummaries,
    university::{
        University,
        UniversityInput,
        Universities,
    },
};

#[async_trait]
pub trait UniversityBackend {
    async fn list_universities(
        &self,
    ) -> Result<Universities, BackendError>;
    async fn get_university(
        &self,
        id: i64,
    ) -> Result<University, BackendError>;
    async fn add_university(
        &self,
        input: &UniversityInput,
    ) -> Result<i64, BackendError>;
    async fn update_university(
        &self,
        id: i64,
        input: &UniversityInput,
    ) -> Result<bool, BackendError>;
    async fn delete_university(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    // the institute rows from this listing carry no university name.
    async fn list_university_institutes(
        &self,
        id: i64,
    ) -> Result<Institutes, BackendError>;
    async fn list_university_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError>;
}
