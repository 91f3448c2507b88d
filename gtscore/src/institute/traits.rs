use async_trait::async_trait;
use crate::{
    error::BackendError,
    institute::{
        Institute,
        InstituteInput,
        Institutes,
    },
    thesis::ThesisSummaries,
};

#[async_trait]
pub trait InstituteBackend {
    async fn list_institutes(
        &self,
    ) -> Result<Institutes, BackendError>;
    async fn get_institute(
        &self,
        id: i64,
    ) -> Result<Institute, BackendError>;
    async fn add_institute(
        &self,
        input: &InstituteInput,
    ) -> Result<i64, BackendError>;
    async fn update_institute(
        &self,
        id: i64,
        input: &InstituteInput,
    ) -> Result<bool, BackendError>;
    async fn delete_institute(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    async fn list_institute_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError>;
}
