use async_trait::async_trait;
use crate::{
    error::BackendError,
    person::{
        Person,
        PersonInput,
        Persons,
    },
    thesis::ThesisSummaries,
};

#[async_trait]
pub trait PersonBackend {
    async fn list_persons(
        &self,
    ) -> Result<Persons, BackendError>;
    async fn get_person(
        &self,
        id: i64,
    ) -> Result<Person, BackendError>;
    /// Returns the id assigned by the server.
    async fn add_person(
        &self,
        input: &PersonInput,
    ) -> Result<i64, BackendError>;
    async fn update_person(
        &self,
        id: i64,
        input: &PersonInput,
    ) -> Result<bool, BackendError>;
    async fn delete_person(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    /// Theses authored by the person.
    async fn list_person_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError>;
}
