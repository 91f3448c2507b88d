use async_trait::async_trait;
use mockall::mock;
use gtscore::{
    error::BackendError,
    institute::{
        Institute,
        InstituteInput,
        Institutes,
        traits::InstituteBackend,
    },
    person::{
        Person,
        PersonInput,
        Persons,
        traits::PersonBackend,
    },
    platform::{
        GtsPlatform,
        PlatformUrl,
    },
    search::{
        SearchQuery,
        traits::SearchBackend,
    },
    status::{
        Health,
        StatusBackend,
    },
    thesis::{
        Thesis,
        ThesisInput,
        ThesisListings,
        ThesisSummaries,
        traits::ThesisBackend,
    },
    university::{
        University,
        UniversityInput,
        Universities,
        traits::UniversityBackend,
    },
};
use crate::fixture;

mock! {
    pub Platform {}

    #[async_trait]
    impl PersonBackend for Platform {
        async fn list_persons(&self) -> Result<Persons, BackendError>;
        async fn get_person(&self, id: i64) -> Result<Person, BackendError>;
        async fn add_person(&self, input: &PersonInput) -> Result<i64, BackendError>;
        async fn update_person(&self, id: i64, input: &PersonInput) -> Result<bool, BackendError>;
        async fn delete_person(&self, id: i64) -> Result<bool, BackendError>;
        async fn list_person_theses(&self, id: i64) -> Result<ThesisSummaries, BackendError>;
    }

    #[async_trait]
    impl UniversityBackend for Platform {
        async fn list_universities(&self) -> Result<Universities, BackendError>;
        async fn get_university(&self, id: i64) -> Result<University, BackendError>;
        async fn add_university(&self, input: &UniversityInput) -> Result<i64, BackendError>;
        async fn update_university(&self, id: i64, input: &UniversityInput) -> Result<bool, BackendError>;
        async fn delete_university(&self, id: i64) -> Result<bool, BackendError>;
        async fn list_university_institutes(&self, id: i64) -> Result<Institutes, BackendError>;
        async fn list_university_theses(&self, id: i64) -> Result<ThesisSummaries, BackendError>;
    }

    #[async_trait]
    impl InstituteBackend for Platform {
        async fn list_institutes(&self) -> Result<Institutes, BackendError>;
        async fn get_institute(&self, id: i64) -> Result<Institute, BackendError>;
        async fn add_institute(&self, input: &InstituteInput) -> Result<i64, BackendError>;
        async fn update_institute(&self, id: i64, input: &InstituteInput) -> Result<bool, BackendError>;
        async fn delete_institute(&self, id: i64) -> Result<bool, BackendError>;
        async fn list_institute_theses(&self, id: i64) -> Result<ThesisSummaries, BackendError>;
    }

    #[async_trait]
    impl ThesisBackend for Platform {
        async fn list_theses(&self) -> Result<ThesisListings, BackendError>;
        async fn get_thesis(&self, id: i64) -> Result<Thesis, BackendError>;
        async fn add_thesis(&self, input: &ThesisInput) -> Result<i64, BackendError>;
        async fn update_thesis(&self, id: i64, input: &ThesisInput) -> Result<bool, BackendError>;
        async fn delete_thesis(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl SearchBackend for Platform {
        async fn search(&self, query: &SearchQuery) -> Result<ThesisListings, BackendError>;
    }

    #[async_trait]
    impl StatusBackend for Platform {
        async fn health(&self) -> Result<Health, BackendError>;
    }
}

impl PlatformUrl for MockPlatform {
    fn url(&self) -> &str {
        "mock://gts"
    }
}

impl GtsPlatform for MockPlatform {}

/// A 404 in the shape the HTTP client produces.
pub fn not_found(what: &str) -> BackendError {
    BackendError::Status {
        status: 404,
        message: format!("{what} not found"),
    }
}

/// A 400 carrying the server's `error` message.
pub fn bad_request(message: &str) -> BackendError {
    BackendError::Status {
        status: 400,
        message: message.to_string(),
    }
}

/// Answer the person, university and institute listings from the
/// fixtures, once each.
pub fn expect_entities(platform: &mut MockPlatform) {
    platform.expect_list_persons()
        .times(1)
        .returning(|| Ok(fixture::persons()));
    platform.expect_list_universities()
        .times(1)
        .returning(|| Ok(fixture::universities()));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));
}
