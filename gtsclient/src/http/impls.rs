use async_trait::async_trait;
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
        ThesisListing,
        ThesisListings,
        ThesisSummary,
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
use super::HttpPlatform;

#[async_trait]
impl PersonBackend for HttpPlatform {
    async fn list_persons(
        &self,
    ) -> Result<Persons, BackendError> {
        Ok(self.get_listing::<Person>("persons").await?.into())
    }

    async fn get_person(
        &self,
        id: i64,
    ) -> Result<Person, BackendError> {
        self.get_json(&format!("persons/{id}")).await
    }

    async fn add_person(
        &self,
        input: &PersonInput,
    ) -> Result<i64, BackendError> {
        self.create("persons", input).await
    }

    async fn update_person(
        &self,
        id: i64,
        input: &PersonInput,
    ) -> Result<bool, BackendError> {
        self.update(&format!("persons/{id}"), input).await
    }

    async fn delete_person(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        self.delete(&format!("persons/{id}")).await
    }

    async fn list_person_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError> {
        Ok(self.get_listing::<ThesisSummary>(&format!("persons/{id}/theses")).await?.into())
    }
}

#[async_trait]
impl UniversityBackend for HttpPlatform {
    async fn list_universities(
        &self,
    ) -> Result<Universities, BackendError> {
        Ok(self.get_listing::<University>("universities").await?.into())
    }

    async fn get_university(
        &self,
        id: i64,
    ) -> Result<University, BackendError> {
        self.get_json(&format!("universities/{id}")).await
    }

    async fn add_university(
        &self,
        input: &UniversityInput,
    ) -> Result<i64, BackendError> {
        self.create("universities", input).await
    }

    async fn update_university(
        &self,
        id: i64,
        input: &UniversityInput,
    ) -> Result<bool, BackendError> {
        self.update(&format!("universities/{id}"), input).await
    }

    async fn delete_university(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        self.delete(&format!("universities/{id}")).await
    }

    async fn list_university_institutes(
        &self,
        id: i64,
    ) -> Result<Institutes, BackendError> {
        Ok(self.get_listing::<Institute>(&format!("universities/{id}/institutes")).await?.into())
    }

    async fn list_university_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError> {
        Ok(self.get_listing::<ThesisSummary>(&format!("universities/{id}/theses")).await?.into())
    }
}

#[async_trait]
impl InstituteBackend for HttpPlatform {
    async fn list_institutes(
        &self,
    ) -> Result<Institutes, BackendError> {
        Ok(self.get_listing::<Institute>("institutes").await?.into())
    }

    async fn get_institute(
        &self,
        id: i64,
    ) -> Result<Institute, BackendError> {
        self.get_json(&format!("institutes/{id}")).await
    }

    async fn add_institute(
        &self,
        input: &InstituteInput,
    ) -> Result<i64, BackendError> {
        self.create("institutes", input).await
    }

    async fn update_institute(
        &self,
        id: i64,
        input: &InstituteInput,
    ) -> Result<bool, BackendError> {
        self.update(&format!("institutes/{id}"), input).await
    }

    async fn delete_institute(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        self.delete(&format!("institutes/{id}")).await
    }

    async fn list_institute_theses(
        &self,
        id: i64,
    ) -> Result<ThesisSummaries, BackendError> {
        Ok(self.get_listing::<ThesisSummary>(&format!("institutes/{id}/theses")).await?.into())
    }
}

#[async_trait]
impl ThesisBackend for HttpPlatform {
    async fn list_theses(
        &self,
    ) -> Result<ThesisListings, BackendError> {
        Ok(self.get_listing::<ThesisListing>("theses").await?.into())
    }

    async fn get_thesis(
        &self,
        id: i64,
    ) -> Result<Thesis, BackendError> {
        self.get_json(&format!("theses/{id}")).await
    }

    async fn add_thesis(
        &self,
        input: &ThesisInput,
    ) -> Result<i64, BackendError> {
        self.create("theses", input).await
    }

    async fn update_thesis(
        &self,
        id: i64,
        input: &ThesisInput,
    ) -> Result<bool, BackendError> {
        self.update(&format!("theses/{id}"), input).await
    }

    async fn delete_thesis(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        self.delete(&format!("theses/{id}")).await
    }
}

#[async_trait]
impl SearchBackend for HttpPlatform {
    async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<ThesisListings, BackendError> {
        let rows: serde_json::Value = self.post_json("search", query).await?;
        match rows {
            serde_json::Value::Array(_) => Ok(
                serde_json::from_value::<Vec<ThesisListing>>(rows)
                    .map_err(|e| BackendError::Decode(e.to_string()))?
                    .into()
            ),
            _ => Ok(ThesisListings::default()),
        }
    }
}

#[async_trait]
impl StatusBackend for HttpPlatform {
    async fn health(&self) -> Result<Health, BackendError> {
        self.get_json("health").await
    }
}
