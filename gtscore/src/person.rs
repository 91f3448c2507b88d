use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    // stored as NULL when submitted blank
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Persons(Vec<Person>);

/// Body of `POST /api/persons` and `PUT /api/persons/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub first_name: String,
    pub second_name: String,
    pub phone_number: String,
}

mod impls;
pub mod traits;
