use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ThesisType {
    Master,
    PhD,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Language {
    English,
    Turkish,
    German,
    French,
}

/// The full thesis record as returned by `GET /api/theses/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thesis {
    pub id: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub author_id: i64,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub thesis_year: Option<i32>,
    pub thesis_type: ThesisType,
    pub university_id: i64,
    #[serde(default)]
    pub university_name: Option<String>,
    pub institute_id: i64,
    #[serde(default)]
    pub institute_name: Option<String>,
    #[serde(default)]
    pub page_count: Option<i32>,
    pub language: Language,
    #[serde(default, with = "submission_date")]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A row of the thesis listing and of search results.  The server names
/// these fields after its own columns (`th_num`, `th_year`, `th_type`,
/// `author`); they are mapped to the display names on the way in.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisListing {
    #[serde(rename(deserialize = "th_num"))]
    pub id: i64,
    pub title: String,
    #[serde(default, rename(deserialize = "th_year"))]
    pub thesis_year: Option<i32>,
    #[serde(rename(deserialize = "th_type"))]
    pub thesis_type: ThesisType,
    #[serde(default, rename(deserialize = "author"))]
    pub author_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThesisListings(Vec<ThesisListing>);

/// The abbreviated thesis rows of the related listings under persons,
/// universities and institutes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thesis_year: Option<i32>,
    pub thesis_type: ThesisType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThesisSummaries(Vec<ThesisSummary>);

/// Body of `POST /api/theses` and `PUT /api/theses/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisInput {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub author_id: i64,
    pub thesis_year: i32,
    pub thesis_type: ThesisType,
    pub university_id: i64,
    pub institute_id: i64,
    pub page_count: i32,
    pub language: Language,
    pub submission_date: NaiveDate,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
}

/// Trims every entry and drops the blank ones, preserving order.
pub fn clean_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms.iter()
        .map(|term| term.as_ref().trim())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

mod impls;
pub mod submission_date;
pub mod traits;
