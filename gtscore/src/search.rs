use serde::{Deserialize, Serialize};
use crate::{
    institute::Institute,
    kind::SearchKind,
    person::Person,
    thesis::ThesisListing,
    university::University,
};

/// Body of `POST /api/search`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SearchQuery {
    pub keyword: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
}

/// One row of the heterogeneous search result list, tagged by the kind
/// of record it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "entityType")]
pub enum SearchResult {
    Thesis(ThesisListing),
    Person(Person),
    University(University),
    Institute(Institute),
}

mod impls;
pub mod traits;
