use crate::{
    kind::EntityKind,
    search::*,
};

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, kind: SearchKind) -> Self {
        Self {
            keyword: keyword.into(),
            kind,
        }
    }
}

impl SearchResult {
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchResult::Thesis(_) => EntityKind::Thesis,
            SearchResult::Person(_) => EntityKind::Person,
            SearchResult::University(_) => EntityKind::University,
            SearchResult::Institute(_) => EntityKind::Institute,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            SearchResult::Thesis(v) => v.id,
            SearchResult::Person(v) => v.id,
            SearchResult::University(v) => v.id,
            SearchResult::Institute(v) => v.id,
        }
    }

    /// The name the record is known by, as used for confirmation
    /// prompts and the information column.
    pub fn title(&self) -> String {
        match self {
            SearchResult::Thesis(v) => v.title.clone(),
            SearchResult::Person(v) => v.full_name(),
            SearchResult::University(v) => v.university_name.clone(),
            SearchResult::Institute(v) => v.institute_name.clone(),
        }
    }
}

impl From<ThesisListing> for SearchResult {
    fn from(value: ThesisListing) -> Self {
        SearchResult::Thesis(value)
    }
}

impl From<Person> for SearchResult {
    fn from(value: Person) -> Self {
        SearchResult::Person(value)
    }
}

impl From<University> for SearchResult {
    fn from(value: University) -> Self {
        SearchResult::University(value)
    }
}

impl From<Institute> for SearchResult {
    fn from(value: Institute) -> Self {
        SearchResult::Institute(value)
    }
}
