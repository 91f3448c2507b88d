use serde::{Deserialize, Serialize};

/// The four kinds of records managed through the API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum EntityKind {
    Person,
    University,
    Institute,
    Thesis,
}

/// The type selector of the search view.  `Topic` and `Keyword` are
/// passed through to the server, which matches them against the topic
/// and keyword tables respectively.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum SearchKind {
    #[default]
    All,
    Thesis,
    Person,
    University,
    Institute,
    Topic,
    Keyword,
}

mod impls;
