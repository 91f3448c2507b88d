use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    EntityKind,
    SearchKind,
};

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Thesis,
        EntityKind::Person,
        EntityKind::University,
        EntityKind::Institute,
    ];

    /// Path segment used by the routes of the application.
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::University => "university",
            EntityKind::Institute => "institute",
            EntityKind::Thesis => "thesis",
        }
    }

    /// Path segment of the REST collection under `/api`.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Person => "persons",
            EntityKind::University => "universities",
            EntityKind::Institute => "institutes",
            EntityKind::Thesis => "theses",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for EntityKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "person" | "persons" => Ok(EntityKind::Person),
            "university" | "universities" => Ok(EntityKind::University),
            "institute" | "institutes" => Ok(EntityKind::Institute),
            "thesis" | "theses" => Ok(EntityKind::Thesis),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl SearchKind {
    /// Whether this selection is answered by the remote search endpoint.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            SearchKind::All | SearchKind::Thesis | SearchKind::Topic | SearchKind::Keyword
        )
    }

    /// Whether the locally loaded collection of `kind` is filtered for
    /// this selection.
    pub fn filters_local(&self, kind: EntityKind) -> bool {
        match (self, kind) {
            (SearchKind::All, EntityKind::Thesis) => false,
            (SearchKind::All, _) => true,
            (SearchKind::Person, EntityKind::Person) => true,
            (SearchKind::University, EntityKind::University) => true,
            (SearchKind::Institute, EntityKind::Institute) => true,
            _ => false,
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<EntityKind> for SearchKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Person => SearchKind::Person,
            EntityKind::University => SearchKind::University,
            EntityKind::Institute => SearchKind::Institute,
            EntityKind::Thesis => SearchKind::Thesis,
        }
    }
}

impl FromStr for SearchKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "all" => Ok(SearchKind::All),
            "topic" => Ok(SearchKind::Topic),
            "keyword" => Ok(SearchKind::Keyword),
            s => EntityKind::from_str(s).map(SearchKind::from),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for EntityKind {
        fn value_variants<'a>() -> &'a [Self] {
            &EntityKind::ALL
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(PossibleValue::new(self.slug()).alias(self.collection()))
        }
    }

    impl ValueEnum for SearchKind {
        fn value_variants<'a>() -> &'a [Self] {
            &[
                SearchKind::All,
                SearchKind::Thesis,
                SearchKind::Person,
                SearchKind::University,
                SearchKind::Institute,
                SearchKind::Topic,
                SearchKind::Keyword,
            ]
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(match self {
                SearchKind::All => PossibleValue::new("All"),
                SearchKind::Thesis => PossibleValue::new("Thesis"),
                SearchKind::Person => PossibleValue::new("Person"),
                SearchKind::University => PossibleValue::new("University"),
                SearchKind::Institute => PossibleValue::new("Institute"),
                SearchKind::Topic => PossibleValue::new("Topic"),
                SearchKind::Keyword => PossibleValue::new("Keyword"),
            })
        }
    }
}
