use gtscore::kind::EntityKind;
use std::fmt;

/// The pending delete a view is asking the user to confirm.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfirmation {
    pub kind: EntityKind,
    pub id: i64,
    pub title: String,
}

impl DeleteConfirmation {
    pub fn new(kind: EntityKind, id: i64, title: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            title: title.into(),
        }
    }
}

impl fmt::Display for DeleteConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.title,
        )
    }
}
