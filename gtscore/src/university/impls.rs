use std::ops::{
    Deref,
    DerefMut,
};
use crate::university::*;

impl University {
    /// Substring match on name or location; `needle` must already be
    /// lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.university_name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}

impl From<&University> for UniversityInput {
    fn from(university: &University) -> Self {
        Self {
            university_name: university.university_name.clone(),
            location: university.location.clone(),
        }
    }
}

impl Universities {
    pub fn find(&self, id: i64) -> Option<&University> {
        self.0.iter().find(|u| u.id == id)
    }
}

impl From<Vec<University>> for Universities {
    fn from(args: Vec<University>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[University; N]> for Universities {
    fn from(args: [University; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Universities {
    type Target = Vec<University>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Universities {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
