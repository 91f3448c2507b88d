use std::ops::{
    Deref,
    DerefMut,
};
use crate::institute::*;

impl Institute {
    pub fn matches(&self, needle: &str) -> bool {
        self.institute_name.to_lowercase().contains(needle)
    }
}

impl From<&Institute> for InstituteInput {
    fn from(institute: &Institute) -> Self {
        Self {
            institute_name: institute.institute_name.clone(),
            university_id: institute.university_id,
        }
    }
}

impl Institutes {
    pub fn find(&self, id: i64) -> Option<&Institute> {
        self.0.iter().find(|i| i.id == id)
    }
}

impl From<Vec<Institute>> for Institutes {
    fn from(args: Vec<Institute>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Institute; N]> for Institutes {
    fn from(args: [Institute; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Institutes {
    type Target = Vec<Institute>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Institutes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_university_name() -> anyhow::Result<()> {
        let listed: Institute = serde_json::from_str(r#"{
            "id": 7,
            "instituteName": "Institute of Science",
            "universityId": 1,
            "universityName": "Tech U"
        }"#)?;
        let related: Institute = serde_json::from_str(r#"{
            "id": 8,
            "instituteName": "Institute of Arts",
            "universityId": 1
        }"#)?;
        assert_eq!(listed.university_name.as_deref(), Some("Tech U"));
        assert_eq!(related.university_name, None);
        assert!(listed.matches("science"));
        assert!(!related.matches("science"));
        assert_eq!(
            serde_json::to_value(InstituteInput::from(&listed))?,
            serde_json::json!({"instituteName": "Institute of Science", "universityId": 1}),
        );
        Ok(())
    }
}
