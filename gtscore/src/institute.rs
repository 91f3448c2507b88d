use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    pub id: i64,
    pub institute_name: String,
    pub university_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Institutes(Vec<Institute>);

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstituteInput {
    pub institute_name: String,
    pub university_id: i64,
}

mod impls;
pub mod traits;
