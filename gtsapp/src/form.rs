//! Drafts of the four entity forms.  Drafts hold raw text exactly as
//! entered; `validate` turns a draft into the payload sent to the API or
//! reports the first field that is not acceptable.
use chrono::NaiveDate;
use gtscore::{
    error::ValidationError,
    institute::{
        Institute,
        InstituteInput,
    },
    kind::EntityKind,
    person::{
        Person,
        PersonInput,
    },
    thesis::{
        Language,
        Thesis,
        ThesisInput,
        ThesisType,
        clean_terms,
        submission_date,
    },
    university::{
        University,
        UniversityInput,
    },
};
use std::ops::RangeInclusive;

pub const THESIS_YEARS: RangeInclusive<i32> = 1900..=2100;

fn required<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(value)
    }
}

fn selected(
    field: &'static str,
    value: &str,
) -> Result<i64, ValidationError> {
    required(field, value)?
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::Invalid { field, reason: "must be selected" })
}

fn number(
    field: &'static str,
    value: &str,
    range: RangeInclusive<i32>,
    reason: &'static str,
) -> Result<i32, ValidationError> {
    required(field, value)?
        .parse::<i32>()
        .ok()
        .filter(|n| range.contains(n))
        .ok_or(ValidationError::Invalid { field, reason })
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// A repeatable list of single-line text inputs (topics, keywords).
/// There is always at least one row, possibly blank.
#[derive(Clone, Debug, PartialEq)]
pub struct TextList {
    label: &'static str,
    rows: Vec<String>,
}

impl TextList {
    pub fn new(label: &'static str) -> Self {
        Self::with_rows(label, Vec::new())
    }

    pub fn with_rows(label: &'static str, mut rows: Vec<String>) -> Self {
        if rows.is_empty() {
            rows.push(String::new());
        }
        Self { label, rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn add(&mut self) {
        self.rows.push(String::new());
    }

    pub fn update(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = value.into();
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<(), ValidationError> {
        if self.rows.len() <= 1 {
            return Err(ValidationError::LastEntry(self.label));
        }
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        Ok(())
    }

    /// Replace every row with `values`, keeping the one-row minimum.
    pub fn set(&mut self, values: Vec<String>) {
        *self = Self::with_rows(self.label, values);
    }

    /// The entries to submit: trimmed, blanks dropped, order kept.
    pub fn values(&self) -> Vec<String> {
        clean_terms(&self.rows)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonForm {
    pub first_name: String,
    pub second_name: String,
    pub phone_number: String,
}

impl PersonForm {
    pub fn validate(&self) -> Result<PersonInput, ValidationError> {
        Ok(PersonInput {
            first_name: required("First name", &self.first_name)?.to_string(),
            second_name: required("Second name", &self.second_name)?.to_string(),
            phone_number: required("Phone number", &self.phone_number)?.to_string(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("First name", self.first_name.clone()),
            ("Second name", self.second_name.clone()),
            ("Phone number", self.phone_number.clone()),
        ]
    }
}

impl From<&Person> for PersonForm {
    fn from(person: &Person) -> Self {
        let input = PersonInput::from(person);
        Self {
            first_name: input.first_name,
            second_name: input.second_name,
            phone_number: input.phone_number,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniversityForm {
    pub university_name: String,
    pub location: String,
}

impl UniversityForm {
    pub fn validate(&self) -> Result<UniversityInput, ValidationError> {
        Ok(UniversityInput {
            university_name: required("University name", &self.university_name)?.to_string(),
            location: required("Location", &self.location)?.to_string(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("University name", self.university_name.clone()),
            ("Location", self.location.clone()),
        ]
    }
}

impl From<&University> for UniversityForm {
    fn from(university: &University) -> Self {
        Self {
            university_name: university.university_name.clone(),
            location: university.location.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstituteForm {
    pub institute_name: String,
    pub university_id: String,
}

impl InstituteForm {
    pub fn validate(&self) -> Result<InstituteInput, ValidationError> {
        Ok(InstituteInput {
            institute_name: required("Institute name", &self.institute_name)?.to_string(),
            university_id: selected("University", &self.university_id)?,
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Institute name", self.institute_name.clone()),
            ("University", self.university_id.clone()),
        ]
    }
}

impl From<&Institute> for InstituteForm {
    fn from(institute: &Institute) -> Self {
        Self {
            institute_name: institute.institute_name.clone(),
            university_id: institute.university_id.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThesisForm {
    pub title: String,
    pub abstract_text: String,
    pub author_id: String,
    pub thesis_year: String,
    pub thesis_type: String,
    pub university_id: String,
    pub institute_id: String,
    pub page_count: String,
    pub language: String,
    pub submission_date: String,
    pub topics: TextList,
    pub keywords: TextList,
}

impl Default for ThesisForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            abstract_text: String::new(),
            author_id: String::new(),
            thesis_year: String::new(),
            thesis_type: String::new(),
            university_id: String::new(),
            institute_id: String::new(),
            page_count: String::new(),
            language: String::new(),
            submission_date: String::new(),
            topics: TextList::new("topic"),
            keywords: TextList::new("keyword"),
        }
    }
}

impl ThesisForm {
    pub fn validate(&self) -> Result<ThesisInput, ValidationError> {
        let title = required("Title", &self.title)?.to_string();
        let abstract_text = required("Abstract", &self.abstract_text)?.to_string();
        let author_id = selected("Author", &self.author_id)?;
        let thesis_year = number(
            "Thesis year",
            &self.thesis_year,
            THESIS_YEARS,
            "must be between 1900 and 2100",
        )?;
        let thesis_type = required("Thesis type", &self.thesis_type)?
            .parse::<ThesisType>()?;
        let university_id = selected("University", &self.university_id)?;
        let institute_id = selected("Institute", &self.institute_id)?;
        let page_count = number(
            "Page count",
            &self.page_count,
            1..=i32::MAX,
            "must be at least 1",
        )?;
        let language = required("Language", &self.language)?
            .parse::<Language>()?;
        let submission_date = NaiveDate::parse_from_str(
            required("Submission date", &self.submission_date)?,
            submission_date::FORMAT,
        ).map_err(|_| ValidationError::Invalid {
            field: "Submission date",
            reason: "must be a date in the form YYYY-MM-DD",
        })?;
        Ok(ThesisInput {
            title,
            abstract_text,
            author_id,
            thesis_year,
            thesis_type,
            university_id,
            institute_id,
            page_count,
            language,
            submission_date,
            topics: self.topics.values(),
            keywords: self.keywords.values(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Abstract", self.abstract_text.clone()),
            ("Author", self.author_id.clone()),
            ("Thesis year", self.thesis_year.clone()),
            ("Thesis type", self.thesis_type.clone()),
            ("University", self.university_id.clone()),
            ("Institute", self.institute_id.clone()),
            ("Page count", self.page_count.clone()),
            ("Language", self.language.clone()),
            ("Submission date", self.submission_date.clone()),
            ("Topics", self.topics.rows().join(", ")),
            ("Keywords", self.keywords.rows().join(", ")),
        ]
    }
}

impl From<&Thesis> for ThesisForm {
    fn from(thesis: &Thesis) -> Self {
        Self {
            title: thesis.title.clone(),
            abstract_text: thesis.abstract_text.clone(),
            author_id: thesis.author_id.to_string(),
            thesis_year: optional(thesis.thesis_year),
            thesis_type: thesis.thesis_type.to_string(),
            university_id: thesis.university_id.to_string(),
            institute_id: thesis.institute_id.to_string(),
            page_count: optional(thesis.page_count),
            language: thesis.language.to_string(),
            submission_date: optional(thesis.submission_date
                .map(|date| date.format(submission_date::FORMAT))),
            topics: TextList::with_rows("topic", thesis.topics.clone()),
            keywords: TextList::with_rows("keyword", thesis.keywords.clone()),
        }
    }
}

/// The form shown by the create view for the selected kind.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityForm {
    Person(PersonForm),
    University(UniversityForm),
    Institute(InstituteForm),
    Thesis(ThesisForm),
}

impl EntityForm {
    pub fn new(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Person => EntityForm::Person(PersonForm::default()),
            EntityKind::University => EntityForm::University(UniversityForm::default()),
            EntityKind::Institute => EntityForm::Institute(InstituteForm::default()),
            EntityKind::Thesis => EntityForm::Thesis(ThesisForm::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityForm::Person(_) => EntityKind::Person,
            EntityForm::University(_) => EntityKind::University,
            EntityForm::Institute(_) => EntityKind::Institute,
            EntityForm::Thesis(_) => EntityKind::Thesis,
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            EntityForm::Person(form) => form.fields(),
            EntityForm::University(form) => form.fields(),
            EntityForm::Institute(form) => form.fields(),
            EntityForm::Thesis(form) => form.fields(),
        }
    }
}

/// Render form fields as `label: value` lines.
pub fn render_fields(fields: &[(&'static str, String)]) -> String {
    let width = fields.iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or_default();
    fields.iter()
        .map(|(label, value)| format!("{:<width$}  {value}", format!("{label}:"), width = width + 1)
            .trim_end()
            .to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use gtscore::error::ValueError;
    use super::*;

    fn thesis_form() -> ThesisForm {
        let mut form = ThesisForm {
            title: "Analytical Engines".to_string(),
            abstract_text: "Notes on the engine.".to_string(),
            author_id: "1".to_string(),
            thesis_year: "2023".to_string(),
            thesis_type: "Master".to_string(),
            university_id: "1".to_string(),
            institute_id: "7".to_string(),
            page_count: "120".to_string(),
            language: "English".to_string(),
            submission_date: "2024-05-01".to_string(),
            ..Default::default()
        };
        form.topics.set(vec![" Computation ".to_string(), "".to_string(), "History".to_string()]);
        form
    }

    #[test]
    fn text_list() {
        let mut list = TextList::new("topic");
        assert_eq!(list.rows(), [""]);
        assert_eq!(list.remove(0), Err(ValidationError::LastEntry("topic")));

        list.update(0, "  Computation");
        list.add();
        list.add();
        list.update(2, "History ");
        assert_eq!(list.rows().len(), 3);
        assert_eq!(list.values(), vec!["Computation", "History"]);

        list.remove(1).expect("more than one row");
        list.remove(0).expect("more than one row");
        assert_eq!(list.remove(0), Err(ValidationError::LastEntry("topic")));
        assert_eq!(list.values(), vec!["History"]);
    }

    #[test]
    fn person_required() {
        let form = PersonForm {
            first_name: "Ada".to_string(),
            second_name: " ".to_string(),
            phone_number: "555".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("Second name")));
        assert_eq!(
            ValidationError::Required("Second name").to_string(),
            "Second name is required",
        );
    }

    #[test]
    fn institute_selection() {
        let mut form = InstituteForm {
            institute_name: "Institute of Computing".to_string(),
            university_id: "none".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Invalid {
            field: "University",
            reason: "must be selected",
        }));
        form.university_id = "1".to_string();
        assert_eq!(form.validate(), Ok(InstituteInput {
            institute_name: "Institute of Computing".to_string(),
            university_id: 1,
        }));
    }

    #[test]
    fn thesis_valid() {
        let input = thesis_form().validate().expect("valid form");
        assert_eq!(input.thesis_type, ThesisType::Master);
        assert_eq!(input.submission_date, NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"));
        assert_eq!(input.topics, vec!["Computation", "History"]);
        assert!(input.keywords.is_empty());
    }

    #[test]
    fn thesis_bounds() {
        let mut form = thesis_form();
        form.thesis_year = "1899".to_string();
        assert_eq!(
            form.validate().map_err(|e| e.to_string()),
            Err("Thesis year must be between 1900 and 2100".to_string()),
        );
        form.thesis_year = "2100".to_string();
        form.page_count = "0".to_string();
        assert_eq!(
            form.validate().map_err(|e| e.to_string()),
            Err("Page count must be at least 1".to_string()),
        );
        form.page_count = "1".to_string();
        form.language = "Latin".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::Value(ValueError::Unsupported("latin".to_string()))),
        );
        form.language = "turkish".to_string();
        form.submission_date = "May 1st".to_string();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::Invalid { field: "Submission date", .. }),
        ));
    }

    #[test]
    fn prefill_empty_lists() {
        let thesis = test_gts::fixture::thesis();
        let form = ThesisForm::from(&Thesis {
            topics: vec![],
            submission_date: None,
            ..thesis.clone()
        });
        assert_eq!(form.topics.rows(), [""]);
        assert_eq!(form.submission_date, "");
        let form = ThesisForm::from(&thesis);
        assert_eq!(form.submission_date, "2024-05-01");
        assert_eq!(form.thesis_type, "Master");
        assert_eq!(form.validate().map(|input| input.topics), Ok(thesis.topics));
    }

    #[test]
    fn render() {
        let form = PersonForm {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(render_fields(&form.fields()), "\
First name:    Ada
Second name:
Phone number:");
    }
}
