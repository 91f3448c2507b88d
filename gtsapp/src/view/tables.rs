use gtscore::{
    institute::Institute,
    kind::EntityKind,
    person::Person,
    thesis::{
        ThesisListing,
        ThesisSummary,
    },
    university::{
        Universities,
        University,
    },
};
use crate::component::{
    Row,
    Table,
    or_unknown,
};

fn year(value: Option<i32>) -> String {
    value.map(|v| v.to_string())
        .unwrap_or_else(|| or_unknown(None).to_string())
}

/// The university an institute belongs to, by the name the server sent
/// along, else by the loaded universities, else by its raw id.
pub fn university_of(institute: &Institute, universities: &Universities) -> String {
    institute.university_name.clone()
        .filter(|name| !name.is_empty())
        .or_else(|| universities.find(institute.university_id)
            .map(|university| university.university_name.clone()))
        .unwrap_or_else(|| institute.university_id.to_string())
}

pub fn thesis_row(thesis: &ThesisListing) -> Row {
    Row::new(EntityKind::Thesis, thesis.id, vec![
        thesis.id.to_string(),
        thesis.title.clone(),
        or_unknown(Some(thesis.author_name.as_str())).to_string(),
        year(thesis.thesis_year),
        thesis.thesis_type.to_string(),
    ])
}

pub fn person_row(person: &Person) -> Row {
    Row::new(EntityKind::Person, person.id, vec![
        person.id.to_string(),
        person.first_name.clone(),
        person.second_name.clone(),
        person.phone_number.clone().unwrap_or_default(),
    ])
}

pub fn university_row(university: &University) -> Row {
    Row::new(EntityKind::University, university.id, vec![
        university.id.to_string(),
        university.university_name.clone(),
        university.location.clone(),
    ])
}

pub fn institute_row(institute: &Institute, universities: &Universities) -> Row {
    Row::new(EntityKind::Institute, institute.id, vec![
        institute.id.to_string(),
        institute.institute_name.clone(),
        university_of(institute, universities),
    ])
}

pub fn columns(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Thesis => vec!["ID", "Title", "Author", "Year", "Type"],
        EntityKind::Person => vec!["ID", "First Name", "Second Name", "Phone"],
        EntityKind::University => vec!["ID", "Name", "Location"],
        EntityKind::Institute => vec!["ID", "Name", "University"],
    }
}

pub fn theses<'a>(rows: impl IntoIterator<Item = &'a ThesisListing>) -> Table {
    Table::new(columns(EntityKind::Thesis), rows.into_iter().map(thesis_row).collect())
}

pub fn persons<'a>(rows: impl IntoIterator<Item = &'a Person>) -> Table {
    Table::new(columns(EntityKind::Person), rows.into_iter().map(person_row).collect())
}

pub fn universities<'a>(rows: impl IntoIterator<Item = &'a University>) -> Table {
    Table::new(columns(EntityKind::University), rows.into_iter().map(university_row).collect())
}

pub fn institutes<'a>(
    rows: impl IntoIterator<Item = &'a Institute>,
    universities: &Universities,
) -> Table {
    Table::new(
        columns(EntityKind::Institute),
        rows.into_iter()
            .map(|institute| institute_row(institute, universities))
            .collect(),
    )
}

/// The related theses listed on the detail pages.
pub fn summaries<'a>(rows: impl IntoIterator<Item = &'a ThesisSummary>) -> Table {
    Table::new(
        vec!["ID", "Title", "Year", "Type", "Pages"],
        rows.into_iter()
            .map(|thesis| Row::new(EntityKind::Thesis, thesis.id, vec![
                thesis.id.to_string(),
                thesis.title.clone(),
                year(thesis.thesis_year),
                thesis.thesis_type.to_string(),
                thesis.page_count.map(|n| n.to_string()).unwrap_or_default(),
            ]))
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use test_gts::fixture;
    use super::*;

    #[test]
    fn institute_university() {
        let universities = fixture::universities();
        let mut institutes = fixture::institutes();
        assert_eq!(university_of(&institutes[0], &universities), "Tech U");

        institutes[1].university_name = None;
        assert_eq!(university_of(&institutes[1], &universities), "Ankara University");
        institutes[1].university_id = 99;
        assert_eq!(university_of(&institutes[1], &universities), "99");
    }

    #[test]
    fn thesis_cells() {
        let mut listing = fixture::thesis_listings()[0].clone();
        listing.author_name = String::new();
        listing.thesis_year = None;
        assert_eq!(thesis_row(&listing).cells, vec![
            "11", "Turing Machines Revisited", "Unknown", "Unknown", "PhD",
        ]);
    }
}
