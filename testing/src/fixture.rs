//! Canned records shared by the view tests.
use gtscore::{
    institute::{
        Institute,
        Institutes,
    },
    person::{
        Person,
        Persons,
    },
    thesis::{
        Thesis,
        ThesisListing,
        ThesisListings,
        ThesisSummary,
        ThesisSummaries,
    },
    university::{
        University,
        Universities,
    },
};

pub fn persons() -> Persons {
    serde_json::from_str::<Vec<Person>>(r#"[{
        "id": 1,
        "firstName": "Ada",
        "secondName": "Lovelace",
        "phoneNumber": "+44-555-0101"
    }, {
        "id": 2,
        "firstName": "Alan",
        "secondName": "Turing",
        "phoneNumber": "+44-555-0102"
    }, {
        "id": 3,
        "firstName": "Grace",
        "secondName": "Hopper",
        "phoneNumber": null
    }]"#)
        .expect("valid person fixture")
        .into()
}

pub fn universities() -> Universities {
    serde_json::from_str::<Vec<University>>(r#"[{
        "id": 1,
        "universityName": "Tech U",
        "location": "Springfield"
    }, {
        "id": 2,
        "universityName": "Ankara University",
        "location": "Ankara"
    }]"#)
        .expect("valid university fixture")
        .into()
}

pub fn institutes() -> Institutes {
    serde_json::from_str::<Vec<Institute>>(r#"[{
        "id": 7,
        "instituteName": "Institute of Computing",
        "universityId": 1,
        "universityName": "Tech U"
    }, {
        "id": 8,
        "instituteName": "Graduate School of Natural Sciences",
        "universityId": 2,
        "universityName": "Ankara University"
    }]"#)
        .expect("valid institute fixture")
        .into()
}

pub fn thesis_listings() -> ThesisListings {
    serde_json::from_str::<Vec<ThesisListing>>(r#"[{
        "th_num": 11,
        "title": "Turing Machines Revisited",
        "th_year": 2021,
        "th_type": "PhD",
        "author": "Alan Turing"
    }, {
        "th_num": 12,
        "title": "Analytical Engines",
        "th_year": 2023,
        "th_type": "Master",
        "author": "Ada Lovelace"
    }]"#)
        .expect("valid thesis listing fixture")
        .into()
}

pub fn thesis_summaries() -> ThesisSummaries {
    serde_json::from_str::<Vec<ThesisSummary>>(r#"[{
        "id": 11,
        "title": "Turing Machines Revisited",
        "thesisYear": 2021,
        "thesisType": "PhD",
        "pageCount": 240
    }]"#)
        .expect("valid thesis summary fixture")
        .into()
}

pub fn thesis() -> Thesis {
    serde_json::from_str(r#"{
        "id": 12,
        "title": "Analytical Engines",
        "abstract": "Notes on the engine.",
        "authorId": 1,
        "authorName": "Ada Lovelace",
        "thesisYear": 2023,
        "thesisType": "Master",
        "universityId": 1,
        "universityName": "Tech U",
        "instituteId": 7,
        "instituteName": "Institute of Computing",
        "pageCount": 120,
        "language": "English",
        "submissionDate": "Wed, 01 May 2024 00:00:00 GMT",
        "topics": ["Computation", "History"],
        "keywords": ["engine"]
    }"#)
        .expect("valid thesis fixture")
}
