use gtsclient::{
    AbortHandle,
    FetchGroup,
};
use gtscore::{
    error::BackendError,
    institute::{
        Institute,
        Institutes,
    },
    kind::EntityKind,
    person::Person,
    platform::GtsPlatform,
    thesis::{
        Thesis,
        ThesisSummaries,
    },
    university::{
        Universities,
        University,
    },
};
use crate::{
    app::route::Route,
    component::{
        UNKNOWN,
        long_date,
        or_unknown,
    },
    form::render_fields,
    state::ViewState,
    view::{
        LOADING,
        or_empty,
        tables,
    },
};

/// A loaded detail page: the record and whatever is listed under it.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    Person {
        person: Person,
        theses: ThesisSummaries,
    },
    University {
        university: University,
        institutes: Institutes,
        theses: ThesisSummaries,
    },
    Institute {
        institute: Institute,
        theses: ThesisSummaries,
    },
    Thesis(Thesis),
}

/// A reference to another record, shown as its name with the path of its
/// detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub label: String,
    pub route: Route,
}

impl Link {
    fn new(label: Option<&str>, kind: EntityKind, id: i64) -> Self {
        Self {
            label: or_unknown(label).to_string(),
            route: Route::details(kind, id),
        }
    }

    fn render(&self) -> String {
        format!("{} [{}]", self.label, self.route)
    }
}

impl Detail {
    /// The other records this page links to.
    pub fn links(&self) -> Vec<Link> {
        match self {
            Detail::Thesis(thesis) => vec![
                Link::new(thesis.author_name.as_deref(), EntityKind::Person, thesis.author_id),
                Link::new(thesis.university_name.as_deref(), EntityKind::University, thesis.university_id),
                Link::new(thesis.institute_name.as_deref(), EntityKind::Institute, thesis.institute_id),
            ],
            Detail::Institute { institute, .. } => vec![
                Link::new(
                    institute.university_name.as_deref(),
                    EntityKind::University,
                    institute.university_id,
                ),
            ],
            _ => vec![],
        }
    }

    fn render(&self) -> String {
        match self {
            Detail::Thesis(thesis) => {
                let links = self.links();
                let number = |value: Option<i32>| value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| UNKNOWN.to_string());
                let fields = vec![
                    ("Author", links[0].render()),
                    ("Year", number(thesis.thesis_year)),
                    ("Type", thesis.thesis_type.to_string()),
                    ("University", links[1].render()),
                    ("Institute", links[2].render()),
                    ("Pages", number(thesis.page_count)),
                    ("Language", thesis.language.to_string()),
                    ("Submitted", long_date(thesis.submission_date)),
                    ("Topics", thesis.topics.join(", ")),
                    ("Keywords", thesis.keywords.join(", ")),
                ];
                format!(
                    "{}\n\n{}\n\nAbstract\n\n{}",
                    thesis.title,
                    render_fields(&fields),
                    thesis.abstract_text,
                )
            }
            Detail::Person { person, theses } => {
                let fields = vec![(
                    "Phone",
                    or_unknown(person.phone_number.as_deref()).to_string(),
                )];
                format!(
                    "{}\n\n{}\n\nTheses\n\n{}",
                    person.full_name(),
                    render_fields(&fields),
                    tables::summaries(theses.iter()),
                )
            }
            Detail::University { university, institutes, theses } => {
                let fields = vec![("Location", university.location.clone())];
                format!(
                    "{}\n\n{}\n\nInstitutes\n\n{}\n\nTheses\n\n{}",
                    university.university_name,
                    render_fields(&fields),
                    tables::institutes(institutes.iter(), &Universities::from([university.clone()])),
                    tables::summaries(theses.iter()),
                )
            }
            Detail::Institute { institute, theses } => {
                let links = self.links();
                let fields = vec![("University", links[0].render())];
                format!(
                    "{}\n\n{}\n\nTheses\n\n{}",
                    institute.institute_name,
                    render_fields(&fields),
                    tables::summaries(theses.iter()),
                )
            }
        }
    }
}

/// The message shown when the record of a detail or edit page could not
/// be loaded.
pub(crate) fn load_error(kind: EntityKind, e: &BackendError, fallback: String) -> String {
    if e.is_not_found() {
        format!("{kind} not found")
    } else {
        fallback
    }
}

pub struct DetailView<'p, P> {
    platform: &'p P,
    fetch: FetchGroup,
    kind: EntityKind,
    id: i64,
    state: ViewState<Detail>,
}

impl<'p, P: GtsPlatform> DetailView<'p, P> {
    pub fn new(platform: &'p P, kind: EntityKind, id: i64) -> Self {
        Self {
            platform,
            fetch: FetchGroup::new(),
            kind,
            id,
            state: ViewState::Loading,
        }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.fetch.handle()
    }

    pub fn state(&self) -> &ViewState<Detail> {
        &self.state
    }

    /// Load the record together with its related listings.  Only the
    /// record itself decides between the error and the ready state; a
    /// related listing that fails to load is shown empty.
    pub async fn mount(&mut self) {
        let (platform, fetch, id) = (self.platform, &self.fetch, self.id);
        let result = match self.kind {
            EntityKind::Person => {
                let (person, theses) = futures::join!(
                    fetch.run(platform.get_person(id)),
                    fetch.run(platform.list_person_theses(id)),
                );
                person.map(|person| Detail::Person {
                    person,
                    theses: or_empty("person theses", theses),
                })
            }
            EntityKind::University => {
                let (university, institutes, theses) = futures::join!(
                    fetch.run(platform.get_university(id)),
                    fetch.run(platform.list_university_institutes(id)),
                    fetch.run(platform.list_university_theses(id)),
                );
                university.map(|university| Detail::University {
                    university,
                    institutes: or_empty("university institutes", institutes),
                    theses: or_empty("university theses", theses),
                })
            }
            EntityKind::Institute => {
                let (institute, theses) = futures::join!(
                    fetch.run(platform.get_institute(id)),
                    fetch.run(platform.list_institute_theses(id)),
                );
                institute.map(|institute| Detail::Institute {
                    institute,
                    theses: or_empty("institute theses", theses),
                })
            }
            EntityKind::Thesis => fetch.run(platform.get_thesis(id)).await
                .map(Detail::Thesis),
        };
        let kind = self.kind;
        self.state.settle(result, |e| load_error(
            kind,
            e,
            format!("Failed to load {} details.", kind.slug()),
        ));
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => LOADING.to_string(),
            ViewState::Error(message) => format!(
                "Error: {message}\n\nBack to dashboard [{}]",
                Route::Dashboard,
            ),
            ViewState::Ready(detail) => format!(
                "{} details\n\n{}\n\nEdit [{}]",
                self.kind,
                detail.render(),
                Route::edit(self.kind, self.id),
            ),
        }
    }
}

impl<P> Drop for DetailView<'_, P> {
    fn drop(&mut self) {
        self.fetch.abort();
    }
}
