use gtsclient::{
    AbortHandle,
    FetchGroup,
};
use gtscore::{
    kind::EntityKind,
    platform::GtsPlatform,
};
use crate::{
    app::route::Route,
    component::or_unknown,
    error::AppError,
    form::{
        EntityForm,
        InstituteForm,
        PersonForm,
        ThesisForm,
        UniversityForm,
        render_fields,
    },
    state::{
        Navigation,
        SubmitState,
        ViewState,
    },
    view::{
        Entities,
        LOADING,
        create::render_options,
        detail::load_error,
        or_empty,
    },
};

/// A loaded edit page: the pre-filled form and the choices for its
/// relation fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Editing {
    pub form: EntityForm,
    pub options: Entities,
    /// The author of the thesis being edited, which is not editable.
    pub author: Option<(i64, String)>,
}

pub struct EditView<'p, P> {
    platform: &'p P,
    fetch: FetchGroup,
    kind: EntityKind,
    id: i64,
    state: ViewState<Editing>,
    submit: SubmitState,
}

impl<'p, P: GtsPlatform> EditView<'p, P> {
    pub fn new(platform: &'p P, kind: EntityKind, id: i64) -> Self {
        Self {
            platform,
            fetch: FetchGroup::new(),
            kind,
            id,
            state: ViewState::Loading,
            submit: SubmitState::Idle,
        }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.fetch.handle()
    }

    pub async fn mount(&mut self) {
        let (platform, fetch, id) = (self.platform, &self.fetch, self.id);
        let result = match self.kind {
            EntityKind::Person => fetch.run(platform.get_person(id)).await
                .map(|person| Editing {
                    form: EntityForm::Person(PersonForm::from(&person)),
                    options: Entities::default(),
                    author: None,
                }),
            EntityKind::University => fetch.run(platform.get_university(id)).await
                .map(|university| Editing {
                    form: EntityForm::University(UniversityForm::from(&university)),
                    options: Entities::default(),
                    author: None,
                }),
            EntityKind::Institute => {
                let (institute, universities) = futures::join!(
                    fetch.run(platform.get_institute(id)),
                    fetch.run(platform.list_universities()),
                );
                institute.map(|institute| Editing {
                    form: EntityForm::Institute(InstituteForm::from(&institute)),
                    options: Entities {
                        universities: or_empty("universities", universities),
                        ..Default::default()
                    },
                    author: None,
                })
            }
            EntityKind::Thesis => {
                let (thesis, universities, institutes) = futures::join!(
                    fetch.run(platform.get_thesis(id)),
                    fetch.run(platform.list_universities()),
                    fetch.run(platform.list_institutes()),
                );
                thesis.map(|thesis| Editing {
                    form: EntityForm::Thesis(ThesisForm::from(&thesis)),
                    options: Entities {
                        universities: or_empty("universities", universities),
                        institutes: or_empty("institutes", institutes),
                        ..Default::default()
                    },
                    author: Some((
                        thesis.author_id,
                        thesis.author_name.clone().unwrap_or_default(),
                    )),
                })
            }
        };
        let kind = self.kind;
        self.state.settle(result, |e| load_error(
            kind,
            e,
            format!("Failed to load {}.", kind.slug()),
        ));
    }

    pub fn state(&self) -> &ViewState<Editing> {
        &self.state
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    /// The pre-filled form, once loaded.
    pub fn form_mut(&mut self) -> Option<&mut EntityForm> {
        self.state.ready_mut().map(|editing| &mut editing.form)
    }

    async fn send(&self, editing: &Editing) -> Result<bool, AppError> {
        let (platform, id) = (self.platform, self.id);
        let ok = match &editing.form {
            EntityForm::Person(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.update_person(id, &input)).await?
            }
            EntityForm::University(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.update_university(id, &input)).await?
            }
            EntityForm::Institute(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.update_institute(id, &input)).await?
            }
            EntityForm::Thesis(form) => {
                let mut form = form.clone();
                if let Some((author_id, _)) = &editing.author {
                    form.author_id = author_id.to_string();
                }
                let input = form.validate()?;
                self.fetch.run(platform.update_thesis(id, &input)).await?
            }
        };
        Ok(ok)
    }

    /// Submit the whole record.  The author of a thesis always goes back
    /// as it was loaded, whatever the form holds.
    pub async fn submit(&mut self) -> &SubmitState {
        let Some(editing) = self.state.ready().cloned() else {
            return &self.submit;
        };
        let kind = self.kind;
        self.submit = SubmitState::Submitting;
        self.submit = match self.send(&editing).await {
            Ok(_) => {
                log::debug!("updated {kind} {}", self.id);
                SubmitState::Navigated(Navigation {
                    route: Route::Dashboard,
                    notice: format!("{kind} updated successfully!"),
                })
            }
            Err(AppError::Backend(e)) if e.is_aborted() => SubmitState::Idle,
            Err(AppError::Backend(e)) => SubmitState::Failed(
                e.message_or(&format!("Failed to update {}.", kind.slug()))
            ),
            Err(e) => SubmitState::Failed(e.to_string()),
        };
        &self.submit
    }

    pub fn render(&self) -> String {
        let editing = match &self.state {
            ViewState::Loading => return LOADING.to_string(),
            ViewState::Error(message) => return format!(
                "Error: {message}\n\nBack to dashboard [{}]",
                Route::Dashboard,
            ),
            ViewState::Ready(editing) => editing,
        };
        let mut page = vec![format!("Edit {} {}", self.kind, self.id)];
        if let Some((author_id, name)) = &editing.author {
            page.push(format!(
                "Author: {} [{}] (cannot be changed)",
                or_unknown(Some(name.as_str())),
                Route::details(EntityKind::Person, *author_id),
            ));
        }
        let options = render_options(self.kind, &editing.options)
            .lines()
            .filter(|line| !line.starts_with("Authors:"))
            .collect::<Vec<_>>()
            .join("\n");
        if !options.is_empty() {
            page.push(options);
        }
        let fields = editing.form.fields()
            .into_iter()
            .filter(|(label, _)| *label != "Author")
            .collect::<Vec<_>>();
        page.push(render_fields(&fields));
        if let Some(error) = self.submit.error() {
            page.push(format!("Error: {error}"));
        }
        page.join("\n\n")
    }
}

impl<P> Drop for EditView<'_, P> {
    fn drop(&mut self) {
        self.fetch.abort();
    }
}
