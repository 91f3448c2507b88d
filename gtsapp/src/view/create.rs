use gtsclient::{
    AbortHandle,
    FetchGroup,
};
use gtscore::{
    kind::EntityKind,
    platform::GtsPlatform,
    thesis::{
        Language,
        ThesisType,
    },
};
use crate::{
    app::route::Route,
    error::AppError,
    form::{
        EntityForm,
        render_fields,
    },
    state::{
        Navigation,
        SubmitState,
        ViewState,
    },
    view::{
        DROPDOWN_FAILED,
        Entities,
        LOADING,
        load_entities,
    },
};

/// The "Add Data" page: one form at a time for the selected kind, with
/// the dropdown choices loaded once on mount.
pub struct CreateView<'p, P> {
    platform: &'p P,
    fetch: FetchGroup,
    options: ViewState<Entities>,
    form: EntityForm,
    submit: SubmitState,
}

/// The choices for the relation fields, as `id name` lines.
pub(crate) fn render_options(kind: EntityKind, options: &Entities) -> String {
    let mut lines = Vec::new();
    if kind == EntityKind::Thesis {
        lines.push(format!(
            "Authors: {}",
            options.persons.iter()
                .map(|v| format!("{} {}", v.id, v.full_name()))
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }
    if matches!(kind, EntityKind::Thesis | EntityKind::Institute) {
        lines.push(format!(
            "Universities: {}",
            options.universities.iter()
                .map(|v| format!("{} {}", v.id, v.university_name))
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }
    if kind == EntityKind::Thesis {
        lines.push(format!(
            "Institutes: {}",
            options.institutes.iter()
                .map(|v| format!("{} {}", v.id, v.institute_name))
                .collect::<Vec<_>>()
                .join("; "),
        ));
        lines.push(format!("Thesis types: {}", ThesisType::ALL.map(|v| v.to_string()).join(", ")));
        lines.push(format!("Languages: {}", Language::ALL.map(|v| v.to_string()).join(", ")));
    }
    lines.join("\n")
}

impl<'p, P: GtsPlatform> CreateView<'p, P> {
    pub fn new(platform: &'p P) -> Self {
        Self {
            platform,
            fetch: FetchGroup::new(),
            options: ViewState::Loading,
            form: EntityForm::new(EntityKind::Person),
            submit: SubmitState::Idle,
        }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.fetch.handle()
    }

    pub async fn mount(&mut self) {
        let result = load_entities(self.platform, &self.fetch).await;
        self.options.settle(result, |_| DROPDOWN_FAILED.to_string());
    }

    pub fn options(&self) -> &ViewState<Entities> {
        &self.options
    }

    pub fn kind(&self) -> EntityKind {
        self.form.kind()
    }

    /// Switch the form to another kind, starting from a blank draft.
    pub fn select_kind(&mut self, kind: EntityKind) {
        if self.form.kind() != kind {
            self.form = EntityForm::new(kind);
            self.submit = SubmitState::Idle;
        }
    }

    pub fn form(&self) -> &EntityForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntityForm {
        &mut self.form
    }

    pub fn state(&self) -> &SubmitState {
        &self.submit
    }

    async fn send(&self) -> Result<i64, AppError> {
        let platform = self.platform;
        let id = match &self.form {
            EntityForm::Person(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.add_person(&input)).await?
            }
            EntityForm::University(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.add_university(&input)).await?
            }
            EntityForm::Institute(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.add_institute(&input)).await?
            }
            EntityForm::Thesis(form) => {
                let input = form.validate()?;
                self.fetch.run(platform.add_thesis(&input)).await?
            }
        };
        Ok(id)
    }

    /// Validate and submit the form.  Success leads to the dashboard;
    /// failure keeps the draft and shows why.
    pub async fn submit(&mut self) -> &SubmitState {
        let kind = self.form.kind();
        self.submit = SubmitState::Submitting;
        self.submit = match self.send().await {
            Ok(id) => {
                log::debug!("created {kind} {id}");
                SubmitState::Navigated(Navigation {
                    route: Route::Dashboard,
                    notice: format!("{kind} added successfully!"),
                })
            }
            Err(AppError::Backend(e)) if e.is_aborted() => SubmitState::Idle,
            Err(AppError::Backend(e)) => SubmitState::Failed(
                e.message_or(&format!("Failed to add {}.", kind.slug()))
            ),
            Err(e) => SubmitState::Failed(e.to_string()),
        };
        &self.submit
    }

    pub fn render(&self) -> String {
        let kinds = EntityKind::ALL.iter()
            .map(|kind| if *kind == self.kind() {
                format!("[{kind}]")
            } else {
                kind.to_string()
            })
            .collect::<Vec<_>>()
            .join(" | ");
        let mut page = vec![format!("Add {}", self.kind()), kinds];
        match &self.options {
            ViewState::Loading => page.push(LOADING.to_string()),
            ViewState::Error(message) => page.push(format!("Error: {message}")),
            ViewState::Ready(options) => {
                let options = render_options(self.kind(), options);
                if !options.is_empty() {
                    page.push(options);
                }
            }
        }
        page.push(render_fields(&self.form.fields()));
        if let Some(error) = self.submit.error() {
            page.push(format!("Error: {error}"));
        }
        page.join("\n\n")
    }
}

impl<P> Drop for CreateView<'_, P> {
    fn drop(&mut self) {
        self.fetch.abort();
    }
}
