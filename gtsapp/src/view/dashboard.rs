use gtsclient::{
    AbortHandle,
    FetchGroup,
};
use gtscore::{
    kind::EntityKind,
    platform::GtsPlatform,
    thesis::ThesisListings,
};
use crate::{
    component::{
        DeleteConfirmation,
        Table,
    },
    view::{
        DELETE_FAILED,
        ENTITIES_FAILED,
        Entities,
        LOADING,
        THESES_FAILED,
        load_entities,
        tables,
    },
};

/// The landing page: one tab per collection, each a table of records
/// with their actions.
pub struct Dashboard<'p, P> {
    platform: &'p P,
    fetch: FetchGroup,
    mounted: bool,
    tab: EntityKind,
    theses: ThesisListings,
    entities: Entities,
    theses_error: Option<String>,
    entities_error: Option<String>,
    dialog: Option<DeleteConfirmation>,
    notice: Option<String>,
}

impl<'p, P: GtsPlatform> Dashboard<'p, P> {
    pub fn new(platform: &'p P) -> Self {
        Self {
            platform,
            fetch: FetchGroup::new(),
            mounted: false,
            tab: EntityKind::Thesis,
            theses: ThesisListings::default(),
            entities: Entities::default(),
            theses_error: None,
            entities_error: None,
            dialog: None,
            notice: None,
        }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.fetch.handle()
    }

    pub async fn mount(&mut self) {
        let (theses, entities) = futures::join!(
            self.fetch.run(self.platform.list_theses()),
            load_entities(self.platform, &self.fetch),
        );
        match theses {
            Ok(theses) => self.theses = theses,
            Err(e) if e.is_aborted() => return,
            Err(e) => {
                log::warn!("failed to load theses: {e}");
                self.theses_error = Some(THESES_FAILED.to_string());
            }
        }
        match entities {
            Ok(entities) => self.entities = entities,
            Err(e) if e.is_aborted() => return,
            Err(e) => {
                log::warn!("failed to load entities: {e}");
                self.entities_error = Some(ENTITIES_FAILED.to_string());
            }
        }
        self.mounted = true;
    }

    /// Show a confirmation carried over from the page that navigated here.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn tab(&self) -> EntityKind {
        self.tab
    }

    pub fn select_tab(&mut self, kind: EntityKind) {
        self.tab = kind;
    }

    pub fn theses(&self) -> &ThesisListings {
        &self.theses
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Thesis => self.theses.len(),
            EntityKind::Person => self.entities.persons.len(),
            EntityKind::University => self.entities.universities.len(),
            EntityKind::Institute => self.entities.institutes.len(),
        }
    }

    /// The error shown on the tab of `kind`; the three non-thesis tabs
    /// share one.
    pub fn error(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Thesis => self.theses_error.as_deref(),
            _ => self.entities_error.as_deref(),
        }
    }

    fn error_slot(&mut self, kind: EntityKind) -> &mut Option<String> {
        match kind {
            EntityKind::Thesis => &mut self.theses_error,
            _ => &mut self.entities_error,
        }
    }

    pub fn table(&self) -> Table {
        self.table_for(self.tab)
    }

    pub fn table_for(&self, kind: EntityKind) -> Table {
        match kind {
            EntityKind::Thesis => tables::theses(self.theses.iter()),
            EntityKind::Person => tables::persons(self.entities.persons.iter()),
            EntityKind::University => tables::universities(self.entities.universities.iter()),
            EntityKind::Institute => tables::institutes(
                self.entities.institutes.iter(),
                &self.entities.universities,
            ),
        }
    }

    /// The name a record is presented by in the delete dialog.
    fn title_of(&self, kind: EntityKind, id: i64) -> Option<String> {
        match kind {
            EntityKind::Thesis => self.theses.iter()
                .find(|v| v.id == id)
                .map(|v| v.title.clone()),
            EntityKind::Person => self.entities.persons.iter()
                .find(|v| v.id == id)
                .map(|v| v.full_name()),
            EntityKind::University => self.entities.universities.find(id)
                .map(|v| v.university_name.clone()),
            EntityKind::Institute => self.entities.institutes.find(id)
                .map(|v| v.institute_name.clone()),
        }
    }

    /// Open the confirmation dialog for a listed record.
    pub fn request_delete(&mut self, kind: EntityKind, id: i64) -> Option<&DeleteConfirmation> {
        let title = self.title_of(kind, id)?;
        self.dialog = Some(DeleteConfirmation::new(kind, id, title));
        self.dialog.as_ref()
    }

    pub fn dialog(&self) -> Option<&DeleteConfirmation> {
        self.dialog.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.dialog = None;
    }

    /// Delete the record in the open dialog.  The dialog closes either
    /// way; on success only the affected collection is loaded again.
    pub async fn confirm_delete(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        match self.fetch.run(self.platform.delete_entity(dialog.kind, dialog.id)).await {
            Ok(_) => {
                log::debug!("deleted {} {}", dialog.kind, dialog.id);
                self.reload(dialog.kind).await;
            }
            Err(e) if e.is_aborted() => (),
            Err(e) => {
                log::warn!("failed to delete {} {}: {e}", dialog.kind, dialog.id);
                *self.error_slot(dialog.kind) = Some(e.message_or(DELETE_FAILED));
            }
        }
    }

    async fn reload(&mut self, kind: EntityKind) {
        let platform = self.platform;
        let result = match kind {
            EntityKind::Thesis => self.fetch.run(platform.list_theses()).await
                .map(|v| self.theses = v),
            EntityKind::Person => self.fetch.run(platform.list_persons()).await
                .map(|v| self.entities.persons = v),
            EntityKind::University => self.fetch.run(platform.list_universities()).await
                .map(|v| self.entities.universities = v),
            EntityKind::Institute => self.fetch.run(platform.list_institutes()).await
                .map(|v| self.entities.institutes = v),
        };
        match result {
            Ok(()) => *self.error_slot(kind) = None,
            Err(e) if e.is_aborted() => (),
            Err(e) => {
                log::warn!("failed to reload {}: {e}", kind.collection());
                *self.error_slot(kind) = Some(match kind {
                    EntityKind::Thesis => THESES_FAILED,
                    _ => ENTITIES_FAILED,
                }.to_string());
            }
        }
    }

    fn tab_label(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Thesis => "Theses",
            EntityKind::Person => "People",
            EntityKind::University => "Universities",
            EntityKind::Institute => "Institutes",
        }
    }

    pub fn render(&self) -> String {
        if !self.mounted {
            return LOADING.to_string();
        }
        let tabs = EntityKind::ALL.iter()
            .map(|kind| {
                let label = format!("{} ({})", Self::tab_label(*kind), self.count(*kind));
                if *kind == self.tab {
                    format!("[{label}]")
                } else {
                    label
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        let mut page = Vec::new();
        if let Some(notice) = &self.notice {
            page.push(notice.clone());
        }
        page.push(tabs);
        if let Some(error) = self.error(self.tab) {
            page.push(format!("Error: {error}"));
        }
        page.push(self.table().to_string());
        if let Some(dialog) = &self.dialog {
            page.push(dialog.to_string());
        }
        page.join("\n\n")
    }
}

impl<P> Drop for Dashboard<'_, P> {
    fn drop(&mut self) {
        self.fetch.abort();
    }
}
