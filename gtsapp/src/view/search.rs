use gtsclient::{
    AbortHandle,
    FetchGroup,
};
use gtscore::{
    error::ValidationError,
    kind::{
        EntityKind,
        SearchKind,
    },
    platform::GtsPlatform,
    search::{
        SearchQuery,
        SearchResult,
    },
};
use crate::component::{
    DeleteConfirmation,
    Row,
    Table,
    or_unknown,
};
use crate::view::{
    DELETE_FAILED,
    ENTITIES_FAILED,
    Entities,
    LOADING,
    load_entities,
    tables,
};

pub struct SearchView<'p, P> {
    platform: &'p P,
    fetch: FetchGroup,
    mounted: bool,
    searched: bool,
    keyword: String,
    kind: SearchKind,
    entities: Entities,
    entities_error: Option<String>,
    validation: Option<String>,
    remote_error: Option<String>,
    results: Vec<SearchResult>,
    dialog: Option<DeleteConfirmation>,
}

impl<'p, P: GtsPlatform> SearchView<'p, P> {
    pub fn new(platform: &'p P) -> Self {
        Self {
            platform,
            fetch: FetchGroup::new(),
            mounted: false,
            searched: false,
            keyword: String::new(),
            kind: SearchKind::default(),
            entities: Entities::default(),
            entities_error: None,
            validation: None,
            remote_error: None,
            results: Vec::new(),
            dialog: None,
        }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.fetch.handle()
    }

    /// Load the collections filtered locally; the theses are searched
    /// on the server instead.
    pub async fn mount(&mut self) {
        match load_entities(self.platform, &self.fetch).await {
            Ok(entities) => self.entities = entities,
            Err(e) if e.is_aborted() => return,
            Err(e) => {
                log::warn!("failed to load entities: {e}");
                self.entities_error = Some(ENTITIES_FAILED.to_string());
            }
        }
        self.mounted = true;
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_kind(&mut self, kind: SearchKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    pub fn remote_error(&self) -> Option<&str> {
        self.remote_error.as_deref()
    }

    pub fn entities_error(&self) -> Option<&str> {
        self.entities_error.as_deref()
    }

    /// Run the search for the current keyword and type.  Remote rows come
    /// first, followed by the local matches on persons, universities and
    /// institutes, in that order.
    pub async fn search(&mut self) {
        let needle = self.keyword.trim().to_lowercase();
        self.remote_error = None;
        if needle.is_empty() {
            self.validation = Some(ValidationError::EmptyKeyword.to_string());
            self.results.clear();
            return;
        }
        self.validation = None;
        self.searched = true;

        let mut results = Vec::new();
        if self.kind.is_remote() {
            let query = SearchQuery::new(self.keyword.trim(), self.kind);
            match self.fetch.run(self.platform.search(&query)).await {
                Ok(rows) => results.extend(rows.into_iter().map(SearchResult::from)),
                Err(e) if e.is_aborted() => return,
                Err(e) => {
                    log::warn!("remote search failed: {e}");
                    self.remote_error = Some(e.to_string());
                }
            }
        }
        if self.kind.filters_local(EntityKind::Person) {
            results.extend(self.entities.persons.iter()
                .filter(|v| v.matches(&needle))
                .cloned()
                .map(SearchResult::from));
        }
        if self.kind.filters_local(EntityKind::University) {
            results.extend(self.entities.universities.iter()
                .filter(|v| v.matches(&needle))
                .cloned()
                .map(SearchResult::from));
        }
        if self.kind.filters_local(EntityKind::Institute) {
            results.extend(self.entities.institutes.iter()
                .filter(|v| v.matches(&needle))
                .cloned()
                .map(SearchResult::from));
        }
        log::debug!("search {:?} ({}): {} result(s)", self.keyword, self.kind, results.len());
        self.results = results;
    }

    fn information(&self, result: &SearchResult) -> String {
        match result {
            SearchResult::Thesis(v) => format!(
                "{} by {}",
                v.title,
                or_unknown(Some(v.author_name.as_str())),
            ),
            SearchResult::Person(v) => v.full_name(),
            SearchResult::University(v) => format!("{}, {}", v.university_name, v.location),
            SearchResult::Institute(v) => format!(
                "{} ({})",
                v.institute_name,
                tables::university_of(v, &self.entities.universities),
            ),
        }
    }

    /// The results as a table.  A search over everything uses a
    /// Type/ID/Information layout; a narrowed search uses the columns of
    /// the kind searched for.
    pub fn table(&self) -> Table {
        if self.kind == SearchKind::All {
            let rows = self.results.iter()
                .map(|result| Row::new(result.kind(), result.id(), vec![
                    result.kind().to_string(),
                    result.id().to_string(),
                    self.information(result),
                ]))
                .collect();
            return Table::new(vec!["Type", "ID", "Information"], rows);
        }
        let kind = match self.kind {
            SearchKind::Person => EntityKind::Person,
            SearchKind::University => EntityKind::University,
            SearchKind::Institute => EntityKind::Institute,
            _ => EntityKind::Thesis,
        };
        let rows = self.results.iter()
            .map(|result| match result {
                SearchResult::Thesis(v) => tables::thesis_row(v),
                SearchResult::Person(v) => tables::person_row(v),
                SearchResult::University(v) => tables::university_row(v),
                SearchResult::Institute(v) => tables::institute_row(v, &self.entities.universities),
            })
            .collect();
        Table::new(tables::columns(kind), rows)
    }

    pub fn request_delete(&mut self, kind: EntityKind, id: i64) -> Option<&DeleteConfirmation> {
        let result = self.results.iter()
            .find(|result| result.kind() == kind && result.id() == id)?;
        self.dialog = Some(DeleteConfirmation::new(kind, id, result.title()));
        self.dialog.as_ref()
    }

    pub fn dialog(&self) -> Option<&DeleteConfirmation> {
        self.dialog.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.dialog = None;
    }

    /// Delete the record in the open dialog, drop it from the loaded
    /// collections and search again.
    pub async fn confirm_delete(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        self.entities_error = None;
        match self.fetch.run(self.platform.delete_entity(dialog.kind, dialog.id)).await {
            Ok(_) => {
                let id = dialog.id;
                match dialog.kind {
                    EntityKind::Person => self.entities.persons.retain(|v| v.id != id),
                    EntityKind::University => self.entities.universities.retain(|v| v.id != id),
                    EntityKind::Institute => self.entities.institutes.retain(|v| v.id != id),
                    EntityKind::Thesis => (),
                }
            }
            Err(e) if e.is_aborted() => return,
            Err(e) => {
                log::warn!("failed to delete {} {}: {e}", dialog.kind, dialog.id);
                self.entities_error = Some(e.message_or(DELETE_FAILED));
            }
        }
        self.search().await;
    }

    pub fn render(&self) -> String {
        if !self.mounted {
            return LOADING.to_string();
        }
        let mut page = vec![format!("Search: {:?} in {}", self.keyword.trim(), self.kind)];
        for message in [&self.entities_error, &self.validation, &self.remote_error]
            .into_iter()
            .flatten()
        {
            page.push(format!("Error: {message}"));
        }
        if self.searched && self.validation.is_none() {
            page.push(format!("{} result(s)", self.results.len()));
            page.push(self.table().to_string());
        }
        if let Some(dialog) = &self.dialog {
            page.push(dialog.to_string());
        }
        page.join("\n\n")
    }
}

impl<P> Drop for SearchView<'_, P> {
    fn drop(&mut self) {
        self.fetch.abort();
    }
}
