//! The pages of the application as headless view models.  A view is
//! created against a platform, mounted (which performs its loads), driven
//! through its operations and rendered to text.

pub mod create;
pub mod dashboard;
pub mod detail;
pub mod edit;
pub mod search;
pub mod tables;

use gtsclient::FetchGroup;
use gtscore::{
    error::BackendError,
    institute::Institutes,
    person::Persons,
    platform::GtsPlatform,
    university::Universities,
};
use crate::app::{
    chrome,
    route::Route,
};

pub const THESES_FAILED: &str = "Failed to load theses from the API.";
pub const ENTITIES_FAILED: &str = "Failed to load people, universities, and institutes from the API.";
pub const DROPDOWN_FAILED: &str = "Failed to load dropdown data from the API.";
pub const DELETE_FAILED: &str = "Failed to delete from the API.";
pub const LOADING: &str = "Loading...";

/// The three collections most pages need besides the theses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entities {
    pub persons: Persons,
    pub universities: Universities,
    pub institutes: Institutes,
}

/// Load the persons, universities and institutes concurrently; the
/// first failure fails the whole set.
pub async fn load_entities<P: GtsPlatform>(
    platform: &P,
    fetch: &FetchGroup,
) -> Result<Entities, BackendError> {
    let (persons, universities, institutes) = futures::join!(
        fetch.run(platform.list_persons()),
        fetch.run(platform.list_universities()),
        fetch.run(platform.list_institutes()),
    );
    Ok(Entities {
        persons: persons?,
        universities: universities?,
        institutes: institutes?,
    })
}

/// Unwrap a secondary load, falling back to the empty collection.
pub(crate) fn or_empty<T: Default>(what: &str, result: Result<T, BackendError>) -> T {
    result.unwrap_or_else(|e| {
        if !e.is_aborted() {
            log::warn!("failed to load {what}: {e}");
        }
        T::default()
    })
}

/// Mount the view for `route` and render it inside the page chrome.
pub async fn open<P: GtsPlatform>(platform: &P, route: Route) -> String {
    log::debug!("open {route}");
    let body = match route {
        Route::Dashboard => {
            let mut view = dashboard::Dashboard::new(platform);
            view.mount().await;
            view.render()
        }
        Route::Search => {
            let mut view = search::SearchView::new(platform);
            view.mount().await;
            view.render()
        }
        Route::Add => {
            let mut view = create::CreateView::new(platform);
            view.mount().await;
            view.render()
        }
        Route::Details(kind, id) => {
            let mut view = detail::DetailView::new(platform, kind, id);
            view.mount().await;
            view.render()
        }
        Route::Edit(kind, id) => {
            let mut view = edit::EditView::new(platform, kind, id);
            view.mount().await;
            view.render()
        }
    };
    chrome(&route, &body)
}
