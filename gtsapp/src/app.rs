//! Routing and the page frame shared by every view.

pub mod route;

use route::Route;

pub const TITLE: &str = "Graduate Thesis System";

/// The entries of the navigation bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavItem {
    Dashboard,
    Search,
    AddData,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [
        NavItem::Dashboard,
        NavItem::Search,
        NavItem::AddData,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Search => "Search",
            NavItem::AddData => "Add Data",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavItem::Dashboard => Route::Dashboard,
            NavItem::Search => Route::Search,
            NavItem::AddData => Route::Add,
        }
    }

    /// The entry highlighted while `route` is shown.  Detail and edit
    /// pages are reached from the dashboard, so they highlight it.
    pub fn active_for(route: &Route) -> Self {
        match route {
            Route::Search => NavItem::Search,
            Route::Add => NavItem::AddData,
            _ => NavItem::Dashboard,
        }
    }
}

/// Wrap a rendered page body in the header and navigation bar.
pub fn chrome(route: &Route, body: &str) -> String {
    let active = NavItem::active_for(route);
    let nav = NavItem::ALL.iter()
        .map(|item| if *item == active {
            format!("[{}]", item.label())
        } else {
            item.label().to_string()
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let rule = "=".repeat(TITLE.len());
    format!("{TITLE}\n{rule}\n{nav}\n\n{}\n", body.trim_end())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn active_entry() {
        let page = chrome(&Route::Add, "body");
        assert_eq!(page, "\
Graduate Thesis System
======================
Dashboard | Search | [Add Data]

body
");
        assert_eq!(
            NavItem::active_for(&"/edit/thesis/3".parse().expect("valid route")),
            NavItem::Dashboard,
        );
    }
}
