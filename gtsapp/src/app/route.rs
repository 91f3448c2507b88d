use gtscore::kind::EntityKind;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::AppError;

/// The pages of the application, addressed by path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Dashboard,
    Search,
    Add,
    Details(EntityKind, i64),
    Edit(EntityKind, i64),
}

impl Route {
    /// Resolve a path the way a browser visit would: anything that is not
    /// a known page lands on the dashboard.
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_else(|e| {
            log::warn!("{e}; showing the dashboard");
            Route::Dashboard
        })
    }

    pub fn details(kind: EntityKind, id: i64) -> Self {
        Route::Details(kind, id)
    }

    pub fn edit(kind: EntityKind, id: i64) -> Self {
        Route::Edit(kind, id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::Dashboard => f.write_str("/"),
            Route::Search => f.write_str("/search"),
            Route::Add => f.write_str("/add"),
            Route::Details(kind, id) => write!(f, "/details/{}/{id}", kind.slug()),
            Route::Edit(kind, id) => write!(f, "/edit/{}/{id}", kind.slug()),
        }
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::UnknownRoute(s.to_string());
        let path = s.split(['?', '#']).next().unwrap_or_default();
        let segments = path.split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        match segments.as_slice() {
            [] => Ok(Route::Dashboard),
            ["search"] => Ok(Route::Search),
            ["add"] => Ok(Route::Add),
            [page @ ("details" | "edit"), kind, id] => {
                let kind = kind.parse::<EntityKind>().map_err(|_| unknown())?;
                let id = id.parse::<i64>().map_err(|_| unknown())?;
                Ok(if *page == "details" {
                    Route::Details(kind, id)
                } else {
                    Route::Edit(kind, id)
                })
            }
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() -> anyhow::Result<()> {
        assert_eq!("/".parse::<Route>()?, Route::Dashboard);
        assert_eq!("/search".parse::<Route>()?, Route::Search);
        assert_eq!("/add/".parse::<Route>()?, Route::Add);
        assert_eq!(
            "/details/thesis/12".parse::<Route>()?,
            Route::Details(EntityKind::Thesis, 12),
        );
        assert_eq!(
            "/edit/university/3?from=dashboard".parse::<Route>()?,
            Route::Edit(EntityKind::University, 3),
        );
        assert_eq!(
            "/details/widget/1".parse::<Route>(),
            Err(AppError::UnknownRoute("/details/widget/1".to_string())),
        );
        assert!("/details/person/abc".parse::<Route>().is_err());
        assert!("/nowhere".parse::<Route>().is_err());
        Ok(())
    }

    #[test]
    fn display() {
        for route in [
            Route::Dashboard,
            Route::Search,
            Route::Add,
            Route::details(EntityKind::Person, 1),
            Route::edit(EntityKind::Institute, 7),
        ] {
            assert_eq!(Route::resolve(&route.to_string()), route);
        }
        assert_eq!(Route::details(EntityKind::Person, 1).to_string(), "/details/person/1");
    }

    #[test]
    fn fallback() {
        assert_eq!(Route::resolve("/no/such/page"), Route::Dashboard);
        assert_eq!(Route::resolve("/edit/thesis"), Route::Dashboard);
    }
}
