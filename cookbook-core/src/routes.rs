//! Route table for the front end.

use std::fmt;

/// A navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/recipes/new`
    New,
    /// `/recipes/:id`
    Detail(String),
    /// `/recipes/:id/edit`
    Edit(String),
}

impl Route {
    /// Parse a path. Query strings and fragments are ignored, a trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Route::List);
        }

        let segments: Vec<&str> = trimmed.strip_prefix('/')?.split('/').collect();
        match segments.as_slice() {
            ["recipes", "new"] => Some(Route::New),
            ["recipes", id] if !id.is_empty() => Some(Route::Detail(id.to_string())),
            ["recipes", id, "edit"] if !id.is_empty() => Some(Route::Edit(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::New => "/recipes/new".to_string(),
            Route::Detail(id) => format!("/recipes/{}", id),
            Route::Edit(id) => format!("/recipes/{}/edit", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
