//! Headless front-end views.
//!
//! Each view owns its state and exposes the user actions it supports as
//! methods. Actions that reach the backend are `async` and take `&mut self`,
//! so a result can only land on a view that is still alive. Actions that
//! navigate return the [`Route`](crate::routes::Route) to go to; rendering
//! produces plain text for a terminal.

pub mod card;
pub mod detail;
pub mod form;
pub mod list;
pub mod shell;

pub use card::{Card, CardIntent};
pub use detail::DetailView;
pub use form::{FormMode, FormStatus, FormView, RecipeDraft};
pub use list::ListView;
pub use shell::{Screen, Shell};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";
pub const DELETE_FAILED: &str = "Failed to delete recipe. Please try again.";

/// Progress of a view's initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// User-facing message; the underlying error is only logged.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Blocking yes/no question put to the user before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
