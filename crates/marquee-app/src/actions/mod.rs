//! Actions module
//!
//! The closed set of things that can happen to the store. Store actions map
//! one-to-one onto state transitions; `Fetch` and `ReviewForm` are tagged
//! sub-actions owned by their middleware and reducers.

pub mod fetch;
pub mod review_form;

pub use fetch::{FetchAction, HookId, Query, QueryResult};
pub use review_form::ReviewFormAction;

use marquee_client::{FilterPatch, Movie, Review, User};

/// Root action enum
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the last-fetched movie list
    SetMovies(Vec<Movie>),
    /// Replace the selected movie
    SetCurrentMovie(Option<Movie>),
    /// Sign in (`Some`) or out (`None`)
    SetUser(Option<User>),
    /// Replace the reviews of the current context
    SetReviews(Vec<Review>),
    /// Append one review; not deduplicated by id
    AddReview(Review),
    /// Put a movie on the watchlist (and on the user's, when signed in)
    AddToWatchlist(String),
    /// Drop every occurrence of a movie from both watchlists
    RemoveFromWatchlist(String),
    /// Shallow-merge into the active filters
    SetFilters(FilterPatch),
    SetLoading(bool),
    SetError(Option<String>),

    /// Heart button: add if absent, remove if present.
    /// Translated by middleware, never reaches the reducer.
    ToggleWatchlist(String),

    /// Fetch hook actions
    Fetch(FetchAction),
    /// Review form actions
    ReviewForm(ReviewFormAction),

    /// No-op action
    None,
}

impl Action {
    /// Shorthand for `Action::Fetch(FetchAction::Request(query))`
    pub fn request(query: Query) -> Action {
        Action::Fetch(FetchAction::Request(query))
    }

    /// Shorthand for `Action::Fetch(FetchAction::Reload(hook))`
    pub fn reload(hook: HookId) -> Action {
        Action::Fetch(FetchAction::Reload(hook))
    }
}
