//! Application State

use super::{HooksState, ReviewFormState};
use marquee_client::{Movie, MovieFilters, Review, User};

/// Application state
///
/// `watchlist` mirrors `user.watchlist` whenever a user is signed in. Every
/// field is owned, so a clone shares nothing with the original.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Last-fetched movie list
    pub movies: Vec<Movie>,
    pub current_movie: Option<Movie>,
    /// `None` while anonymous
    pub user: Option<User>,
    /// Last-fetched reviews for the current context
    pub reviews: Vec<Review>,
    /// Movie ids, insertion ordered
    pub watchlist: Vec<String>,
    pub filters: MovieFilters,
    pub loading: bool,
    pub error: Option<String>,

    pub hooks: HooksState,
    pub review_form: ReviewFormState,
}

impl AppState {
    /// Initial state for a session, signed in as `user` if given
    ///
    /// The session watchlist starts as a copy of the user's.
    pub fn for_user(user: Option<User>) -> Self {
        let watchlist = user
            .as_ref()
            .map(|u| u.watchlist.clone())
            .unwrap_or_default();
        Self {
            user,
            watchlist,
            ..Self::default()
        }
    }

    pub fn is_in_watchlist(&self, movie_id: &str) -> bool {
        self.watchlist.iter().any(|id| id == movie_id)
    }
}
