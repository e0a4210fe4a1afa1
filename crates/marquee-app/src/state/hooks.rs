//! Fetch hook state, one resource per page data source.

use super::resource::Resource;
use crate::actions::HookId;
use marquee_client::{Movie, MovieFilters, Review};

/// Featured and trending rows of the home page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeFeed {
    pub featured: Vec<Movie>,
    pub trending: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HooksState {
    pub movies: Resource<MovieFilters, Vec<Movie>>,
    /// `Loaded(None)` means the movie does not exist
    pub movie: Resource<String, Option<Movie>>,
    pub reviews: Resource<String, Vec<Review>>,
    pub home: Resource<(), HomeFeed>,
    pub watchlist_movies: Resource<Vec<String>, Vec<Movie>>,
}

impl HooksState {
    /// True if the hook has been requested at least once
    pub fn is_requested(&self, hook: HookId) -> bool {
        match hook {
            HookId::Movies => self.movies.key.is_some(),
            HookId::Movie => self.movie.key.is_some(),
            HookId::Reviews => self.reviews.key.is_some(),
            HookId::Home => self.home.key.is_some(),
            HookId::WatchlistMovies => self.watchlist_movies.key.is_some(),
        }
    }

    pub fn is_loading(&self, hook: HookId) -> bool {
        match hook {
            HookId::Movies => self.movies.is_loading(),
            HookId::Movie => self.movie.is_loading(),
            HookId::Reviews => self.reviews.is_loading(),
            HookId::Home => self.home.is_loading(),
            HookId::WatchlistMovies => self.watchlist_movies.is_loading(),
        }
    }

    pub fn any_loading(&self) -> bool {
        [
            HookId::Movies,
            HookId::Movie,
            HookId::Reviews,
            HookId::Home,
            HookId::WatchlistMovies,
        ]
        .into_iter()
        .any(|hook| self.is_loading(hook))
    }
}
