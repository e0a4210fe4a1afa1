use crate::actions::Action;
use crate::reducers::{fetch_reducer, review_form_reducer, watchlist_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::SetMovies(movies) => {
            state.movies = movies.clone();
        }
        Action::SetCurrentMovie(movie) => {
            state.current_movie = movie.clone();
        }
        Action::SetReviews(reviews) => {
            state.reviews = reviews.clone();
        }
        Action::AddReview(review) => {
            state.reviews.push(review.clone());
            // The detail page lists the newest review first
            if state.hooks.reviews.key.as_deref() == Some(review.movie_id.as_str()) {
                if let Some(reviews) = state.hooks.reviews.data_mut() {
                    reviews.insert(0, review.clone());
                }
            }
        }
        Action::SetUser(_) | Action::AddToWatchlist(_) | Action::RemoveFromWatchlist(_) => {
            return watchlist_reducer::reduce_watchlist(state, action);
        }
        Action::SetFilters(patch) => {
            state.filters = state.filters.merged(patch);
            log::debug!("Filters now {:?}", state.filters);
        }
        Action::SetLoading(loading) => {
            state.loading = *loading;
        }
        Action::SetError(error) => {
            state.error = error.clone();
        }
        Action::ToggleWatchlist(_) => {
            // Translated into Add/Remove by middleware
        }
        Action::Fetch(fetch_action) => {
            return fetch_reducer::reduce_fetch(state, fetch_action);
        }
        Action::ReviewForm(form_action) => {
            state.review_form =
                review_form_reducer::reduce_review_form(state.review_form, form_action);
        }
        Action::None => {}
    }
    state
}
