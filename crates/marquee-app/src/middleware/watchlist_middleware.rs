//! Translates the heart button into explicit watchlist actions.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct WatchlistMiddleware;

impl WatchlistMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WatchlistMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for WatchlistMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::ToggleWatchlist(movie_id) = action else {
            return true;
        };

        if state.is_in_watchlist(movie_id) {
            dispatcher.dispatch(Action::RemoveFromWatchlist(movie_id.clone()));
        } else {
            dispatcher.dispatch(Action::AddToWatchlist(movie_id.clone()));
        }
        false
    }
}
