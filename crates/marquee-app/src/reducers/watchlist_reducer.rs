use crate::actions::Action;
use crate::state::AppState;

/// Watchlist transitions
///
/// The session watchlist is the source of truth; after every transition a
/// signed-in user's watchlist is a copy of it. Adds are deduplicated and
/// removal filters by value.
pub fn reduce_watchlist(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::SetUser(user) => {
            state.user = user.clone();
            if let Some(user) = state.user.as_mut() {
                // Ids saved while signed out join the account's list
                let mut merged: Vec<String> = Vec::new();
                for id in user.watchlist.iter().chain(state.watchlist.iter()) {
                    if !merged.contains(id) {
                        merged.push(id.clone());
                    }
                }
                user.watchlist = merged;
                state.watchlist = user.watchlist.clone();
            }
        }
        Action::AddToWatchlist(movie_id) => {
            if !state.watchlist.contains(movie_id) {
                state.watchlist.push(movie_id.clone());
            } else {
                log::debug!("Movie {} already on watchlist", movie_id);
            }
            sync_user(&mut state);
        }
        Action::RemoveFromWatchlist(movie_id) => {
            state.watchlist.retain(|id| id != movie_id);
            sync_user(&mut state);
        }
        _ => {}
    }
    state
}

fn sync_user(state: &mut AppState) {
    if let Some(user) = state.user.as_mut() {
        user.watchlist = state.watchlist.clone();
    }
}
