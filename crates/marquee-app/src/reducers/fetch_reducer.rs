use crate::actions::{FetchAction, HookId, Query, QueryResult};
use crate::state::{AppState, HomeFeed};

/// Fetch hook transitions
///
/// Results are matched against the hook's current generation; anything
/// else is a late answer to a superseded request and is dropped. Accepted
/// results are projected into the aggregate (`movies`, `current_movie`,
/// `reviews`).
pub fn reduce_fetch(mut state: AppState, action: &FetchAction) -> AppState {
    match action {
        FetchAction::Request(_) | FetchAction::Reload(_) => {
            // Side effect handled by middleware
        }
        FetchAction::Started { query, generation } => {
            start(&mut state, query.clone(), *generation);
        }
        FetchAction::Succeeded { generation, result } => {
            if !succeed(&mut state, *generation, result.clone()) {
                log::debug!(
                    "Dropping stale {:?} result (generation {})",
                    result.hook(),
                    generation
                );
            }
        }
        FetchAction::Failed {
            hook,
            generation,
            error,
        } => {
            if fail(&mut state, *hook, *generation, error.clone()) {
                clear_projection(&mut state, *hook);
            } else {
                log::debug!(
                    "Dropping stale {:?} failure (generation {})",
                    hook,
                    generation
                );
            }
        }
    }
    state
}

fn start(state: &mut AppState, query: Query, generation: u64) {
    let hook = query.hook();
    let hooks = &mut state.hooks;
    let key_changed = match query {
        Query::Movies(filters) => {
            let changed = hooks.movies.key.as_ref() != Some(&filters);
            hooks.movies.begin(filters, generation);
            changed
        }
        Query::Movie(id) => {
            let changed = hooks.movie.key.as_ref() != Some(&id);
            hooks.movie.begin(id, generation);
            changed
        }
        Query::Reviews(id) => {
            let changed = hooks.reviews.key.as_ref() != Some(&id);
            hooks.reviews.begin(id, generation);
            changed
        }
        Query::Home => {
            hooks.home.begin((), generation);
            false
        }
        Query::WatchlistMovies(ids) => {
            let changed = hooks.watchlist_movies.key.as_ref() != Some(&ids);
            hooks.watchlist_movies.begin(ids, generation);
            changed
        }
    };

    // Never leave the previous key's data on screen
    if key_changed {
        clear_projection(state, hook);
    }
}

fn succeed(state: &mut AppState, generation: u64, result: QueryResult) -> bool {
    let hooks = &mut state.hooks;
    match result {
        QueryResult::Movies(movies) => {
            let accepted = hooks.movies.settle(generation, Ok(movies.clone()));
            if accepted {
                state.movies = movies;
            }
            accepted
        }
        QueryResult::Movie(movie) => {
            let accepted = hooks.movie.settle(generation, Ok(movie.clone()));
            if accepted {
                state.current_movie = movie;
            }
            accepted
        }
        QueryResult::Reviews(reviews) => {
            let accepted = hooks.reviews.settle(generation, Ok(reviews.clone()));
            if accepted {
                state.reviews = reviews;
            }
            accepted
        }
        QueryResult::Home { featured, trending } => hooks
            .home
            .settle(generation, Ok(HomeFeed { featured, trending })),
        QueryResult::WatchlistMovies(movies) => {
            hooks.watchlist_movies.settle(generation, Ok(movies))
        }
    }
}

fn fail(state: &mut AppState, hook: HookId, generation: u64, error: String) -> bool {
    let hooks = &mut state.hooks;
    match hook {
        HookId::Movies => hooks.movies.settle(generation, Err(error)),
        HookId::Movie => hooks.movie.settle(generation, Err(error)),
        HookId::Reviews => hooks.reviews.settle(generation, Err(error)),
        HookId::Home => hooks.home.settle(generation, Err(error)),
        HookId::WatchlistMovies => hooks.watchlist_movies.settle(generation, Err(error)),
    }
}

fn clear_projection(state: &mut AppState, hook: HookId) {
    match hook {
        HookId::Movies => state.movies.clear(),
        HookId::Movie => state.current_movie = None,
        HookId::Reviews => state.reviews.clear(),
        HookId::Home | HookId::WatchlistMovies => {}
    }
}
