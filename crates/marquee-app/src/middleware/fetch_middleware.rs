//! Fetch hooks middleware
//!
//! Owns every catalog read the pages make:
//! - `Request(query)` starts a fetch unless the hook already shows or loads it
//! - `Reload(hook)` refetches a hook with its current key
//! - filter and watchlist changes reload the hooks keyed on them
//!
//! Each fetch is tagged with a fresh generation before it goes out. The
//! reducer only accepts results carrying the hook's current generation.

use crate::actions::{Action, FetchAction, HookId, Query, QueryResult};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, HooksState};
use marquee_client::MovieApi;
use std::sync::Arc;

pub struct FetchMiddleware {
    api: Arc<dyn MovieApi>,
    /// Last generation handed out; strictly increasing
    generation: u64,
}

impl FetchMiddleware {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self { api, generation: 0 }
    }

    fn start(&mut self, query: Query, dispatcher: &Dispatcher) {
        self.generation += 1;
        let generation = self.generation;
        log::debug!("FetchMiddleware: {:?} as generation {}", query, generation);

        dispatcher.dispatch(Action::Fetch(FetchAction::Started {
            query: query.clone(),
            generation,
        }));

        let api = Arc::clone(&self.api);
        dispatcher.spawn(run_query(api, query, generation));
    }
}

impl Middleware for FetchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Fetch(FetchAction::Request(query)) => {
                if is_covered(query, &state.hooks) {
                    log::debug!("FetchMiddleware: {:?} already loading or loaded", query);
                } else {
                    self.start(query.clone(), dispatcher);
                }
                false
            }
            Action::Fetch(FetchAction::Reload(hook)) => {
                match reload_query(*hook, state) {
                    Some(query) => self.start(query, dispatcher),
                    None => log::debug!("FetchMiddleware: {:?} never requested, not reloading", hook),
                }
                false
            }
            Action::SetFilters(_) => {
                dispatcher.dispatch(Action::reload(HookId::Movies));
                true
            }
            Action::AddToWatchlist(_) | Action::RemoveFromWatchlist(_) => {
                dispatcher.dispatch(Action::reload(HookId::WatchlistMovies));
                true
            }
            _ => true,
        }
    }
}

fn is_covered(query: &Query, hooks: &HooksState) -> bool {
    match query {
        Query::Movies(filters) => hooks.movies.covers(filters),
        Query::Movie(id) => hooks.movie.covers(id),
        Query::Reviews(id) => hooks.reviews.covers(id),
        Query::Home => hooks.home.covers(&()),
        Query::WatchlistMovies(ids) => hooks.watchlist_movies.covers(ids),
    }
}

/// Current key of a hook, or `None` if the hook was never requested
fn reload_query(hook: HookId, state: &AppState) -> Option<Query> {
    if !state.hooks.is_requested(hook) {
        return None;
    }
    let query = match hook {
        HookId::Movies => Query::Movies(state.filters.clone()),
        HookId::Movie => Query::Movie(state.hooks.movie.key.clone()?),
        HookId::Reviews => Query::Reviews(state.hooks.reviews.key.clone()?),
        HookId::Home => Query::Home,
        HookId::WatchlistMovies => Query::WatchlistMovies(state.watchlist.clone()),
    };
    Some(query)
}

/// Run one fetch and turn its outcome into the action that settles the hook
async fn run_query(api: Arc<dyn MovieApi>, query: Query, generation: u64) -> Action {
    let hook = query.hook();
    let outcome = match query {
        Query::Movies(filters) => api
            .get_movies(Some(&filters))
            .await
            .map(QueryResult::Movies),
        Query::Movie(id) => api.get_movie(&id).await.map(QueryResult::Movie),
        Query::Reviews(id) => api.get_reviews(&id).await.map(QueryResult::Reviews),
        Query::Home => {
            let (featured, trending) =
                tokio::join!(api.get_featured_movies(), api.get_trending_movies());
            featured.and_then(|featured| {
                trending.map(|trending| QueryResult::Home { featured, trending })
            })
        }
        Query::WatchlistMovies(ids) if ids.is_empty() => Ok(QueryResult::WatchlistMovies(vec![])),
        Query::WatchlistMovies(ids) => api.get_movies(None).await.map(|movies| {
            QueryResult::WatchlistMovies(
                movies
                    .into_iter()
                    .filter(|movie| ids.contains(&movie.id))
                    .collect(),
            )
        }),
    };

    match outcome {
        Ok(result) => Action::Fetch(FetchAction::Succeeded { generation, result }),
        Err(e) => {
            log::warn!("FetchMiddleware: {:?} fetch failed: {}", hook, e);
            Action::Fetch(FetchAction::Failed {
                hook,
                generation,
                error: hook.error_message().to_string(),
            })
        }
    }
}
