//! Movie review browser
//!
//! A Redux-style store drives every page: views read [`AppState`], user
//! intent enters as an [`Action`], middleware turns requests into catalog
//! calls on background tasks, and reducers are the only place state changes.
//!
//! ```text
//! Action ─► Middleware chain ─► reduce() ─► AppState ─► views
//!               │                                ▲
//!               └─ Dispatcher::spawn(fetch) ─────┘ (Succeeded / Failed)
//! ```

pub mod actions;
pub mod cli;
pub mod dispatcher;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;

pub use actions::Action;
pub use state::AppState;
pub use store::Store;

use marquee_client::{MovieApi, User};
use middleware::{
    fetch_middleware::FetchMiddleware, logging::LoggingMiddleware,
    review_middleware::ReviewMiddleware, watchlist_middleware::WatchlistMiddleware,
};
use std::sync::Arc;

/// Store with the full middleware chain wired to `api`
///
/// The user's saved watchlist seeds the in-memory one.
pub fn build_store(api: Arc<dyn MovieApi>, user: Option<User>) -> Store {
    let mut store = Store::new(AppState::for_user(user));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(WatchlistMiddleware::new()));
    store.add_middleware(Box::new(FetchMiddleware::new(api.clone())));
    store.add_middleware(Box::new(ReviewMiddleware::new(api)));
    store
}
