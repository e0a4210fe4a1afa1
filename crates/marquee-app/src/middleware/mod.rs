use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod fetch_middleware;
pub mod logging;
pub mod review_middleware;
pub mod watchlist_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware must not block: anything that awaits the catalog goes through
/// [`Dispatcher::spawn`].
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
