use crate::actions::{Action, FetchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Payloads can be the whole catalog; log the shape only
            Action::Fetch(FetchAction::Succeeded { generation, result }) => {
                log::debug!(
                    "Action: Fetch(Succeeded {{ hook: {:?}, generation: {} }})",
                    result.hook(),
                    generation
                );
            }
            Action::SetMovies(movies) => {
                log::debug!("Action: SetMovies({} movies)", movies.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
