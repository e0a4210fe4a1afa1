//! Review submission middleware
//!
//! Validates the draft before any network call, then submits it through the
//! catalog on behalf of the signed-in user (or the guest identity).

use crate::actions::{Action, ReviewFormAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use marquee_client::{MovieApi, NewReview};
use std::sync::Arc;

pub const GUEST_USER_ID: &str = "guest";
pub const GUEST_USER_NAME: &str = "Guest";

pub struct ReviewMiddleware {
    api: Arc<dyn MovieApi>,
}

impl ReviewMiddleware {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self { api }
    }

    fn submit(&self, draft: NewReview, dispatcher: &Dispatcher) {
        if let Err(e) = draft.validate() {
            log::debug!("ReviewMiddleware: draft rejected: {}", e);
            dispatcher.dispatch(Action::ReviewForm(ReviewFormAction::Rejected(e.to_string())));
            return;
        }

        dispatcher.dispatch(Action::SetLoading(true));
        dispatcher.dispatch(Action::ReviewForm(ReviewFormAction::Submitting));

        let api = Arc::clone(&self.api);
        dispatcher.spawn(async move {
            match api.add_review(&draft).await {
                Ok(review) => {
                    log::info!("Review {} stored for movie {}", review.id, review.movie_id);
                    Action::ReviewForm(ReviewFormAction::Submitted(review))
                }
                Err(e) => {
                    log::warn!("ReviewMiddleware: submit failed: {}", e);
                    Action::ReviewForm(ReviewFormAction::SubmitFailed(format!(
                        "Failed to submit review: {}",
                        e
                    )))
                }
            }
        });
    }
}

/// Author identity for new reviews
fn author(state: &AppState) -> (String, String) {
    match &state.user {
        Some(user) => (user.id.clone(), user.name.clone()),
        None => (GUEST_USER_ID.to_string(), GUEST_USER_NAME.to_string()),
    }
}

impl Middleware for ReviewMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::ReviewForm(ReviewFormAction::Submit {
                movie_id,
                rating,
                comment,
            }) => {
                if state.review_form.submitting {
                    log::debug!("ReviewMiddleware: submission already in flight");
                    return false;
                }
                let (user_id, user_name) = author(state);
                let draft = NewReview::new(
                    movie_id.clone(),
                    user_id,
                    user_name,
                    *rating,
                    comment.trim(),
                );
                self.submit(draft, dispatcher);
                false
            }
            Action::ReviewForm(ReviewFormAction::Submitted(review)) => {
                dispatcher.dispatch(Action::AddReview(review.clone()));
                dispatcher.dispatch(Action::SetError(None));
                dispatcher.dispatch(Action::SetLoading(false));
                true
            }
            Action::ReviewForm(ReviewFormAction::SubmitFailed(message)) => {
                dispatcher.dispatch(Action::SetError(Some(message.clone())));
                dispatcher.dispatch(Action::SetLoading(false));
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Query;
    use crate::middleware::fetch_middleware::FetchMiddleware;
    use crate::state::ReviewFormState;
    use crate::store::Store;
    use marquee_client::{InMemoryMovieApi, SimulatedLatency, TimeoutMovieApi, User};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn store_with(api: Arc<dyn MovieApi>, user: Option<User>) -> Store {
        let mut store = Store::new(AppState::for_user(user));
        store.add_middleware(Box::new(FetchMiddleware::new(Arc::clone(&api))));
        store.add_middleware(Box::new(ReviewMiddleware::new(api)));
        store
    }

    fn submit(movie_id: &str, rating: u8, comment: &str) -> Action {
        Action::ReviewForm(ReviewFormAction::Submit {
            movie_id: movie_id.to_string(),
            rating,
            comment: comment.to_string(),
        })
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_catalog() {
        let api = InMemoryMovieApi::instant();
        let catalog = api.catalog();
        let mut store = store_with(Arc::new(api), None);

        store.dispatch(submit("1", 0, "Great"));
        assert_eq!(
            store.state().review_form.error.as_deref(),
            Some("please select a rating")
        );

        store.dispatch(submit("1", 4, "   "));
        assert_eq!(
            store.state().review_form.error.as_deref(),
            Some("please write a comment")
        );

        store.run_until_idle().await;
        assert_eq!(catalog.read().await.review_count(), 2);
        assert!(!store.state().loading);
    }

    #[tokio::test]
    async fn test_submission_appends_to_reviews() {
        let mut store = store_with(
            Arc::new(InMemoryMovieApi::instant()),
            Some(User::new("u1", "Alex", "alex@example.com")),
        );
        store.dispatch(Action::request(Query::Reviews("1".to_string())));
        store.run_until_idle().await;

        store.dispatch(submit("1", 5, "  Spice must flow  "));
        assert!(store.state().loading);
        assert!(store.state().review_form.submitting);
        store.run_until_idle().await;

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.review_form, ReviewFormState::default());
        assert_eq!(state.reviews.len(), 3);

        let review = &state.reviews[2];
        assert_eq!(review.comment, "Spice must flow");
        assert_eq!(review.user_id, "u1");
        assert_eq!(review.user_name, "Alex");
        assert_eq!(state.hooks.reviews.data().map(|r| r.len()), Some(3));
        assert_eq!(state.hooks.reviews.data().map(|r| &r[0]), Some(review));
    }

    #[tokio::test]
    async fn test_successful_submission_clears_earlier_error() {
        let mut store = store_with(Arc::new(InMemoryMovieApi::instant()), None);
        store.dispatch(Action::SetError(Some(
            "Failed to submit review: request timed out".to_string(),
        )));

        store.dispatch(submit("2", 4, "Second try"));
        store.run_until_idle().await;

        let state = store.state();
        assert_eq!(state.error, None);
        assert_eq!(state.reviews.len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_submission_uses_guest_identity() {
        let mut store = store_with(Arc::new(InMemoryMovieApi::instant()), None);
        store.dispatch(submit("2", 3, "Long"));
        store.run_until_idle().await;

        let review = store.state().reviews.last().unwrap();
        assert_eq!(review.user_id, GUEST_USER_ID);
        assert_eq!(review.user_name, GUEST_USER_NAME);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submission_sets_error() {
        let slow = InMemoryMovieApi::seeded().with_latency(SimulatedLatency {
            submit: Duration::from_secs(30),
            ..SimulatedLatency::none()
        });
        let api = TimeoutMovieApi::new(slow, Duration::from_secs(10));
        let mut store = store_with(Arc::new(api), None);

        store.dispatch(submit("1", 4, "Never arrives"));
        store.run_until_idle().await;

        let state = store.state();
        assert!(!state.loading);
        assert!(!state.review_form.submitting);
        let error = state.error.as_deref().unwrap();
        assert!(error.starts_with("Failed to submit review"));
        assert_eq!(state.review_form.error.as_deref(), Some(error));
        assert!(state.reviews.is_empty());
    }
}
