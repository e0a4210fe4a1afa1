//! Profile page statistics.

use crate::state::AppState;
use marquee_client::Review;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub watchlist_count: usize,
    pub review_count: usize,
    /// Rounded to one decimal; 0.0 without reviews
    pub average_rating: f64,
}

impl ProfileStats {
    pub fn from_state(state: &AppState) -> Self {
        let reviews = user_reviews(state);
        Self {
            watchlist_count: state.watchlist.len(),
            review_count: reviews.len(),
            average_rating: average_rating(&reviews),
        }
    }
}

/// Reviews in the store written by the signed-in user
pub fn user_reviews(state: &AppState) -> Vec<&Review> {
    let Some(user) = &state.user else {
        return Vec::new();
    };
    state
        .reviews
        .iter()
        .filter(|review| review.user_id == user.id)
        .collect()
}

fn average_rating(reviews: &[&Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let average = f64::from(total) / reviews.len() as f64;
    (average * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_client::{NewReview, User};
    use pretty_assertions::assert_eq;

    fn review(user_id: &str, rating: u8) -> Review {
        NewReview::new("1", user_id, "Someone", rating, "ok")
            .into_review(format!("{user_id}-{rating}"), chrono::Utc::now())
    }

    #[test]
    fn test_no_reviews_average_is_zero() {
        let state = AppState::for_user(Some(User::new("u1", "Alex", "a@example.com")));
        let stats = ProfileStats::from_state(&state);
        assert_eq!(stats.review_count, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn test_only_own_reviews_count() {
        let mut state = AppState::for_user(Some(User::new("u1", "Alex", "a@example.com")));
        state.watchlist = vec!["1".to_string(), "2".to_string()];
        state.reviews = vec![review("u1", 5), review("u2", 1), review("u1", 4), review("u1", 4)];

        let stats = ProfileStats::from_state(&state);
        assert_eq!(
            stats,
            ProfileStats {
                watchlist_count: 2,
                review_count: 3,
                average_rating: 4.3,
            }
        );
    }

    #[test]
    fn test_anonymous_has_no_reviews() {
        let mut state = AppState::default();
        state.reviews = vec![review("guest", 5)];
        assert_eq!(ProfileStats::from_state(&state).review_count, 0);
    }
}
