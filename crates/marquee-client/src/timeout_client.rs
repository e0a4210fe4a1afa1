//! Timeout decorator for any `MovieApi`
//!
//! Wraps an inner backend and fails a call with [`ApiError::Timeout`] if it
//! does not resolve in time. Without it a stalled backend would leave a
//! fetch hook loading forever.

use crate::client::MovieApi;
use crate::error::{ApiError, Result};
use crate::types::{Movie, MovieFilters, NewReview, Review};
use async_trait::async_trait;
use log::warn;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TimeoutMovieApi<A> {
    inner: A,
    timeout: Duration,
}

impl<A: MovieApi> TimeoutMovieApi<A> {
    pub fn new(inner: A, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get a reference to the inner backend
    pub fn inner(&self) -> &A {
        &self.inner
    }

    async fn guard<T>(&self, operation: &str, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} timed out after {:?}", operation, self.timeout);
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl<A: MovieApi> MovieApi for TimeoutMovieApi<A> {
    async fn get_movies(&self, filters: Option<&MovieFilters>) -> Result<Vec<Movie>> {
        self.guard("get_movies", self.inner.get_movies(filters)).await
    }

    async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        self.guard("get_movie", self.inner.get_movie(id)).await
    }

    async fn get_featured_movies(&self) -> Result<Vec<Movie>> {
        self.guard("get_featured_movies", self.inner.get_featured_movies()).await
    }

    async fn get_trending_movies(&self) -> Result<Vec<Movie>> {
        self.guard("get_trending_movies", self.inner.get_trending_movies()).await
    }

    async fn get_reviews(&self, movie_id: &str) -> Result<Vec<Review>> {
        self.guard("get_reviews", self.inner.get_reviews(movie_id)).await
    }

    async fn add_review(&self, review: &NewReview) -> Result<Review> {
        self.guard("add_review", self.inner.add_review(review)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory_client::{InMemoryMovieApi, SimulatedLatency};

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let api = TimeoutMovieApi::new(InMemoryMovieApi::seeded(), Duration::from_millis(100));
        let err = api.get_movies(None).await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_backend_passes_through() {
        let api = TimeoutMovieApi::new(InMemoryMovieApi::seeded(), Duration::from_secs(1));
        let movie = api.get_movie("2").await.unwrap();
        assert_eq!(movie.map(|m| m.title), Some("Oppenheimer".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_submit_reports_timeout() {
        let latency = SimulatedLatency {
            submit: Duration::from_secs(30),
            ..SimulatedLatency::none()
        };
        let api = TimeoutMovieApi::new(
            InMemoryMovieApi::seeded().with_latency(latency),
            Duration::from_secs(10),
        );
        let review = NewReview::new("1", "u1", "Alex", 5, "Slow");
        assert!(matches!(
            api.add_review(&review).await,
            Err(ApiError::Timeout(_))
        ));
    }
}
