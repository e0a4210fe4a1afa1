//! Movie catalog façade trait
//!
//! This module defines the `MovieApi` trait that every backend must satisfy.
//! Views and fetch hooks only ever see this trait, never a concrete backend.

use crate::error::Result;
use crate::types::{Movie, MovieFilters, NewReview, Review};
use async_trait::async_trait;
use std::sync::Arc;

/// Movie catalog data access
///
/// Implementations can be direct (in-memory catalog, HTTP server) or
/// decorated with timeouts and similar cross-cutting behavior.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every in-flight fetch.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_client::{MovieApi, Movie};
///
/// async fn first_title(api: &dyn MovieApi) -> marquee_client::Result<Option<String>> {
///     Ok(api.get_movies(None).await?.into_iter().next().map(|m| m.title))
/// }
/// ```
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// List movies, optionally filtered
    ///
    /// `None` returns the whole catalog in catalog order.
    async fn get_movies(&self, filters: Option<&MovieFilters>) -> Result<Vec<Movie>>;

    /// Look up one movie; absence is `Ok(None)`, not an error
    async fn get_movie(&self, id: &str) -> Result<Option<Movie>>;

    /// Movies flagged as featured
    async fn get_featured_movies(&self) -> Result<Vec<Movie>>;

    /// Movies flagged as trending
    async fn get_trending_movies(&self) -> Result<Vec<Movie>>;

    /// Reviews of one movie in submission order
    async fn get_reviews(&self, movie_id: &str) -> Result<Vec<Review>>;

    /// Store a review; the backend assigns `id` and `createdAt`
    async fn add_review(&self, review: &NewReview) -> Result<Review>;
}

#[async_trait]
impl<T: MovieApi + ?Sized> MovieApi for Arc<T> {
    async fn get_movies(&self, filters: Option<&MovieFilters>) -> Result<Vec<Movie>> {
        (**self).get_movies(filters).await
    }

    async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        (**self).get_movie(id).await
    }

    async fn get_featured_movies(&self) -> Result<Vec<Movie>> {
        (**self).get_featured_movies().await
    }

    async fn get_trending_movies(&self) -> Result<Vec<Movie>> {
        (**self).get_trending_movies().await
    }

    async fn get_reviews(&self, movie_id: &str) -> Result<Vec<Review>> {
        (**self).get_reviews(movie_id).await
    }

    async fn add_review(&self, review: &NewReview) -> Result<Review> {
        (**self).add_review(review).await
    }
}
