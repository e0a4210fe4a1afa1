//! In-memory catalog backend with simulated network latency

use crate::catalog::Catalog;
use crate::client::MovieApi;
use crate::error::Result;
use crate::types::{Movie, MovieFilters, NewReview, Review};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Artificial delay applied before each operation resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub list: Duration,
    pub detail: Duration,
    pub curated: Duration,
    pub reviews: Duration,
    pub submit: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            detail: Duration::from_millis(300),
            curated: Duration::from_millis(400),
            reviews: Duration::from_millis(300),
            submit: Duration::from_millis(500),
        }
    }
}

impl SimulatedLatency {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            detail: Duration::ZERO,
            curated: Duration::ZERO,
            reviews: Duration::ZERO,
            submit: Duration::ZERO,
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// `MovieApi` backed by a shared [`Catalog`]
///
/// Clones share the same catalog, so a review added through one handle is
/// visible through all of them.
#[derive(Debug, Clone)]
pub struct InMemoryMovieApi {
    catalog: Arc<RwLock<Catalog>>,
    latency: SimulatedLatency,
}

impl InMemoryMovieApi {
    /// Seeded catalog with the default latencies
    pub fn seeded() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            latency: SimulatedLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Seeded catalog that answers without delay
    pub fn instant() -> Self {
        Self::seeded().with_latency(SimulatedLatency::none())
    }

    pub fn catalog(&self) -> Arc<RwLock<Catalog>> {
        Arc::clone(&self.catalog)
    }
}

#[async_trait]
impl MovieApi for InMemoryMovieApi {
    async fn get_movies(&self, filters: Option<&MovieFilters>) -> Result<Vec<Movie>> {
        pause(self.latency.list).await;
        let catalog = self.catalog.read().await;
        let movies = match filters {
            Some(filters) => catalog.movies(filters),
            None => catalog.all_movies(),
        };
        debug!("get_movies({:?}) -> {} movies", filters, movies.len());
        Ok(movies)
    }

    async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        pause(self.latency.detail).await;
        Ok(self.catalog.read().await.movie(id))
    }

    async fn get_featured_movies(&self) -> Result<Vec<Movie>> {
        pause(self.latency.curated).await;
        Ok(self.catalog.read().await.featured())
    }

    async fn get_trending_movies(&self) -> Result<Vec<Movie>> {
        pause(self.latency.curated).await;
        Ok(self.catalog.read().await.trending())
    }

    async fn get_reviews(&self, movie_id: &str) -> Result<Vec<Review>> {
        pause(self.latency.reviews).await;
        Ok(self.catalog.read().await.reviews(movie_id))
    }

    async fn add_review(&self, review: &NewReview) -> Result<Review> {
        pause(self.latency.submit).await;
        Ok(self.catalog.write().await.append_review(review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_default_latency_is_simulated() {
        let api = InMemoryMovieApi::seeded();

        let started = Instant::now();
        let movies = api.get_movies(None).await.unwrap();
        assert_eq!(movies.len(), 6);
        assert!(started.elapsed() >= Duration::from_millis(500));

        let started = Instant::now();
        api.get_movie("1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_featured_and_trending() {
        let api = InMemoryMovieApi::instant();
        let featured = api.get_featured_movies().await.unwrap();
        let trending = api.get_trending_movies().await.unwrap();
        assert!(featured.iter().all(|m| m.featured));
        assert!(trending.iter().all(|m| m.trending));
        assert_eq!(featured.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_movie_resolves_none() {
        let api = InMemoryMovieApi::instant();
        assert_eq!(api.get_movie("999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_added_review_is_visible_to_clones() {
        let api = InMemoryMovieApi::instant();
        let other = api.clone();

        let review = api
            .add_review(&NewReview::new("3", "u1", "Alex", 4, "Dark and moody"))
            .await
            .unwrap();

        let reviews = other.get_reviews("3").await.unwrap();
        assert_eq!(reviews, vec![review]);
    }

    #[tokio::test]
    async fn test_filters_pass_through() {
        let api = InMemoryMovieApi::instant();
        let filters = MovieFilters {
            min_rating: 9.0,
            ..Default::default()
        };
        assert!(api.get_movies(Some(&filters)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let api: Arc<dyn MovieApi> = Arc::new(InMemoryMovieApi::instant());
        let reviews = api.get_reviews("1").await.unwrap();
        assert_eq!(reviews.len(), 2);
    }
}
