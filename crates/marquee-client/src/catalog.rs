//! In-memory movie catalog with an append-only review log
//!
//! Shared by [`crate::InMemoryMovieApi`] and the routing server. Reads never
//! fail: an absent movie is `None`, a filter with no hits is an empty list.

use crate::seed;
use crate::types::{Movie, MovieFilters, NewReview, Review};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    /// Newest `createdAt` handed out so far
    last_created_at: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, reviews: Vec<Review>) -> Self {
        let last_created_at = reviews.iter().map(|r| r.created_at).max();
        Self {
            movies,
            reviews,
            last_created_at,
        }
    }

    /// Six well-known movies and two reviews of "Dune: Part Two"
    pub fn seeded() -> Self {
        Self::new(seed::movies(), seed::reviews())
    }

    /// All movies matching `filters`, in catalog order
    pub fn movies(&self, filters: &MovieFilters) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| filters.matches(movie))
            .cloned()
            .collect()
    }

    pub fn all_movies(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub fn movie(&self, id: &str) -> Option<Movie> {
        self.movies.iter().find(|movie| movie.id == id).cloned()
    }

    pub fn contains_movie(&self, id: &str) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    pub fn featured(&self) -> Vec<Movie> {
        self.movies.iter().filter(|m| m.featured).cloned().collect()
    }

    pub fn trending(&self) -> Vec<Movie> {
        self.movies.iter().filter(|m| m.trending).cloned().collect()
    }

    /// Reviews of one movie, oldest submission first
    pub fn reviews(&self, movie_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|review| review.movie_id == movie_id)
            .cloned()
            .collect()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Assign an id and timestamp to a submission and append it to the log
    ///
    /// Ids are UUID v4. Timestamps never go backwards, even if the wall
    /// clock does.
    pub fn append_review(&mut self, submission: &NewReview) -> Review {
        let created_at = self.next_timestamp();
        let review = submission
            .clone()
            .into_review(uuid::Uuid::new_v4().simple().to_string(), created_at);
        log::debug!(
            "Appending review {} for movie {}",
            review.id,
            review.movie_id
        );
        self.reviews.push(review.clone());
        review
    }

    /// Add a movie; returns false if the id is already taken
    pub fn insert_movie(&mut self, movie: Movie) -> bool {
        if self.contains_movie(&movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Replace the movie with the same id, keeping its catalog position
    pub fn replace_movie(&mut self, movie: Movie) -> Option<Movie> {
        let slot = self.movies.iter_mut().find(|m| m.id == movie.id)?;
        Some(std::mem::replace(slot, movie))
    }

    /// Remove a movie. Its reviews stay in the log.
    pub fn remove_movie(&mut self, id: &str) -> Option<Movie> {
        let idx = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(idx))
    }

    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }
}
