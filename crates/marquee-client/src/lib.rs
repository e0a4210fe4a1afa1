//! Movie catalog data access
//!
//! This crate provides a trait-based façade over the movie catalog with
//! interchangeable backends. The design follows the decorator pattern, so
//! cross-cutting behavior (timeouts) composes with any backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 MovieApi trait                   │
//! │  - get_movies() / get_movie()                    │
//! │  - get_featured_movies() / get_trending_movies() │
//! │  - get_reviews() / add_review()                  │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//! ┌──────────────┐ ┌──────────────┐ ┌─────────────────┐
//! │InMemoryMovie │ │ HttpMovieApi │ │ TimeoutMovieApi │
//! │Api (Catalog) │ │ (server)     │◄│ (decorator)     │
//! └──────────────┘ └──────────────┘ └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_client::{InMemoryMovieApi, MovieApi, MovieFilters, TimeoutMovieApi};
//! use std::time::Duration;
//!
//! # async fn example() -> marquee_client::Result<()> {
//! let api = TimeoutMovieApi::new(InMemoryMovieApi::seeded(), Duration::from_secs(5));
//!
//! let filters = MovieFilters {
//!     search: "dune".to_string(),
//!     ..MovieFilters::default()
//! };
//! let movies = api.get_movies(Some(&filters)).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod client_factory;
pub mod error;
pub mod http_client;
pub mod in_memory_client;
mod seed;
pub mod timeout_client;
pub mod types;

pub use catalog::Catalog;
pub use client::MovieApi;
pub use client_factory::build_client;
pub use error::{ApiError, Result, ValidationError};
pub use http_client::HttpMovieApi;
pub use in_memory_client::{InMemoryMovieApi, SimulatedLatency};
pub use timeout_client::TimeoutMovieApi;
pub use types::{FilterPatch, Movie, MovieFilters, NewReview, Review, User};
