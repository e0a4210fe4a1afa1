//! `/api/movies` handlers

use crate::auth::CurrentUser;
use crate::error::{Result, ServerError};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use marquee_client::{Movie, MovieFilters, NewReview, Review};
use serde::Deserialize;

/// Query string of `GET /api/movies`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub min_rating: Option<f64>,
    pub featured: Option<bool>,
    pub trending: Option<bool>,
}

impl MovieQuery {
    fn filters(&self) -> MovieFilters {
        MovieFilters {
            search: self.search.clone().unwrap_or_default(),
            genre: self.genre.clone().filter(|g| !g.is_empty()),
            year: self.year.clone().filter(|y| !y.is_empty()),
            min_rating: self.min_rating.unwrap_or_default(),
        }
    }

    fn admits(&self, movie: &Movie) -> bool {
        self.featured.is_none_or(|featured| movie.featured == featured)
            && self.trending.is_none_or(|trending| movie.trending == trending)
    }
}

/// Movie fields a client may set; the server owns `id`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
}

impl MovieDraft {
    fn into_movie(self, id: String) -> Result<Movie> {
        if self.title.trim().is_empty() {
            return Err(ServerError::BadRequest("title is required".to_string()));
        }
        if !(0.0..=10.0).contains(&self.rating) {
            return Err(ServerError::BadRequest(format!(
                "rating must be between 0 and 10, got {}",
                self.rating
            )));
        }
        Ok(Movie {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
            duration: self.duration,
            director: self.director,
            cast: self.cast,
            poster: self.poster,
            trailer: self.trailer,
            featured: self.featured,
            trending: self.trending,
        })
    }
}

/// Body of `POST /api/movies/{id}/reviews`; the author comes from the session
#[derive(Debug, Deserialize)]
pub struct ReviewDraft {
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

fn movie_not_found() -> ServerError {
    ServerError::NotFound("movie".to_string())
}

pub async fn list_movies(
    State(state): State<ServerState>,
    Query(query): Query<MovieQuery>,
) -> Json<Vec<Movie>> {
    let catalog = state.catalog.read().await;
    let movies = catalog
        .movies(&query.filters())
        .into_iter()
        .filter(|movie| query.admits(movie))
        .collect();
    Json(movies)
}

pub async fn get_movie(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>> {
    state
        .catalog
        .read()
        .await
        .movie(&id)
        .map(Json)
        .ok_or_else(movie_not_found)
}

pub async fn create_movie(
    State(state): State<ServerState>,
    Json(draft): Json<MovieDraft>,
) -> Result<(StatusCode, Json<Movie>)> {
    let movie = draft.into_movie(uuid::Uuid::new_v4().to_string())?;
    if !state.catalog.write().await.insert_movie(movie.clone()) {
        return Err(ServerError::Conflict(format!("movie {} already exists", movie.id)));
    }
    log::info!("Created movie {} ({})", movie.id, movie.title);
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(draft): Json<MovieDraft>,
) -> Result<Json<Movie>> {
    let movie = draft.into_movie(id)?;
    state
        .catalog
        .write()
        .await
        .replace_movie(movie.clone())
        .ok_or_else(movie_not_found)?;
    log::info!("Updated movie {}", movie.id);
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .catalog
        .write()
        .await
        .remove_movie(&id)
        .ok_or_else(movie_not_found)?;
    log::info!("Deleted movie {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_reviews(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<Vec<Review>> {
    Json(state.catalog.read().await.reviews(&id))
}

pub async fn add_review(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(draft): Json<ReviewDraft>,
) -> Result<(StatusCode, Json<Review>)> {
    let mut users = state.users.write().await;
    let author = users.get_mut(&current.id)?;

    let submission = NewReview::new(
        id,
        author.id.clone(),
        author.name.clone(),
        draft.rating,
        draft.comment.trim(),
    );
    submission.validate()?;

    let review = {
        let mut catalog = state.catalog.write().await;
        if !catalog.contains_movie(&submission.movie_id) {
            return Err(movie_not_found());
        }
        catalog.append_review(&submission)
    };
    author.reviews.push(review.id.clone());

    log::info!("User {} reviewed movie {}", author.id, review.movie_id);
    Ok((StatusCode::CREATED, Json(review)))
}
