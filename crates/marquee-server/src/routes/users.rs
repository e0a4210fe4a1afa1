//! `/api/users` handlers

use crate::auth::{hash_password_blocking, verify_password_blocking, CurrentUser};
use crate::error::{Result, ServerError};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use marquee_client::{Movie, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session token plus the signed-in profile
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Current watchlist ids after a change
#[derive(Debug, Serialize, Deserialize)]
pub struct WatchlistResponse {
    pub watchlist: Vec<String>,
}

pub async fn register(
    State(state): State<ServerState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    state
        .users
        .read()
        .await
        .check_registration(&request.name, &request.email, &request.password)?;
    let password_hash = hash_password_blocking(request.password).await?;
    let user = state
        .users
        .write()
        .await
        .insert(&request.name, &request.email, password_hash)?;
    let token = state.sessions.issue(&user.id).await;
    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

pub async fn login(
    State(state): State<ServerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let credentials = state.users.read().await.credentials(&request.email);
    let (user, password_hash) = credentials.ok_or(ServerError::InvalidCredentials)?;
    if !verify_password_blocking(request.password, password_hash).await {
        return Err(ServerError::InvalidCredentials);
    }
    let token = state.sessions.issue(&user.id).await;
    log::info!("User {} logged in", user.id);
    Ok(Json(AuthResponse { token, user }))
}

pub async fn get_profile(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<User>> {
    let users = state.users.read().await;
    users.get(&current.id).cloned().map(Json)
}

pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<User>> {
    let user = state.users.write().await.update_profile(
        &current.id,
        update.name.as_deref(),
        update.email.as_deref(),
    )?;
    Ok(Json(user))
}

/// Watchlist movies in the order they were added
pub async fn get_watchlist(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<Movie>>> {
    let ids = state.users.read().await.get(&current.id)?.watchlist.clone();
    let catalog = state.catalog.read().await;
    // Movies deleted since they were listed drop out silently
    let movies = ids.iter().filter_map(|id| catalog.movie(id)).collect();
    Ok(Json(movies))
}

pub async fn add_to_watchlist(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(movie_id): Path<String>,
) -> Result<Json<WatchlistResponse>> {
    if !state.catalog.read().await.contains_movie(&movie_id) {
        return Err(ServerError::NotFound("movie".to_string()));
    }

    let mut users = state.users.write().await;
    let user = users.get_mut(&current.id)?;
    if !user.watchlist.contains(&movie_id) {
        user.watchlist.push(movie_id);
    }
    Ok(Json(WatchlistResponse {
        watchlist: user.watchlist.clone(),
    }))
}

pub async fn remove_from_watchlist(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(movie_id): Path<String>,
) -> Result<Json<WatchlistResponse>> {
    let mut users = state.users.write().await;
    let user = users.get_mut(&current.id)?;
    user.watchlist.retain(|id| id != &movie_id);
    Ok(Json(WatchlistResponse {
        watchlist: user.watchlist.clone(),
    }))
}
