//! Route table
//!
//! | Method      | Path                           | Auth     |
//! |-------------|--------------------------------|----------|
//! | GET         | /api/movies                    | -        |
//! | GET         | /api/movies/{id}               | -        |
//! | GET         | /api/movies/{id}/reviews       | -        |
//! | POST        | /api/movies                    | required |
//! | PUT/DELETE  | /api/movies/{id}               | required |
//! | POST        | /api/movies/{id}/reviews       | required |
//! | POST        | /api/users/register            | -        |
//! | POST        | /api/users/login               | -        |
//! | GET/PUT     | /api/users/profile             | required |
//! | GET         | /api/users/watchlist           | required |
//! | POST/DELETE | /api/users/watchlist/{movieId} | required |

pub mod movies;
pub mod users;

use crate::auth::require_auth;
use crate::state::ServerState;
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Movie Review Platform API" }))
}

/// Routes under `/api`
pub fn api_router(state: &ServerState) -> Router<ServerState> {
    let auth = || middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).merge(post(movies::create_movie).route_layer(auth())),
        )
        .route(
            "/movies/{id}",
            get(movies::get_movie).merge(
                put(movies::update_movie)
                    .delete(movies::delete_movie)
                    .route_layer(auth()),
            ),
        )
        .route(
            "/movies/{id}/reviews",
            get(movies::list_reviews).merge(post(movies::add_review).route_layer(auth())),
        )
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route(
            "/users/profile",
            get(users::get_profile)
                .put(users::update_profile)
                .route_layer(auth()),
        )
        .route(
            "/users/watchlist",
            get(users::get_watchlist).route_layer(auth()),
        )
        .route(
            "/users/watchlist/{movie_id}",
            post(users::add_to_watchlist)
                .delete(users::remove_from_watchlist)
                .route_layer(auth()),
        )
}
