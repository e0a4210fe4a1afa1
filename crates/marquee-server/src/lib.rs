//! Routing server for the marquee catalog
//!
//! Serves the movie catalog and user accounts as JSON under `/api`. Write
//! routes sit behind one shared bearer-token gate (see [`auth`]).

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;
pub mod users;

pub use error::ServerError;
pub use state::ServerState;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// One log line per request
async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

/// The complete application router
pub fn app(state: ServerState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .nest("/api", routes::api_router(&state))
        .layer(middleware::from_fn(access_log))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve `state` on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: ServerState) -> anyhow::Result<()> {
    let address = listener.local_addr()?;
    log::info!("Listening on http://{}", address);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, StatusCode};
    use marquee_client::{Movie, Review, User};
    use pretty_assertions::assert_eq;
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct TestServer {
        app: Router,
    }

    impl TestServer {
        fn new() -> Self {
            Self {
                app: app(ServerState::seeded()),
            }
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Vec<u8>) {
            let mut builder = axum::http::Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, bytes.to_vec())
        }

        async fn json<T: DeserializeOwned>(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, T) {
            let (status, bytes) = self.send(method, uri, token, body).await;
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        async fn register(&self, name: &str, email: &str) -> String {
            let (status, body): (_, Value) = self
                .json(
                    Method::POST,
                    "/api/users/register",
                    None,
                    Some(json!({ "name": name, "email": email, "password": "secret1" })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
            body["token"].as_str().unwrap().to_string()
        }
    }

    #[tokio::test]
    async fn test_welcome() {
        let server = TestServer::new();
        let (status, body): (_, Value) = server.json(Method::GET, "/", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to Movie Review Platform API");
    }

    #[tokio::test]
    async fn test_list_movies_with_filters() {
        let server = TestServer::new();

        let (_, all): (_, Vec<Movie>) = server.json(Method::GET, "/api/movies", None, None).await;
        assert_eq!(all.len(), 6);

        let (_, featured): (_, Vec<Movie>) = server
            .json(Method::GET, "/api/movies?featured=true", None, None)
            .await;
        let ids: Vec<_> = featured.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let (_, filtered): (_, Vec<Movie>) = server
            .json(
                Method::GET,
                "/api/movies?genre=Action&minRating=8.5",
                None,
                None,
            )
            .await;
        assert!(filtered.iter().all(|m| m.has_genre("Action") && m.rating >= 8.5));
    }

    #[tokio::test]
    async fn test_get_movie() {
        let server = TestServer::new();
        let (status, movie): (_, Movie) =
            server.json(Method::GET, "/api/movies/1", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(movie.title, "Dune: Part Two");

        let (status, body): (_, Value) =
            server.json(Method::GET, "/api/movies/404", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "movie not found");
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let server = TestServer::new();
        let draft = json!({ "title": "Arrival", "year": 2016 });

        let (status, body): (_, Value) = server
            .json(Method::POST, "/api/movies", None, Some(draft.clone()))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "authentication required");

        let (status, _) = server
            .send(Method::DELETE, "/api/movies/1", Some("forged"), None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = server
            .send(Method::GET, "/api/users/profile", None, None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Reads stay public
        let (status, _) = server.send(Method::GET, "/api/movies/1", None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_movie_crud() {
        let server = TestServer::new();
        let token = server.register("Alex", "alex@example.com").await;

        let (status, created): (_, Movie) = server
            .json(
                Method::POST,
                "/api/movies",
                Some(&token),
                Some(json!({ "title": "Arrival", "year": 2016, "genre": ["Sci-Fi"] })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.title, "Arrival");
        assert!(!created.id.is_empty());

        let uri = format!("/api/movies/{}", created.id);
        let (status, updated): (_, Movie) = server
            .json(
                Method::PUT,
                &uri,
                Some(&token),
                Some(json!({ "title": "Arrival", "year": 2016, "rating": 7.9 })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated.rating, 7.9);

        let (status, _) = server.send(Method::DELETE, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = server.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = server.send(Method::DELETE, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_review_uses_session_user() {
        let server = TestServer::new();
        let token = server.register("Alex", "alex@example.com").await;

        let (status, review): (_, Review) = server
            .json(
                Method::POST,
                "/api/movies/2/reviews",
                Some(&token),
                Some(json!({ "rating": 5, "comment": "  Loud and brilliant  ", "userName": "Spoofed" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(review.user_name, "Alex");
        assert_eq!(review.comment, "Loud and brilliant");

        let (_, reviews): (_, Vec<Review>) = server
            .json(Method::GET, "/api/movies/2/reviews", None, None)
            .await;
        assert_eq!(reviews, vec![review.clone()]);

        let (_, profile): (_, User) = server
            .json(Method::GET, "/api/users/profile", Some(&token), None)
            .await;
        assert_eq!(profile.reviews, vec![review.id]);
    }

    #[tokio::test]
    async fn test_add_review_validation() {
        let server = TestServer::new();
        let token = server.register("Alex", "alex@example.com").await;

        let (status, body): (_, Value) = server
            .json(
                Method::POST,
                "/api/movies/2/reviews",
                Some(&token),
                Some(json!({ "rating": 0, "comment": "No stars" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "please select a rating");

        let (status, _) = server
            .send(
                Method::POST,
                "/api/movies/404/reviews",
                Some(&token),
                Some(json!({ "rating": 3, "comment": "Where?" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let server = TestServer::new();
        server.register("Alex", "alex@example.com").await;

        let (status, _) = server
            .send(
                Method::POST,
                "/api/users/register",
                None,
                Some(json!({ "name": "Alex", "email": "alex@example.com", "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body): (_, Value) = server
            .json(
                Method::POST,
                "/api/users/login",
                None,
                Some(json!({ "email": "alex@example.com", "password": "wrong!" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid email or password");

        let (status, body): (_, Value) = server
            .json(
                Method::POST,
                "/api/users/login",
                None,
                Some(json!({ "email": "alex@example.com", "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "Alex");

        let token = body["token"].as_str().unwrap();
        let (status, _) = server
            .send(Method::GET, "/api/users/profile", Some(token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_for_one_email() {
        let server = TestServer::new();
        let body = || Some(json!({ "name": "Alex", "email": "alex@example.com", "password": "secret1" }));

        let (first, second) = tokio::join!(
            server.send(Method::POST, "/api/users/register", None, body()),
            server.send(Method::POST, "/api/users/register", None, body()),
        );
        let mut statuses = vec![first.0, second.0];
        statuses.sort();
        assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let server = TestServer::new();
        let (status, _) = server
            .send(
                Method::POST,
                "/api/users/register",
                None,
                Some(json!({ "name": "Alex", "email": "alex@example.com", "password": "12345" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let server = TestServer::new();
        let token = server.register("Alex", "alex@example.com").await;
        server.register("Sam", "sam@example.com").await;

        let (status, _) = server
            .send(
                Method::PUT,
                "/api/users/profile",
                Some(&token),
                Some(json!({ "email": "sam@example.com" })),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, user): (_, User) = server
            .json(
                Method::PUT,
                "/api/users/profile",
                Some(&token),
                Some(json!({ "name": "Alexandra" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user.name, "Alexandra");
        assert_eq!(user.email, "alex@example.com");
    }

    #[tokio::test]
    async fn test_watchlist() {
        let server = TestServer::new();
        let token = server.register("Alex", "alex@example.com").await;

        for id in ["3", "1", "3"] {
            let (status, _) = server
                .send(
                    Method::POST,
                    &format!("/api/users/watchlist/{}", id),
                    Some(&token),
                    None,
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body): (_, Value) = server
            .json(Method::POST, "/api/users/watchlist/404", Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "movie not found");

        let (_, movies): (_, Vec<Movie>) = server
            .json(Method::GET, "/api/users/watchlist", Some(&token), None)
            .await;
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Batman", "Dune: Part Two"]);

        let (_, body): (_, Value) = server
            .json(Method::DELETE, "/api/users/watchlist/3", Some(&token), None)
            .await;
        assert_eq!(body["watchlist"], json!(["1"]));
    }
}
