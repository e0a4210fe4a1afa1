//! Drives a live server through the HTTP client

use marquee_client::{ApiError, HttpMovieApi, MovieApi, MovieFilters, NewReview};
use marquee_server::{serve, ServerState};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

async fn start() -> (ServerState, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    let state = ServerState::seeded();

    let served = state.clone();
    tokio::spawn(async move {
        let _ = serve(listener, served).await;
    });
    (state, base_url)
}

async fn sign_in(state: &ServerState, name: &str, email: &str) -> String {
    let user = state
        .users
        .write()
        .await
        .register(name, email, "secret1")
        .unwrap();
    state.sessions.issue(&user.id).await
}

#[tokio::test]
async fn test_reads() {
    let (_state, base_url) = start().await;
    let api = HttpMovieApi::new(&base_url).unwrap();

    assert_eq!(api.get_movies(None).await.unwrap().len(), 6);

    let filters = MovieFilters {
        search: "batman".to_string(),
        ..MovieFilters::default()
    };
    let found = api.get_movies(Some(&filters)).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "3");

    let dune = api.get_movie("1").await.unwrap().unwrap();
    assert_eq!(dune.title, "Dune: Part Two");
    assert_eq!(api.get_movie("missing").await.unwrap(), None);

    let featured: Vec<_> = api
        .get_featured_movies()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(featured, vec!["1", "2"]);

    let trending: Vec<_> = api
        .get_trending_movies()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(trending, vec!["1", "3"]);

    let reviews = api.get_reviews("1").await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(api.get_reviews("2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_review_requires_session() {
    let (_state, base_url) = start().await;
    let api = HttpMovieApi::new(&base_url).unwrap();
    let submission = NewReview::new("2", "guest", "Guest", 4, "Big and loud");

    match api.add_review(&submission).await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "authentication required");
        }
        other => panic!("expected 401, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_review_with_session() {
    let (state, base_url) = start().await;
    let token = sign_in(&state, "Alex", "alex@example.com").await;
    let api = HttpMovieApi::new(&base_url)
        .unwrap()
        .with_access_token(token);

    let submission = NewReview::new("2", "ignored", "Ignored", 4, "Big and loud");
    let review = api.add_review(&submission).await.unwrap();
    assert_eq!(review.movie_id, "2");
    assert_eq!(review.user_name, "Alex");
    assert_eq!(review.rating, 4);

    assert_eq!(api.get_reviews("2").await.unwrap(), vec![review]);
}

#[tokio::test]
async fn test_review_for_missing_movie() {
    let (state, base_url) = start().await;
    let token = sign_in(&state, "Alex", "alex@example.com").await;
    let api = HttpMovieApi::new(&base_url)
        .unwrap()
        .with_access_token(token);

    let submission = NewReview::new("missing", "u1", "Alex", 3, "Hmm");
    assert!(matches!(
        api.add_review(&submission).await,
        Err(ApiError::Status { status: 404, .. })
    ));
}
