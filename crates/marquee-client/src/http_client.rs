//! `MovieApi` backed by the marquee routing server over HTTP

use crate::client::MovieApi;
use crate::error::{ApiError, Result};
use crate::types::{Movie, MovieFilters, NewReview, Review};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Error body returned by the routing server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpMovieApi {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:3000/api`)
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Transport(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            access_token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with write calls
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(response).await
    }
}

/// Turn a response into `T`, or a `Status` error carrying the server message
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn get_movies(&self, filters: Option<&MovieFilters>) -> Result<Vec<Movie>> {
        let mut url = self.endpoint(&["movies"]);
        if let Some(filters) = filters {
            let pairs = filters.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }
        self.get_json(url).await
    }

    async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        let url = self.endpoint(&["movies", id]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn get_featured_movies(&self) -> Result<Vec<Movie>> {
        let mut url = self.endpoint(&["movies"]);
        url.query_pairs_mut().append_pair("featured", "true");
        self.get_json(url).await
    }

    async fn get_trending_movies(&self) -> Result<Vec<Movie>> {
        let mut url = self.endpoint(&["movies"]);
        url.query_pairs_mut().append_pair("trending", "true");
        self.get_json(url).await
    }

    async fn get_reviews(&self, movie_id: &str) -> Result<Vec<Review>> {
        self.get_json(self.endpoint(&["movies", movie_id, "reviews"])).await
    }

    async fn add_review(&self, review: &NewReview) -> Result<Review> {
        review.validate()?;

        let url = self.endpoint(&["movies", &review.movie_id, "reviews"]);
        debug!("POST {}", url);
        let mut request = self.client.post(url).json(review);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        decode(request.send().await?).await
    }
}
