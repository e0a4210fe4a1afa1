//! Backend selection from configuration

use crate::client::MovieApi;
use crate::http_client::HttpMovieApi;
use crate::in_memory_client::{InMemoryMovieApi, SimulatedLatency};
use crate::timeout_client::TimeoutMovieApi;
use anyhow::Context;
use log::info;
use marquee_config::{ApiBackend, ApiConfig};
use std::sync::Arc;
use std::time::Duration;

/// Build the configured backend, bounded by the configured request timeout
pub fn build_client(config: &ApiConfig) -> anyhow::Result<Arc<dyn MovieApi>> {
    let timeout = Duration::from_millis(config.request_timeout_ms);

    let client: Arc<dyn MovieApi> = match config.backend {
        ApiBackend::InMemory => {
            let latency = if config.simulate_latency {
                SimulatedLatency::default()
            } else {
                SimulatedLatency::none()
            };
            info!(
                "Using in-memory catalog (simulated latency: {})",
                config.simulate_latency
            );
            Arc::new(TimeoutMovieApi::new(
                InMemoryMovieApi::seeded().with_latency(latency),
                timeout,
            ))
        }
        ApiBackend::Http => {
            let mut http = HttpMovieApi::new(&config.base_url)
                .with_context(|| format!("Failed to create HTTP client for {}", config.base_url))?;
            if let Some(token) = &config.access_token {
                http = http.with_access_token(token.clone());
            }
            info!("Using routing server at {}", config.base_url);
            Arc::new(TimeoutMovieApi::new(http, timeout))
        }
    };

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_backend_by_default() {
        let config = ApiConfig {
            simulate_latency: false,
            ..ApiConfig::default()
        };
        let api = build_client(&config).unwrap();
        assert_eq!(api.get_movies(None).await.unwrap().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_applies_to_in_memory_backend() {
        let config = ApiConfig {
            request_timeout_ms: 100,
            ..ApiConfig::default()
        };
        let api = build_client(&config).unwrap();
        assert!(matches!(
            api.get_movies(None).await,
            Err(crate::ApiError::Timeout(_))
        ));
    }

    #[test]
    fn test_http_backend_rejects_bad_url() {
        let config = ApiConfig {
            backend: ApiBackend::Http,
            base_url: "::not-a-url".to_string(),
            ..ApiConfig::default()
        };
        assert!(build_client(&config).is_err());
    }
}
