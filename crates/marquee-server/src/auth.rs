//! Authentication: password hashing, sessions and the bearer gate
//!
//! Passwords are stored as Argon2 PHC strings. A successful login issues an
//! opaque random token; protected routes share one gate that resolves the
//! `Authorization: Bearer <token>` header to a user id through a
//! [`TokenVerifier`].

use crate::error::ServerError;
use crate::state::ServerState;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use rand_core::{OsRng, RngCore};
use std::collections::HashMap;
use tokio::sync::RwLock;

const TOKEN_BYTES: usize = 32;

/// Hash a password with a fresh salt
pub fn hash_password(password: &str) -> Result<String, ServerError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServerError::Internal(format!("failed to hash password: {}", e)))
}

/// Check a password against a stored hash; a malformed hash never verifies
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}

/// [`hash_password`] on the blocking pool, keeping Argon2 off the async workers
pub async fn hash_password_blocking(password: String) -> Result<String, ServerError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServerError::Internal(format!("password hashing task failed: {}", e)))?
}

/// [`verify_password`] on the blocking pool
pub async fn verify_password_blocking(password: String, stored_hash: String) -> bool {
    match tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash)).await {
        Ok(verified) => verified,
        Err(e) => {
            log::error!("Password verification task failed: {}", e);
            false
        }
    }
}

/// The signed-in user, placed in request extensions by [`require_auth`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
}

/// Resolves a bearer token to a user id
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Option<String>;
}

/// In-memory session table
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user_id` and return its token
    pub async fn issue(&self, user_id: &str) -> String {
        let token = random_token();
        self.sessions
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        log::debug!("Issued session for user {}", user_id);
        token
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

#[async_trait]
impl TokenVerifier for SessionStore {
    async fn verify(&self, token: &str) -> Option<String> {
        self.sessions.read().await.get(token).cloned()
    }
}

fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn bearer_token(request: &Request) -> Option<&str> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Shared gate for every protected route
pub async fn require_auth(
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(token) = bearer_token(&request) else {
        return Err(ServerError::Unauthorized);
    };
    let Some(user_id) = state.verifier.verify(token).await else {
        log::debug!("Rejected unknown token on {}", request.uri().path());
        return Err(ServerError::Unauthorized);
    };

    request.extensions_mut().insert(CurrentUser { id: user_id });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
        assert!(!verify_password("hunter22", "not a hash"));
    }

    #[tokio::test]
    async fn test_password_round_trip_on_blocking_pool() {
        let hash = hash_password_blocking("hunter22".to_string()).await.unwrap();
        assert!(verify_password_blocking("hunter22".to_string(), hash.clone()).await);
        assert!(!verify_password_blocking("hunter23".to_string(), hash).await);
        assert!(!verify_password_blocking("hunter22".to_string(), String::new()).await);
    }

    #[test]
    fn test_tokens_are_unique_hex() {
        let a = random_token();
        let b = random_token();
        assert_eq!(a.len(), TOKEN_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_session_store() {
        let sessions = SessionStore::new();
        let token = sessions.issue("u1").await;
        assert_eq!(sessions.verify(&token).await, Some("u1".to_string()));
        assert_eq!(sessions.verify("nope").await, None);

        assert!(sessions.revoke(&token).await);
        assert_eq!(sessions.verify(&token).await, None);
    }
}
