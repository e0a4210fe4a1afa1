use crate::auth::{SessionStore, TokenVerifier};
use crate::users::UserDirectory;
use marquee_client::Catalog;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub users: Arc<RwLock<UserDirectory>>,
    pub sessions: Arc<SessionStore>,
    /// Token check used by the auth gate; backed by `sessions`
    pub verifier: Arc<dyn TokenVerifier>,
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self {
        let sessions = Arc::new(SessionStore::new());
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            users: Arc::new(RwLock::new(UserDirectory::new())),
            verifier: sessions.clone(),
            sessions,
        }
    }

    /// State over the seed catalog with no registered users
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }
}
