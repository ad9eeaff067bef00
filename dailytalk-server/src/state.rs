//! Shared application state for the dailytalk server

use chrono::{DateTime, Utc};
use dailytalk_core::ActivityService;
use tokio::sync::RwLock;

/// Shared application state accessible by all handlers
///
/// The activity registry is the only shared mutable resource: deploy takes
/// the write lock, submit and lookups take the read lock, which linearizes
/// operations on the same id while leaving distinct ids fully concurrent.
pub struct AppState {
    /// Registry of deployed activities
    pub activities: RwLock<ActivityService>,
    /// Externally visible base URL, overriding the request Host header
    pub public_url: Option<String>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with an empty registry
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(ActivityService::new()),
            public_url: None,
            started_at: Utc::now(),
        }
    }

    /// Set the externally visible base URL used in launch URLs
    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url.map(|url| url.trim_end_matches('/').to_string());
        self
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_new_has_empty_registry() {
        let state = AppState::new();
        assert!(state.activities.read().await.is_empty());
        assert!(state.uptime_seconds() >= 0);
    }

    #[test]
    fn with_public_url_strips_trailing_slash() {
        let state = AppState::new().with_public_url(Some("https://dailytalk.pt/".to_string()));
        assert_eq!(state.public_url.as_deref(), Some("https://dailytalk.pt"));
    }

    #[test]
    fn with_public_url_none_keeps_host_derivation() {
        let state = AppState::new().with_public_url(None);
        assert!(state.public_url.is_none());
    }
}
