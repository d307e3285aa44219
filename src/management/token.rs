use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::TokenPair;

/// In-memory home of the logged-in user's tokens.
///
/// Cloning the store hands out another handle to the same slot. Each `set`
/// replaces the whole pair under the write lock, so readers never observe a
/// half-updated pair. Two callbacks racing each other still resolve as
/// last-write-wins.
///
/// Nothing is persisted: the slot starts empty and is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    slot: Arc<RwLock<Option<TokenPair>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, access_token: String, refresh_token: Option<String>) {
        let mut slot = self.slot.write().await;
        *slot = Some(TokenPair {
            access_token,
            refresh_token,
        });
    }

    pub async fn get_access(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|pair| pair.access_token.clone())
    }

    /// Stored alongside the access token but never used to renew it.
    pub async fn get_refresh(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .and_then(|pair| pair.refresh_token.clone())
    }

    pub async fn has_valid_token(&self) -> bool {
        self.slot
            .read()
            .await
            .as_ref()
            .is_some_and(|pair| !pair.access_token.is_empty())
    }

    /// Returns the access token only if it passes `has_valid_token`, checked
    /// and read under a single lock.
    pub async fn valid_access(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|pair| !pair.access_token.is_empty())
            .map(|pair| pair.access_token.clone())
    }
}

