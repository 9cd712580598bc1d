//! Token resolution: the seam to the excluded credential collaborator.
//!
//! The core treats identity as given. This module supplies the minimal
//! stand-in the HTTP surface needs: opaque tokens issued at registration
//! and an extractor resolving `Authorization` headers to a `UserId`.
//! Password handling, sessions, and the rest of authentication live
//! outside this crate.

use axum::{
    extract::FromRef,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::error::AppError;
use super::state::AppState;
use crate::api::UserId;

/// In-memory map of issued tokens. Clones share the same store.
#[derive(Clone, Default)]
pub struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, UserId>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque token for a user.
    pub fn issue(&self, user: UserId) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.write().insert(token.clone(), user);
        token
    }

    /// Resolve a presented token to its user.
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        self.tokens.read().get(token).copied()
    }
}

/// Extractor for the authenticated caller.
///
/// Accepts `Authorization: Bearer <token>` and the DRF-style
/// `Authorization: Token <token>`.
pub struct AuthUser(pub UserId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("Token "))
            .ok_or_else(|| AppError::Unauthorized("Malformed authorization header".to_string()))?;

        state
            .tokens
            .resolve(token)
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_resolve_to_their_user() {
        let store = TokenStore::new();
        let token = store.issue(UserId::new(7));
        assert_eq!(store.resolve(&token), Some(UserId::new(7)));
        assert_eq!(store.resolve("bogus"), None);
    }

    #[test]
    fn tokens_are_unique_per_issue() {
        let store = TokenStore::new();
        let a = store.issue(UserId::new(1));
        let b = store.issue(UserId::new(1));
        assert_ne!(a, b);
    }
}
