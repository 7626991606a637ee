//! Bearer-token authentication middleware.
//!
//! Tokens are issued out of band by the deployment's identity provider;
//! the gateway only checks membership. Each token maps to a `UserIdentity`
//! whose user_id scopes profiles, check-ins, and stories. The identity is
//! inserted into request extensions so handlers can extract it via
//! [`AuthenticatedUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use crate::config::AuthConfig;

/// Identity resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: String,
}

/// Maps tokens to user identities. Single-user setups hold one entry.
#[derive(Clone)]
pub struct AuthState {
    tokens: Vec<(String, UserIdentity)>,
}

impl AuthState {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|(token, user_id)| {
                (
                    token.expose_secret().to_string(),
                    UserIdentity {
                        user_id: user_id.clone(),
                    },
                )
            })
            .collect();
        Self { tokens }
    }

    /// A single-token state, mainly for tests.
    pub fn single(token: &str, user_id: &str) -> Self {
        Self {
            tokens: vec![(
                token.to_string(),
                UserIdentity {
                    user_id: user_id.to_string(),
                },
            )],
        }
    }

    /// Resolve a candidate token to an identity.
    ///
    /// Compares against every stored token in constant time so a miss and
    /// a near-miss are indistinguishable to a timing observer.
    pub fn authenticate(&self, candidate: &str) -> Option<&UserIdentity> {
        let mut found = None;
        for (token, identity) in &self.tokens {
            if bool::from(candidate.as_bytes().ct_eq(token.as_bytes())) {
                found = Some(identity);
            }
        }
        found
    }
}

/// Extractor for the authenticated identity.
///
/// Only available on routes behind [`auth_middleware`], which inserts the
/// identity into request extensions.
pub struct AuthenticatedUser(pub UserIdentity);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or((StatusCode::UNAUTHORIZED, "Not authenticated"))
    }
}

/// Middleware that validates an `Authorization: Bearer` header.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let token = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if let Some(identity) = token.and_then(|t| auth.authenticate(t)) {
        request.extensions_mut().insert(identity.clone());
        return next.run(request).await;
    }

    (StatusCode::UNAUTHORIZED, "Invalid or missing auth token").into_response()
}
