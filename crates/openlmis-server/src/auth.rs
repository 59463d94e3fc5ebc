//! Bearer Token Authentication
//!
//! Tokens come from the `Authorization: Bearer` header or the
//! `access_token` query parameter and are validated against the auth
//! service. The resolved user is attached to the request extensions.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::adapters::{AuthClient, TokenInfo};

/// Caller resolved from a validated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Reference-data user ID; absent for service clients
    pub user_id: Option<Uuid>,
    pub username: String,
    pub authorities: Vec<String>,
}

impl From<TokenInfo> for AuthenticatedUser {
    fn from(info: TokenInfo) -> Self {
        Self {
            user_id: info.reference_data_user_id,
            username: info
                .user_name
                .or(info.client_id)
                .unwrap_or_default(),
            authorities: info.authorities,
        }
    }
}

fn bearer_token(request: &Request) -> Option<String> {
    let from_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    from_header.or_else(|| {
        Query::<HashMap<String, String>>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(mut params)| params.remove("access_token"))
    })
}

/// Authentication middleware
pub async fn auth_middleware(
    State(auth): State<Arc<AuthClient>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(token) = bearer_token(&request).filter(|t| !t.is_empty()) else {
        tracing::warn!("Missing bearer token");
        return Err(StatusCode::UNAUTHORIZED);
    };

    match auth.check_token(&token).await {
        Ok(Some(info)) => {
            let user = AuthenticatedUser::from(info);
            tracing::debug!("Authenticated {}", user.username);
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::warn!("Invalid token attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(e) => {
            tracing::error!("Token check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
