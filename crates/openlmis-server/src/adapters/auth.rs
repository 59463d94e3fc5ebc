//! OAuth Client for the auth service
//!
//! Issues service-level access tokens (client credentials) for outbound calls
//! and validates incoming bearer tokens via `check_token`.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use openlmis::DomainError;

/// Token info returned by `check_token`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenInfo {
    pub user_name: Option<String>,
    #[serde(rename = "referenceDataUserId")]
    pub reference_data_user_id: Option<Uuid>,
    #[serde(default)]
    pub authorities: Vec<String>,
    pub client_id: Option<String>,
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Seconds shaved off the token lifetime so a cached token is never sent expired
const EXPIRY_MARGIN_SECS: u64 = 30;

pub struct AuthClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl AuthClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: Mutex::new(None),
        }
    }

    /// Service access token, reused until shortly before it expires
    pub async fn obtain_access_token(&self) -> Result<String, DomainError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.value.clone());
            }
        }

        let response = self
            .client
            .post(format!("{}/api/oauth/token", self.base_url))
            .query(&[("grant_type", "client_credentials")])
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Auth service unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::ExternalService(format!(
                "Auth service refused client credentials: {}",
                response.status()
            )));
        }

        let token: AccessTokenResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid token response: {e}"))
        })?;

        let lifetime = token
            .expires_in
            .unwrap_or(0)
            .saturating_sub(EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });
        tracing::debug!("Obtained service access token");

        Ok(token.access_token)
    }

    /// Validate a user token. `Ok(None)` means the auth service rejected it.
    pub async fn check_token(&self, token: &str) -> Result<Option<TokenInfo>, DomainError> {
        let response = self
            .client
            .post(format!("{}/api/oauth/check_token", self.base_url))
            .query(&[("token", token)])
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Auth service unreachable: {e}")))?;

        match response.status() {
            status if status.is_success() => {
                let info = response.json::<TokenInfo>().await.map_err(|e| {
                    DomainError::ExternalService(format!("Invalid check_token response: {e}"))
                })?;
                Ok(Some(info))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(DomainError::ExternalService(format!(
                "check_token failed: {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::new(Client::new(), server.base_url(), "trusted-client", "secret")
    }

    #[tokio::test]
    async fn test_obtain_access_token_is_cached() {
        let server = MockServer::start_async().await;
        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/oauth/token")
                    .query_param("grant_type", "client_credentials")
                    .header_exists("authorization");
                then.status(200).json_body(json!({
                    "access_token": "service-token",
                    "token_type": "bearer",
                    "expires_in": 3600
                }));
            })
            .await;

        let auth = client_for(&server);
        assert_eq!(auth.obtain_access_token().await.unwrap(), "service-token");
        assert_eq!(auth.obtain_access_token().await.unwrap(), "service-token");

        token_mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_obtain_access_token_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth/token");
                then.status(401);
            })
            .await;

        let result = client_for(&server).obtain_access_token().await;
        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }

    #[tokio::test]
    async fn test_check_token_valid() {
        let server = MockServer::start_async().await;
        let user_id = Uuid::new_v4();
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/oauth/check_token")
                    .query_param("token", "user-token");
                then.status(200).json_body(json!({
                    "user_name": "administrator",
                    "referenceDataUserId": user_id,
                    "authorities": ["USER"],
                    "client_id": "user-client",
                    "exp": 1_900_000_000
                }));
            })
            .await;

        let info = client_for(&server)
            .check_token("user-token")
            .await
            .unwrap()
            .expect("token info");

        assert_eq!(info.user_name.as_deref(), Some("administrator"));
        assert_eq!(info.reference_data_user_id, Some(user_id));
        assert_eq!(info.authorities, vec!["USER".to_string()]);
    }

    #[tokio::test]
    async fn test_check_token_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth/check_token");
                then.status(400).json_body(json!({"error": "invalid_token"}));
            })
            .await;

        let info = client_for(&server).check_token("expired").await.unwrap();
        assert!(info.is_none());
    }

    #[tokio::test]
    async fn test_check_token_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth/check_token");
                then.status(500);
            })
            .await;

        let result = client_for(&server).check_token("any").await;
        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }
}
