//! HTTP Notification Service
//!
//! Posts notifications to `{notification}/api/notification` using a service token.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use openlmis::{DomainError, Notification, NotificationService};

use super::AuthClient;

pub struct HttpNotificationService {
    client: Client,
    base_url: String,
    auth: Arc<AuthClient>,
}

impl HttpNotificationService {
    pub fn new(client: Client, base_url: impl Into<String>, auth: Arc<AuthClient>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            auth,
        }
    }
}

#[async_trait]
impl NotificationService for HttpNotificationService {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
        let token = self.auth.obtain_access_token().await?;

        let response = self
            .client
            .post(format!("{}/api/notification", self.base_url))
            .bearer_auth(token)
            .json(notification)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Notification failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "Notification service returned {status}: {body}"
            )));
        }

        tracing::info!("Notification sent to {}", notification.to);
        Ok(())
    }
}
