//! Runtime configuration
//!
//! Values come from Shuttle secrets; anything missing falls back to the
//! defaults used by a local OpenLMIS docker stack.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the reference-data service
    pub referencedata_url: String,
    /// Base URL of the auth service (token issue and check_token)
    pub auth_url: String,
    /// Base URL of the notification service
    pub notification_url: String,
    pub service_client_id: String,
    pub service_client_secret: String,
    /// Locale used by the message catalog
    pub locale: String,
    /// Currency of requisition totals
    pub currency_code: String,
    /// Sender address of status-change notifications
    pub notification_from: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Build from any key lookup, e.g. Shuttle secrets or a map in tests
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = get("BASE_URL");
        let url = |key: &str, fallback: &str| {
            get(key)
                .or_else(|| base_url.clone())
                .unwrap_or_else(|| fallback.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Self {
            referencedata_url: url("REFERENCEDATA_URL", &defaults.referencedata_url),
            auth_url: url("AUTH_URL", &defaults.auth_url),
            notification_url: url("NOTIFICATION_URL", &defaults.notification_url),
            service_client_id: get("SERVICE_CLIENT_ID").unwrap_or(defaults.service_client_id),
            service_client_secret: get("SERVICE_CLIENT_SECRET")
                .unwrap_or(defaults.service_client_secret),
            locale: get("LOCALE").unwrap_or(defaults.locale),
            currency_code: get("CURRENCY_CODE").unwrap_or(defaults.currency_code),
            notification_from: get("NOTIFICATION_FROM").unwrap_or(defaults.notification_from),
            http_timeout_secs: get("HTTP_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
        }
    }

    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            referencedata_url: "http://localhost".to_string(),
            auth_url: "http://localhost".to_string(),
            notification_url: "http://localhost".to_string(),
            service_client_id: "trusted-client".to_string(),
            service_client_secret: "secret".to_string(),
            locale: "en".to_string(),
            currency_code: "USD".to_string(),
            notification_from: "noreply@openlmis.org".to_string(),
            http_timeout_secs: 30,
        }
    }
}
