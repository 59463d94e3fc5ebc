//! Reference-data HTTP clients
//!
//! One generic lookup against `{base}/api/{resource}/{id}` backs the
//! facility, program, period and user ports. A 404 is an absent record.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use openlmis::{
    DomainError, FacilityDto, FacilityReferenceDataService, PeriodService, ProcessingPeriodDto,
    ProgramDto, ProgramReferenceDataService, UserDto, UserReferenceDataService,
};

use super::AuthClient;

pub struct ReferenceDataClient {
    client: Client,
    base_url: String,
    auth: Arc<AuthClient>,
}

impl ReferenceDataClient {
    pub fn new(client: Client, base_url: impl Into<String>, auth: Arc<AuthClient>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            auth,
        }
    }

    pub async fn find_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Uuid,
    ) -> Result<Option<T>, DomainError> {
        let token = self.auth.obtain_access_token().await?;
        let url = format!("{}/api/{}/{}", self.base_url, resource, id);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("GET {url} failed: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response
                .json::<T>()
                .await
                .map(Some)
                .map_err(|e| DomainError::ExternalService(format!("Invalid {resource} body: {e}"))),
            status => Err(DomainError::ExternalService(format!(
                "GET {url} returned {status}"
            ))),
        }
    }
}

/// FacilityReferenceDataService over `/api/facilities`
pub struct FacilityReferenceDataClient(pub Arc<ReferenceDataClient>);

#[async_trait]
impl FacilityReferenceDataService for FacilityReferenceDataClient {
    async fn find_one(&self, id: Uuid) -> Result<Option<FacilityDto>, DomainError> {
        self.0.find_one("facilities", id).await
    }
}

/// ProgramReferenceDataService over `/api/programs`
pub struct ProgramReferenceDataClient(pub Arc<ReferenceDataClient>);

#[async_trait]
impl ProgramReferenceDataService for ProgramReferenceDataClient {
    async fn find_one(&self, id: Uuid) -> Result<Option<ProgramDto>, DomainError> {
        self.0.find_one("programs", id).await
    }
}

/// PeriodService over `/api/processingPeriods`
pub struct PeriodReferenceDataClient(pub Arc<ReferenceDataClient>);

#[async_trait]
impl PeriodService for PeriodReferenceDataClient {
    async fn get_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>, DomainError> {
        self.0.find_one("processingPeriods", id).await
    }
}

/// UserReferenceDataService over `/api/users`
pub struct UserReferenceDataClient(pub Arc<ReferenceDataClient>);

#[async_trait]
impl UserReferenceDataService for UserReferenceDataClient {
    async fn find_one(&self, id: Uuid) -> Result<Option<UserDto>, DomainError> {
        self.0.find_one("users", id).await
    }
}
