//! Reference Data Service Ports
//!
//! Lookups against the remote reference-data service. Every lookup returns
//! `Ok(None)` when the record does not exist upstream; `Err` is reserved for
//! transport or protocol failures.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::{FacilityDto, ProcessingPeriodDto, ProgramDto, UserDto};

#[async_trait]
pub trait FacilityReferenceDataService: Send + Sync {
    async fn find_one(&self, id: Uuid) -> Result<Option<FacilityDto>, DomainError>;
}

#[async_trait]
pub trait ProgramReferenceDataService: Send + Sync {
    async fn find_one(&self, id: Uuid) -> Result<Option<ProgramDto>, DomainError>;
}

#[async_trait]
pub trait PeriodService: Send + Sync {
    async fn get_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>, DomainError>;
}

#[async_trait]
pub trait UserReferenceDataService: Send + Sync {
    async fn find_one(&self, id: Uuid) -> Result<Option<UserDto>, DomainError>;
}
