//! Facility and Program Repository Ports
//!
//! Locally managed facility and program records used by the facility routes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Facility, Program};

/// Repository interface for Facility entities
#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Facility>, DomainError>;

    async fn save(&self, facility: &Facility) -> Result<Facility, DomainError>;

    /// Delete by ID; a missing row is not an error and yields `false`
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

/// Repository interface for Program entities
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Program>, DomainError>;
}
