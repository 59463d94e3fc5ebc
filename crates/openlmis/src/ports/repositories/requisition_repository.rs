//! Requisition Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Requisition};

/// Repository interface for Requisition aggregates (with line items and status log)
#[async_trait]
pub trait RequisitionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Requisition>, DomainError>;

    /// Requisitions matching the given facility and/or program
    async fn search(
        &self,
        facility_id: Option<Uuid>,
        program_id: Option<Uuid>,
    ) -> Result<Vec<Requisition>, DomainError>;

    /// Save the aggregate (insert or update), replacing line items and status log
    async fn save(&self, requisition: &Requisition) -> Result<Requisition, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
