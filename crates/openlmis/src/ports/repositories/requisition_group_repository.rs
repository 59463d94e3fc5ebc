//! RequisitionGroup Repository Port
//!
//! Abstract interface for RequisitionGroup persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, RequisitionGroup};

/// Repository interface for RequisitionGroup entities
#[async_trait]
pub trait RequisitionGroupRepository: Send + Sync {
    /// Find a RequisitionGroup by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RequisitionGroup>, DomainError>;

    /// Find all RequisitionGroups
    async fn find_all(&self) -> Result<Vec<RequisitionGroup>, DomainError>;

    /// Save a RequisitionGroup (insert or update).
    /// Unique or constraint violations surface as `DomainError::Validation`.
    async fn save(&self, group: &RequisitionGroup) -> Result<RequisitionGroup, DomainError>;

    /// Delete a RequisitionGroup by ID.
    /// Existing references surface as `DomainError::Conflict`.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
