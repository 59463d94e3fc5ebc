//! RequisitionGroup Application Service (Use Case)
//!
//! Orchestrates domain operations for requisition group management.

use std::sync::Arc;
use uuid::Uuid;

use openlmis::{DomainError, RequisitionGroup, RequisitionGroupRepository};

/// Application service for RequisitionGroup operations
pub struct RequisitionGroupService {
    repo: Arc<dyn RequisitionGroupRepository>,
}

impl RequisitionGroupService {
    pub fn new(repo: Arc<dyn RequisitionGroupRepository>) -> Self {
        Self { repo }
    }

    /// Get all requisition groups
    pub async fn list_all(&self) -> Result<Vec<RequisitionGroup>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a requisition group by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<RequisitionGroup>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new requisition group under a fresh ID
    pub async fn create(
        &self,
        code: String,
        name: String,
        description: Option<String>,
        supervisory_node_id: Option<Uuid>,
        member_facility_ids: Vec<Uuid>,
    ) -> Result<RequisitionGroup, DomainError> {
        let group = RequisitionGroup::new(
            code,
            name,
            description,
            supervisory_node_id,
            member_facility_ids,
        );
        let saved = self.repo.save(&group).await.inspect_err(|e| {
            tracing::error!("Failed to create requisition group {}: {}", group.code, e);
        })?;

        tracing::info!("Created RequisitionGroup: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    /// Save the supplied group under `id`, inserting it if it does not exist
    pub async fn update(
        &self,
        id: Uuid,
        group: RequisitionGroup,
    ) -> Result<RequisitionGroup, DomainError> {
        let group = RequisitionGroup { id, ..group };
        let saved = self.repo.save(&group).await.inspect_err(|e| {
            tracing::error!("Failed to update requisition group {}: {}", id, e);
        })?;

        tracing::info!("Saved RequisitionGroup: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    /// Delete a requisition group
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("RequisitionGroup", id));
        }
        self.repo.delete(id).await?;
        tracing::info!("Deleted RequisitionGroup: {}", id);
        Ok(())
    }
}
