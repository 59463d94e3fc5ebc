//! Facility Application Service (Use Case)
//!
//! Facility CRUD plus the order listing of a supplying (home) facility.

use std::sync::Arc;
use uuid::Uuid;

use openlmis::{
    DomainError, Facility, FacilityRepository, Order, OrderRepository, OrderSearchFilter,
    ProgramRepository,
};

/// Application service for Facility operations
pub struct FacilityService {
    repo: Arc<dyn FacilityRepository>,
}

impl FacilityService {
    pub fn new(repo: Arc<dyn FacilityRepository>) -> Self {
        Self { repo }
    }

    /// Get all facilities
    pub async fn list_all(&self) -> Result<Vec<Facility>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a facility by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Facility>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new facility under a fresh ID
    pub async fn create(&self, draft: Facility) -> Result<Facility, DomainError> {
        let facility = Facility {
            id: Uuid::new_v4(),
            ..draft
        };
        let saved = self.repo.save(&facility).await.inspect_err(|e| {
            tracing::error!("Failed to create facility {}: {}", facility.code, e);
        })?;

        tracing::info!("Created Facility: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    /// Save the supplied facility under `id`
    pub async fn update(&self, id: Uuid, facility: Facility) -> Result<Facility, DomainError> {
        let facility = Facility { id, ..facility };
        let saved = self.repo.save(&facility).await.inspect_err(|e| {
            tracing::error!("Failed to update facility {}: {}", id, e);
        })?;

        tracing::info!("Saved Facility: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    /// Delete a facility. A missing facility is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            tracing::info!("Deleted Facility: {}", id);
        } else {
            tracing::debug!("Facility {} did not exist, nothing deleted", id);
        }
        Ok(())
    }
}

/// Order listing for a supplying facility
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    facilities: Arc<dyn FacilityRepository>,
    programs: Arc<dyn ProgramRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        facilities: Arc<dyn FacilityRepository>,
        programs: Arc<dyn ProgramRepository>,
    ) -> Self {
        Self {
            orders,
            facilities,
            programs,
        }
    }

    /// Orders supplied by `home_facility_id`, optionally narrowed by program and
    /// requesting facility. Filters naming unknown records are dropped.
    pub async fn search_orders(
        &self,
        home_facility_id: Uuid,
        program_id: Option<Uuid>,
        requesting_facility_id: Option<Uuid>,
    ) -> Result<Vec<Order>, DomainError> {
        let home = self
            .facilities
            .find_by_id(home_facility_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Facility", home_facility_id))?;

        let program = match program_id {
            Some(id) => self.programs.find_by_id(id).await?,
            None => None,
        };
        let requesting = match requesting_facility_id {
            Some(id) => self.facilities.find_by_id(id).await?,
            None => None,
        };

        let filter = OrderSearchFilter {
            supplying_facility_id: Some(home.id),
            requesting_facility_id: requesting.map(|f| f.id),
            program_id: program.map(|p| p.id),
        };
        tracing::debug!("Searching orders with {:?}", filter);

        self.orders.search(&filter).await
    }
}
