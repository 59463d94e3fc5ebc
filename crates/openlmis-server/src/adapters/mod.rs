//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod auth;
#[cfg(test)]
pub mod memory;
pub mod messages;
pub mod notification;
pub mod postgres;
pub mod referencedata;

// Re-exports
pub use auth::{AuthClient, TokenInfo};
pub use messages::PropertiesMessageService;
pub use notification::HttpNotificationService;
pub use postgres::{
    PgFacilityRepository, PgOrderRepository, PgProductCategoryRepository, PgProgramRepository,
    PgRequisitionGroupRepository, PgRequisitionRepository,
};
pub use referencedata::{
    FacilityReferenceDataClient, PeriodReferenceDataClient, ProgramReferenceDataClient,
    ReferenceDataClient, UserReferenceDataClient,
};
