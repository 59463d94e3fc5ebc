//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod facility_service;
mod product_category_service;
mod requisition_group_service;
mod requisition_service;

pub use facility_service::{FacilityService, OrderService};
pub use product_category_service::ProductCategoryService;
pub use requisition_group_service::RequisitionGroupService;
pub use requisition_service::{RequisitionService, RequisitionServiceDeps};

#[cfg(test)]
pub(crate) use requisition_service::tests::Fixture as RequisitionFixture;
