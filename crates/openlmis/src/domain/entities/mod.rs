//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Requisition: supply request with status history and line items
//! - Reference data: facility/program/period/user projections from remote services
//! - Requisition DTOs: composite request-scoped views
//! - RequisitionGroup, ProductCategory, Facility, Program, Order: managed records

mod facility;
mod order;
mod product_category;
mod program;
mod reference_data;
mod requisition;
mod requisition_dto;
mod requisition_group;

pub use facility::*;
pub use order::*;
pub use product_category::*;
pub use program::*;
pub use reference_data::*;
pub use requisition::*;
pub use requisition_dto::*;
pub use requisition_group::*;
