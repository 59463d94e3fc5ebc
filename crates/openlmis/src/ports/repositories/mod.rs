//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod facility_repository;
mod order_repository;
mod product_category_repository;
mod requisition_group_repository;
mod requisition_repository;

pub use facility_repository::*;
pub use order_repository::*;
pub use product_category_repository::*;
pub use requisition_group_repository::*;
pub use requisition_repository::*;
