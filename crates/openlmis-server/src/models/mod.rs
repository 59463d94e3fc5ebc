//! API Data Models
//!
//! Request/response bodies of the managed-record endpoints. Requisition
//! endpoints return the domain DTOs directly.

mod error;
mod facility;
mod order;
mod product_category;
mod requisition;
mod requisition_group;

pub use error::*;
pub use facility::*;
pub use order::*;
pub use product_category::*;
pub use requisition::*;
pub use requisition_group::*;
