//! Domain Services
//!
//! Builders that compose request-scoped requisition views from a Requisition
//! and reference data resolved through the service ports.

mod basic_requisition_dto_builder;
mod export_helper;
mod requisition_dto_builder;
mod requisition_report_dto_builder;

#[cfg(test)]
pub(crate) mod test_support;

pub use basic_requisition_dto_builder::*;
pub use export_helper::*;
pub use requisition_dto_builder::*;
pub use requisition_report_dto_builder::*;

use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Collapse a lookup result into an optional value.
/// Failed lookups are logged and treated as absent.
pub(crate) fn found_or_none<T>(
    result: Result<Option<T>, DomainError>,
    entity_type: &str,
    id: Uuid,
) -> Option<T> {
    match result {
        Ok(value) => {
            if value.is_none() {
                tracing::debug!("{} {} not found in reference data", entity_type, id);
            }
            value
        }
        Err(e) => {
            tracing::warn!("Lookup of {} {} failed: {}", entity_type, id, e);
            None
        }
    }
}
