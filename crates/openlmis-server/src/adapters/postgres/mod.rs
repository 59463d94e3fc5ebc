//! PostgreSQL Repository Implementations

mod facility_repository;
mod order_repository;
mod product_category_repository;
mod requisition_group_repository;
mod requisition_repository;

pub use facility_repository::{PgFacilityRepository, PgProgramRepository};
pub use order_repository::PgOrderRepository;
pub use product_category_repository::PgProductCategoryRepository;
pub use requisition_group_repository::PgRequisitionGroupRepository;
pub use requisition_repository::PgRequisitionRepository;

use openlmis::DomainError;

/// Map a failed write. Any integrity violation is a validation failure of the submitted record.
fn map_write_error(e: sqlx::Error) -> DomainError {
    match e.as_database_error() {
        Some(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation()
                || matches!(db.kind(), sqlx::error::ErrorKind::NotNullViolation) =>
        {
            DomainError::Validation(db.message().to_string())
        }
        _ => DomainError::Repository(e.to_string()),
    }
}

/// Map a failed delete. A foreign key violation means the row is still referenced.
fn map_delete_error(e: sqlx::Error) -> DomainError {
    match e.as_database_error() {
        Some(db) if db.is_foreign_key_violation() => DomainError::Conflict(db.message().to_string()),
        _ => DomainError::Repository(e.to_string()),
    }
}

fn map_read_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}
