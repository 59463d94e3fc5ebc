//! OpenLMIS API Routes
//!
//! - /requisitionGroups - Requisition group management
//! - /productCategories - Product category management and search
//! - /facilities - Facility management and supplied orders
//! - /requisitions - Requisition lifecycle and views

pub mod facility;
pub mod product_category;
pub mod requisition;
pub mod requisition_group;
pub mod swagger;

use axum::{http::StatusCode, Json};

use openlmis::DomainError;

use crate::models::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to a status code and error body. `context` becomes the
/// message; the error itself the description.
pub fn api_error(context: &str, error: DomainError) -> ApiError {
    let status = match &error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) | DomainError::ExternalService(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if error.is_client_error() {
        tracing::debug!("{}: {}", context, error);
    } else {
        tracing::error!("{}: {}", context, error);
    }
    (status, Json(ErrorResponse::new(context, error.to_string())))
}

pub fn not_found(entity_type: &str, id: uuid::Uuid) -> ApiError {
    api_error(
        &format!("{entity_type} not found"),
        DomainError::not_found(entity_type, id),
    )
}

#[cfg(test)]
pub(crate) mod test_support;
