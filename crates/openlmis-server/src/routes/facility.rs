//! Facility Routes
//!
//! Facility CRUD and the orders supplied by a facility.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use openlmis::{message_keys, DomainError, Message};

use crate::models::{
    ErrorResponse, FacilityOrdersParams, FacilityRequest, FacilityResponse, OrderResponse,
};
use crate::AppState;

use super::{api_error, not_found, ApiError};

/// List all facilities
#[utoipa::path(
    get,
    path = "/facilities",
    responses(
        (status = 200, description = "List of facilities", body = Vec<FacilityResponse>)
    ),
    tag = "Facility"
)]
pub async fn list_facilities(
    State(state): State<AppState>,
) -> Result<Json<Vec<FacilityResponse>>, ApiError> {
    let facilities = state
        .facility_service
        .list_all()
        .await
        .map_err(|e| api_error("Failed to list facilities", e))?;

    Ok(Json(facilities.into_iter().map(Into::into).collect()))
}

/// Create a facility
#[utoipa::path(
    post,
    path = "/facilities",
    request_body = FacilityRequest,
    responses(
        (status = 201, description = "Facility created", body = FacilityResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "Facility"
)]
pub async fn create_facility(
    State(state): State<AppState>,
    Json(payload): Json<FacilityRequest>,
) -> Result<(StatusCode, Json<FacilityResponse>), ApiError> {
    tracing::debug!("Creating facility {}", payload.code);
    if let Some(client_id) = payload.id {
        tracing::debug!("Ignoring client-supplied id {}", client_id);
    }
    let draft = payload.into_facility(Uuid::nil());
    let facility = state
        .facility_service
        .create(draft)
        .await
        .map_err(|e| api_error("Failed to save facility", e))?;

    Ok((StatusCode::CREATED, Json(facility.into())))
}

/// Get a facility by ID
#[utoipa::path(
    get,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility found", body = FacilityResponse),
        (status = 404, description = "Facility not found", body = ErrorResponse)
    ),
    tag = "Facility"
)]
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FacilityResponse>, ApiError> {
    let facility = state
        .facility_service
        .get_by_id(id)
        .await
        .map_err(|e| api_error("Failed to load facility", e))?
        .ok_or_else(|| not_found("Facility", id))?;

    Ok(Json(facility.into()))
}

/// Save a facility under the given ID
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility ID")),
    request_body = FacilityRequest,
    responses(
        (status = 200, description = "Facility saved", body = FacilityResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "Facility"
)]
pub async fn update_facility(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FacilityRequest>,
) -> Result<Json<FacilityResponse>, ApiError> {
    let facility = state
        .facility_service
        .update(id, payload.into_facility(id))
        .await
        .map_err(|e| api_error("Failed to save facility", e))?;

    Ok(Json(facility.into()))
}

/// Delete a facility. Deleting an unknown facility also returns 204.
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 409, description = "Facility is still referenced", body = ErrorResponse)
    ),
    tag = "Facility"
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .facility_service
        .delete(id)
        .await
        .map_err(|e| api_error("Failed to delete facility", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Orders supplied by a facility
#[utoipa::path(
    get,
    path = "/facilities/{id}/orders",
    params(
        ("id" = Uuid, Path, description = "Supplying (home) facility ID"),
        FacilityOrdersParams
    ),
    responses(
        (status = 200, description = "Orders supplied by the facility", body = Vec<OrderResponse>),
        (status = 400, description = "Home facility does not exist", body = String)
    ),
    tag = "Facility"
)]
pub async fn get_facility_orders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<FacilityOrdersParams>,
) -> Response {
    let result = state
        .order_service
        .search_orders(id, params.program, params.facility)
        .await;

    match result {
        Ok(orders) => {
            let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(DomainError::NotFound { .. }) => {
            let message = state
                .messages
                .localize(&Message::new(message_keys::ERROR_FACILITY_NOT_FOUND));
            (StatusCode::BAD_REQUEST, message.message).into_response()
        }
        Err(e) => api_error("Failed to search orders", e).into_response(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/facilities", get(list_facilities).post(create_facility))
        .route(
            "/facilities/:id",
            get(get_facility).put(update_facility).delete(delete_facility),
        )
        .route("/facilities/:id/orders", get(get_facility_orders))
}
