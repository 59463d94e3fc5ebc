//! RequisitionGroup Routes
//!
//! HTTP handlers that delegate to RequisitionGroupService.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{ErrorResponse, RequisitionGroupRequest, RequisitionGroupResponse};
use crate::AppState;

use super::{api_error, not_found, ApiError};

/// List all requisition groups
#[utoipa::path(
    get,
    path = "/requisitionGroups",
    responses(
        (status = 200, description = "List of requisition groups", body = Vec<RequisitionGroupResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "RequisitionGroup"
)]
pub async fn list_requisition_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequisitionGroupResponse>>, ApiError> {
    let groups = state
        .requisition_group_service
        .list_all()
        .await
        .map_err(|e| api_error("Failed to list requisition groups", e))?;

    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// Create a requisition group
#[utoipa::path(
    post,
    path = "/requisitionGroups",
    request_body = RequisitionGroupRequest,
    responses(
        (status = 201, description = "Requisition group created", body = RequisitionGroupResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "RequisitionGroup"
)]
pub async fn create_requisition_group(
    State(state): State<AppState>,
    Json(payload): Json<RequisitionGroupRequest>,
) -> Result<(StatusCode, Json<RequisitionGroupResponse>), ApiError> {
    tracing::debug!("Creating requisition group {}", payload.code);
    if let Some(client_id) = payload.id {
        tracing::debug!("Ignoring client-supplied id {}", client_id);
    }
    let group = state
        .requisition_group_service
        .create(
            payload.code,
            payload.name,
            payload.description,
            payload.supervisory_node_id,
            payload.member_facility_ids,
        )
        .await
        .map_err(|e| api_error("Failed to save requisition group", e))?;

    Ok((StatusCode::CREATED, Json(group.into())))
}

/// Get a requisition group by ID
#[utoipa::path(
    get,
    path = "/requisitionGroups/{id}",
    params(("id" = Uuid, Path, description = "Requisition group ID")),
    responses(
        (status = 200, description = "Requisition group found", body = RequisitionGroupResponse),
        (status = 404, description = "Requisition group not found", body = ErrorResponse)
    ),
    tag = "RequisitionGroup"
)]
pub async fn get_requisition_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequisitionGroupResponse>, ApiError> {
    let group = state
        .requisition_group_service
        .get_by_id(id)
        .await
        .map_err(|e| api_error("Failed to load requisition group", e))?
        .ok_or_else(|| not_found("RequisitionGroup", id))?;

    Ok(Json(group.into()))
}

/// Save a requisition group under the given ID
#[utoipa::path(
    put,
    path = "/requisitionGroups/{id}",
    params(("id" = Uuid, Path, description = "Requisition group ID")),
    request_body = RequisitionGroupRequest,
    responses(
        (status = 200, description = "Requisition group saved", body = RequisitionGroupResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "RequisitionGroup"
)]
pub async fn update_requisition_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RequisitionGroupRequest>,
) -> Result<Json<RequisitionGroupResponse>, ApiError> {
    tracing::debug!("Updating requisition group {}", id);
    let group = state
        .requisition_group_service
        .update(id, payload.into_group(id))
        .await
        .map_err(|e| api_error("Failed to save requisition group", e))?;

    Ok(Json(group.into()))
}

/// Delete a requisition group
#[utoipa::path(
    delete,
    path = "/requisitionGroups/{id}",
    params(("id" = Uuid, Path, description = "Requisition group ID")),
    responses(
        (status = 204, description = "Requisition group deleted"),
        (status = 404, description = "Requisition group not found", body = ErrorResponse),
        (status = 409, description = "Requisition group is still referenced", body = ErrorResponse)
    ),
    tag = "RequisitionGroup"
)]
pub async fn delete_requisition_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .requisition_group_service
        .delete(id)
        .await
        .map_err(|e| api_error("Failed to delete requisition group", e))?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/requisitionGroups",
            get(list_requisition_groups).post(create_requisition_group),
        )
        .route(
            "/requisitionGroups/:id",
            get(get_requisition_group)
                .put(update_requisition_group)
                .delete(delete_requisition_group),
        )
}
