//! Requisition Routes
//!
//! Lifecycle (initiate, submit, authorize, delete) and the basic, full and
//! report views. The acting user comes from the auth middleware.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use openlmis::{BasicRequisitionDto, RequisitionDto, RequisitionReportDto};

use crate::auth::AuthenticatedUser;
use crate::models::{ErrorResponse, InitiateRequisitionParams, RequisitionSearchParams};
use crate::AppState;

use super::{api_error, not_found, ApiError};

/// Initiate a requisition
#[utoipa::path(
    post,
    path = "/requisitions/initiate",
    params(InitiateRequisitionParams),
    responses(
        (status = 201, description = "Requisition initiated", body = RequisitionDto),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn initiate_requisition(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<InitiateRequisitionParams>,
) -> Result<(StatusCode, Json<RequisitionDto>), ApiError> {
    tracing::debug!(
        "{} initiating requisition for facility {} program {} period {}",
        user.username,
        params.facility,
        params.program,
        params.period
    );
    let dto = state
        .requisition_service
        .initiate(
            params.facility,
            params.program,
            params.period,
            params.emergency,
            user.user_id,
        )
        .await
        .map_err(|e| api_error("Failed to initiate requisition", e))?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Search requisitions by facility and program
#[utoipa::path(
    get,
    path = "/requisitions/search",
    params(RequisitionSearchParams),
    responses((status = 200, description = "Matching requisitions", body = [BasicRequisitionDto])),
    tag = "Requisition"
)]
pub async fn search_requisitions(
    State(state): State<AppState>,
    Query(params): Query<RequisitionSearchParams>,
) -> Result<Json<Vec<BasicRequisitionDto>>, ApiError> {
    let dtos = state
        .requisition_service
        .search(params.facility, params.program)
        .await
        .map_err(|e| api_error("Failed to search requisitions", e))?;

    Ok(Json(dtos))
}

/// Get a requisition by ID
#[utoipa::path(
    get,
    path = "/requisitions/{id}",
    params(("id" = Uuid, Path, description = "Requisition ID")),
    responses(
        (status = 200, description = "Requisition found", body = RequisitionDto),
        (status = 404, description = "Requisition not found", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn get_requisition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequisitionDto>, ApiError> {
    let dto = state
        .requisition_service
        .get(id)
        .await
        .map_err(|e| api_error("Failed to load requisition", e))?
        .ok_or_else(|| not_found("Requisition", id))?;

    Ok(Json(dto))
}

/// Submit an initiated requisition
#[utoipa::path(
    put,
    path = "/requisitions/{id}/submit",
    params(("id" = Uuid, Path, description = "Requisition ID")),
    responses(
        (status = 200, description = "Requisition submitted", body = RequisitionDto),
        (status = 400, description = "Requisition cannot be submitted", body = ErrorResponse),
        (status = 404, description = "Requisition not found", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn submit_requisition(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequisitionDto>, ApiError> {
    let dto = state
        .requisition_service
        .submit(id, user.user_id)
        .await
        .map_err(|e| api_error("Failed to submit requisition", e))?;

    Ok(Json(dto))
}

/// Authorize a submitted requisition
#[utoipa::path(
    put,
    path = "/requisitions/{id}/authorize",
    params(("id" = Uuid, Path, description = "Requisition ID")),
    responses(
        (status = 200, description = "Requisition authorized", body = RequisitionDto),
        (status = 400, description = "Requisition cannot be authorized", body = ErrorResponse),
        (status = 404, description = "Requisition not found", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn authorize_requisition(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequisitionDto>, ApiError> {
    let dto = state
        .requisition_service
        .authorize(id, user.user_id)
        .await
        .map_err(|e| api_error("Failed to authorize requisition", e))?;

    Ok(Json(dto))
}

/// Report view of a requisition
#[utoipa::path(
    get,
    path = "/requisitions/{id}/report",
    params(("id" = Uuid, Path, description = "Requisition ID")),
    responses(
        (status = 200, description = "Requisition report", body = RequisitionReportDto),
        (status = 404, description = "Requisition not found", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn requisition_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequisitionReportDto>, ApiError> {
    let report = state
        .requisition_service
        .report(id)
        .await
        .map_err(|e| api_error("Failed to build requisition report", e))?
        .ok_or_else(|| not_found("Requisition", id))?;

    Ok(Json(report))
}

/// Delete an initiated or skipped requisition
#[utoipa::path(
    delete,
    path = "/requisitions/{id}",
    params(("id" = Uuid, Path, description = "Requisition ID")),
    responses(
        (status = 204, description = "Requisition deleted"),
        (status = 400, description = "Requisition cannot be deleted", body = ErrorResponse),
        (status = 404, description = "Requisition not found", body = ErrorResponse)
    ),
    tag = "Requisition"
)]
pub async fn delete_requisition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .requisition_service
        .delete(id)
        .await
        .map_err(|e| api_error("Failed to delete requisition", e))?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requisitions/initiate", post(initiate_requisition))
        .route("/requisitions/search", get(search_requisitions))
        .route(
            "/requisitions/:id",
            get(get_requisition).delete(delete_requisition),
        )
        .route("/requisitions/:id/submit", put(submit_requisition))
        .route("/requisitions/:id/authorize", put(authorize_requisition))
        .route("/requisitions/:id/report", get(requisition_report))
}
