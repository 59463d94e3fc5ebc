//! ProductCategory Routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{
    ErrorResponse, ProductCategoryRequest, ProductCategoryResponse, ProductCategorySearchParams,
};
use crate::AppState;

use super::{api_error, not_found, ApiError};

/// List all product categories
#[utoipa::path(
    get,
    path = "/productCategories",
    responses(
        (status = 200, description = "List of product categories", body = Vec<ProductCategoryResponse>)
    ),
    tag = "ProductCategory"
)]
pub async fn list_product_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductCategoryResponse>>, ApiError> {
    let categories = state
        .product_category_service
        .list_all()
        .await
        .map_err(|e| api_error("Failed to list product categories", e))?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Create a product category
#[utoipa::path(
    post,
    path = "/productCategories",
    request_body = ProductCategoryRequest,
    responses(
        (status = 201, description = "Product category created", body = ProductCategoryResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "ProductCategory"
)]
pub async fn create_product_category(
    State(state): State<AppState>,
    Json(payload): Json<ProductCategoryRequest>,
) -> Result<(StatusCode, Json<ProductCategoryResponse>), ApiError> {
    tracing::debug!("Creating product category {}", payload.code);
    if let Some(client_id) = payload.id {
        tracing::debug!("Ignoring client-supplied id {}", client_id);
    }
    let category = state
        .product_category_service
        .create(payload.code, payload.name, payload.display_order)
        .await
        .map_err(|e| api_error("Failed to save product category", e))?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Find product categories by code
#[utoipa::path(
    get,
    path = "/productCategories/search",
    params(ProductCategorySearchParams),
    responses(
        (status = 200, description = "Matching product categories", body = Vec<ProductCategoryResponse>)
    ),
    tag = "ProductCategory"
)]
pub async fn search_product_categories(
    State(state): State<AppState>,
    Query(params): Query<ProductCategorySearchParams>,
) -> Result<Json<Vec<ProductCategoryResponse>>, ApiError> {
    let categories = state
        .product_category_service
        .search(params.code.as_deref())
        .await
        .map_err(|e| api_error("Failed to search product categories", e))?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Get a product category by ID
#[utoipa::path(
    get,
    path = "/productCategories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    responses(
        (status = 200, description = "Product category found", body = ProductCategoryResponse),
        (status = 404, description = "Product category not found", body = ErrorResponse)
    ),
    tag = "ProductCategory"
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductCategoryResponse>, ApiError> {
    let category = state
        .product_category_service
        .get_by_id(id)
        .await
        .map_err(|e| api_error("Failed to load product category", e))?
        .ok_or_else(|| not_found("ProductCategory", id))?;

    Ok(Json(category.into()))
}

/// Save a product category under the given ID
#[utoipa::path(
    put,
    path = "/productCategories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    request_body = ProductCategoryRequest,
    responses(
        (status = 200, description = "Product category saved", body = ProductCategoryResponse),
        (status = 400, description = "Constraint violation", body = ErrorResponse)
    ),
    tag = "ProductCategory"
)]
pub async fn update_product_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductCategoryRequest>,
) -> Result<Json<ProductCategoryResponse>, ApiError> {
    let category = state
        .product_category_service
        .update(id, payload.into_category(id))
        .await
        .map_err(|e| api_error("Failed to save product category", e))?;

    Ok(Json(category.into()))
}

/// Delete a product category
#[utoipa::path(
    delete,
    path = "/productCategories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    responses(
        (status = 204, description = "Product category deleted"),
        (status = 404, description = "Product category not found", body = ErrorResponse),
        (status = 409, description = "Product category is still referenced", body = ErrorResponse)
    ),
    tag = "ProductCategory"
)]
pub async fn delete_product_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .product_category_service
        .delete(id)
        .await
        .map_err(|e| api_error("Failed to delete product category", e))?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/productCategories",
            get(list_product_categories).post(create_product_category),
        )
        .route("/productCategories/search", get(search_product_categories))
        .route(
            "/productCategories/:id",
            get(get_product_category)
                .put(update_product_category)
                .delete(delete_product_category),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{json_body, request, TestApp};
    use openlmis::ProductCategory;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_by_code() {
        let app = TestApp::new();
        let antibiotics = ProductCategory::new("ANT".into(), "Antibiotics".into(), 1);
        app.categories.insert(antibiotics.clone());
        app.categories
            .insert(ProductCategory::new("VAC".into(), "Vaccines".into(), 2));

        let response = app
            .send(request("GET", "/productCategories/search?code=ANT", None))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<ProductCategoryResponse> = json_body(response).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, antibiotics.id);

        let all: Vec<ProductCategoryResponse> = json_body(
            app.send(request("GET", "/productCategories/search", None))
                .await,
        )
        .await;
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let app = TestApp::new();

        let created = app
            .send(request(
                "POST",
                "/productCategories",
                Some(json!({"code": "ANT", "name": "Antibiotics", "displayOrder": 4})),
            ))
            .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: ProductCategoryResponse = json_body(created).await;
        assert_eq!(created.display_order, 4);

        let fetched = app
            .send(request("GET", &format!("/productCategories/{}", created.id), None))
            .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched: ProductCategoryResponse = json_body(fetched).await;
        assert_eq!(fetched.code, "ANT");
    }

    #[tokio::test]
    async fn test_update_duplicate_code_is_bad_request() {
        let app = TestApp::new();
        app.categories
            .insert(ProductCategory::new("ANT".into(), "Antibiotics".into(), 1));

        let response = app
            .send(request(
                "PUT",
                &format!("/productCategories/{}", Uuid::new_v4()),
                Some(json!({"code": "ANT", "name": "Copy"})),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.message, "Failed to save product category");
    }

    #[tokio::test]
    async fn test_delete_referenced_is_conflict() {
        let app = TestApp::new();
        let category = ProductCategory::new("ANT".into(), "Antibiotics".into(), 1);
        app.categories.insert(category.clone());
        app.categories.mark_referenced(category.id);

        let response = app
            .send(request("DELETE", &format!("/productCategories/{}", category.id), None))
            .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(app.categories.get(category.id).is_some());
    }
}
