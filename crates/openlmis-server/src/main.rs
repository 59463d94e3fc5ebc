use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{
    AuthClient, FacilityReferenceDataClient, HttpNotificationService, PeriodReferenceDataClient,
    PgFacilityRepository, PgOrderRepository, PgProductCategoryRepository, PgProgramRepository,
    PgRequisitionGroupRepository, PgRequisitionRepository, ProgramReferenceDataClient,
    PropertiesMessageService, ReferenceDataClient, UserReferenceDataClient,
};
use application::{
    FacilityService, OrderService, ProductCategoryService, RequisitionGroupService,
    RequisitionService, RequisitionServiceDeps,
};
use config::AppConfig;
use openlmis::{
    BasicRequisitionDtoBuilder, DefaultRequisitionDtoBuilder, ExportHelper, MessageService,
    RequisitionDtoBuilder, RequisitionExportHelper, RequisitionReportDtoBuilder,
};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub requisition_group_service: Arc<RequisitionGroupService>,
    pub product_category_service: Arc<ProductCategoryService>,
    pub facility_service: Arc<FacilityService>,
    pub order_service: Arc<OrderService>,
    pub requisition_service: Arc<RequisitionService>,
    pub messages: Arc<dyn MessageService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "OpenLMIS requisition API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Every authenticated endpoint
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(routes::requisition_group::router())
        .merge(routes::product_category::router())
        .merge(routes::facility::router())
        .merge(routes::requisition::router())
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("OpenLMIS requisition API initializing...");

    let config = AppConfig::from_secrets(&secrets);
    tracing::info!(
        "Reference data: {}, auth: {}, notification: {}",
        config.referencedata_url,
        config.auth_url,
        config.notification_url
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {e}"))?;

    tracing::info!("Database migrations completed");

    // Outbound HTTP
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
    let auth_client = Arc::new(AuthClient::new(
        http.clone(),
        config.auth_url.clone(),
        config.service_client_id.clone(),
        config.service_client_secret.clone(),
    ));
    let reference_data = Arc::new(ReferenceDataClient::new(
        http.clone(),
        config.referencedata_url.clone(),
        auth_client.clone(),
    ));
    let facility_lookup = Arc::new(FacilityReferenceDataClient(reference_data.clone()));
    let program_lookup = Arc::new(ProgramReferenceDataClient(reference_data.clone()));
    let period_lookup = Arc::new(PeriodReferenceDataClient(reference_data.clone()));
    let user_lookup = Arc::new(UserReferenceDataClient(reference_data));
    let notifications = Arc::new(HttpNotificationService::new(
        http,
        config.notification_url.clone(),
        auth_client.clone(),
    ));
    let messages: Arc<dyn MessageService> = Arc::new(PropertiesMessageService::new(&config.locale));

    // DTO builders
    let export_helper: Arc<dyn ExportHelper> = Arc::new(RequisitionExportHelper::new());
    let basic_builder = Arc::new(BasicRequisitionDtoBuilder::new(
        facility_lookup.clone(),
        program_lookup.clone(),
        period_lookup,
    ));
    let dto_builder: Arc<dyn RequisitionDtoBuilder> = Arc::new(DefaultRequisitionDtoBuilder::new(
        basic_builder.clone(),
        export_helper.clone(),
    ));
    let report_builder = Arc::new(RequisitionReportDtoBuilder::new(
        dto_builder.clone(),
        export_helper,
        user_lookup.clone(),
        messages.clone(),
    ));

    // Initialize application services
    let facility_repo = Arc::new(PgFacilityRepository::new(pool.clone()));
    let requisition_service = RequisitionService::new(
        RequisitionServiceDeps {
            repo: Arc::new(PgRequisitionRepository::new(pool.clone())),
            basic_builder,
            dto_builder,
            report_builder,
            facilities: facility_lookup,
            programs: program_lookup,
            users: user_lookup,
            messages: messages.clone(),
            notifications,
        },
        config.currency_code.clone(),
        config.notification_from.clone(),
    );

    let state = AppState {
        requisition_group_service: Arc::new(RequisitionGroupService::new(Arc::new(
            PgRequisitionGroupRepository::new(pool.clone()),
        ))),
        product_category_service: Arc::new(ProductCategoryService::new(Arc::new(
            PgProductCategoryRepository::new(pool.clone()),
        ))),
        facility_service: Arc::new(FacilityService::new(facility_repo.clone())),
        order_service: Arc::new(OrderService::new(
            Arc::new(PgOrderRepository::new(pool.clone())),
            facility_repo,
            Arc::new(PgProgramRepository::new(pool)),
        )),
        requisition_service: Arc::new(requisition_service),
        messages,
    };

    // Protected routes (require authentication)
    let protected_routes = api_router().layer(middleware::from_fn_with_state(
        auth_client,
        auth::auth_middleware,
    ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("OpenLMIS requisition API ready");

    Ok(router.into())
}
