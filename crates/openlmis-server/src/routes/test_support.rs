//! Router harness over in-memory adapters

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Extension, Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use uuid::Uuid;

use crate::adapters::PropertiesMessageService;
use crate::adapters::memory::{
    InMemoryFacilityRepository, InMemoryOrderRepository, InMemoryProductCategoryRepository,
    InMemoryProgramRepository, InMemoryRequisitionGroupRepository,
};
use crate::application::{
    FacilityService, OrderService, ProductCategoryService, RequisitionFixture,
    RequisitionGroupService,
};
use crate::auth::AuthenticatedUser;
use crate::AppState;

pub(crate) struct TestApp {
    pub groups: Arc<InMemoryRequisitionGroupRepository>,
    pub categories: Arc<InMemoryProductCategoryRepository>,
    pub facilities: Arc<InMemoryFacilityRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
    pub requisitions: RequisitionFixture,
    pub user: AuthenticatedUser,
    state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_orders_and_programs(InMemoryOrderRepository::default(), Default::default())
    }

    pub fn with_orders_and_programs(
        orders: InMemoryOrderRepository,
        programs: InMemoryProgramRepository,
    ) -> Self {
        let groups = Arc::new(InMemoryRequisitionGroupRepository::default());
        let categories = Arc::new(InMemoryProductCategoryRepository::default());
        let facilities = Arc::new(InMemoryFacilityRepository::default());
        let orders = Arc::new(orders);
        let requisitions = RequisitionFixture::new();
        let user = AuthenticatedUser {
            user_id: Some(Uuid::new_v4()),
            username: "administrator".to_string(),
            authorities: vec!["USER".to_string()],
        };

        let state = AppState {
            requisition_group_service: Arc::new(RequisitionGroupService::new(groups.clone())),
            product_category_service: Arc::new(ProductCategoryService::new(categories.clone())),
            facility_service: Arc::new(FacilityService::new(facilities.clone())),
            order_service: Arc::new(OrderService::new(
                orders.clone(),
                facilities.clone(),
                Arc::new(programs),
            )),
            requisition_service: Arc::new(requisitions.service()),
            messages: Arc::new(PropertiesMessageService::new("en")),
        };

        Self {
            groups,
            categories,
            facilities,
            orders,
            requisitions,
            user,
            state,
        }
    }

    pub fn router(&self) -> Router {
        crate::api_router()
            .layer(Extension(self.user.clone()))
            .with_state(self.state.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router().oneshot(request).await.unwrap()
    }
}

pub(crate) fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub(crate) async fn text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
