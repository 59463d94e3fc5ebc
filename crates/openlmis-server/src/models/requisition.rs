use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

/// Query of `POST /requisitions/initiate`
#[derive(Debug, Deserialize, IntoParams)]
pub struct InitiateRequisitionParams {
    pub facility: Uuid,
    pub program: Uuid,
    pub period: Uuid,
    #[serde(default)]
    pub emergency: bool,
}

/// Query of `GET /requisitions/search`
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequisitionSearchParams {
    pub facility: Option<Uuid>,
    pub program: Option<Uuid>,
}
