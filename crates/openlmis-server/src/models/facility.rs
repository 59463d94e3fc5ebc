//! Facility - Health facility or warehouse

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use openlmis::Facility;

/// Facility body for create and update. Any `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRequest {
    pub id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub go_live_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl FacilityRequest {
    pub fn into_facility(self, id: Uuid) -> Facility {
        Facility {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            active: self.active,
            enabled: self.enabled,
            go_live_date: self.go_live_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub enabled: bool,
    pub go_live_date: Option<NaiveDate>,
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            code: facility.code,
            name: facility.name,
            description: facility.description,
            active: facility.active,
            enabled: facility.enabled,
            go_live_date: facility.go_live_date,
        }
    }
}

/// Query of `GET /facilities/{id}/orders`
#[derive(Debug, Deserialize, IntoParams)]
pub struct FacilityOrdersParams {
    /// Program filter
    pub program: Option<Uuid>,
    /// Requesting facility filter
    pub facility: Option<Uuid>,
}
