//! RequisitionGroup - Facilities supervised together

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use openlmis::RequisitionGroup;

/// Requisition group body for create and update. Any `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionGroupRequest {
    pub id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub supervisory_node_id: Option<Uuid>,
    #[serde(default)]
    pub member_facility_ids: Vec<Uuid>,
}

impl RequisitionGroupRequest {
    /// Domain record stored under `id`
    pub fn into_group(self, id: Uuid) -> RequisitionGroup {
        RequisitionGroup {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            supervisory_node_id: self.supervisory_node_id,
            member_facility_ids: self.member_facility_ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionGroupResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub supervisory_node_id: Option<Uuid>,
    pub member_facility_ids: Vec<Uuid>,
}

impl From<RequisitionGroup> for RequisitionGroupResponse {
    fn from(group: RequisitionGroup) -> Self {
        Self {
            id: group.id,
            code: group.code,
            name: group.name,
            description: group.description,
            supervisory_node_id: group.supervisory_node_id,
            member_facility_ids: group.member_facility_ids,
        }
    }
}
