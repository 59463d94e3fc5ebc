//! RequisitionGroup - Set of facilities supervised together
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionGroup {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub supervisory_node_id: Option<Uuid>,
    #[serde(default)]
    pub member_facility_ids: Vec<Uuid>,
}

impl RequisitionGroup {
    /// Create a new RequisitionGroup with a generated ID
    pub fn new(
        code: String,
        name: String,
        description: Option<String>,
        supervisory_node_id: Option<Uuid>,
        member_facility_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            description,
            supervisory_node_id,
            member_facility_ids,
        }
    }
}
