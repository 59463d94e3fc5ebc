use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use openlmis::Order;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub order_code: String,
    pub external_id: Option<Uuid>,
    pub program_id: Uuid,
    pub requesting_facility_id: Uuid,
    pub receiving_facility_id: Uuid,
    pub supplying_facility_id: Uuid,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub created_by_id: Option<Uuid>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_code: order.order_code,
            external_id: order.external_id,
            program_id: order.program_id,
            requesting_facility_id: order.requesting_facility_id,
            receiving_facility_id: order.receiving_facility_id,
            supplying_facility_id: order.supplying_facility_id,
            status: order.status.to_string(),
            created_date: order.created_date,
            created_by_id: order.created_by_id,
        }
    }
}
