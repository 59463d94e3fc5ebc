//! Order - Fulfillment order produced from an approved requisition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_code: String,
    /// Requisition the order was converted from
    pub external_id: Option<Uuid>,
    pub program_id: Uuid,
    pub requesting_facility_id: Uuid,
    pub receiving_facility_id: Uuid,
    pub supplying_facility_id: Uuid,
    pub status: OrderStatus,
    pub created_date: DateTime<Utc>,
    pub created_by_id: Option<Uuid>,
}
