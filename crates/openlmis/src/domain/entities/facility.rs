//! Facility - Health facility or warehouse taking part in the supply chain
//!
//! Locally managed facility record. Requisition views use the remote
//! `FacilityDto` projection instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub enabled: bool,
    pub go_live_date: Option<NaiveDate>,
}

impl Facility {
    pub fn new(
        code: String,
        name: String,
        description: Option<String>,
        active: bool,
        enabled: bool,
        go_live_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            description,
            active,
            enabled,
            go_live_date,
        }
    }
}
