//! ProductCategory - Grouping of orderable products

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub display_order: i32,
}

impl ProductCategory {
    pub fn new(code: String, name: String, display_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            display_order,
        }
    }
}
