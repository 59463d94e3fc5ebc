use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use openlmis::ProductCategory;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryRequest {
    pub id: Option<Uuid>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

impl ProductCategoryRequest {
    pub fn into_category(self, id: Uuid) -> ProductCategory {
        ProductCategory {
            id,
            code: self.code,
            name: self.name,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub display_order: i32,
}

impl From<ProductCategory> for ProductCategoryResponse {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id,
            code: category.code,
            name: category.name,
            display_order: category.display_order,
        }
    }
}

/// Query of `GET /productCategories/search`
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductCategorySearchParams {
    /// Exact category code
    pub code: Option<String>,
}
