//! ProductCategory Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, ProductCategory};

/// Repository interface for ProductCategory entities
#[async_trait]
pub trait ProductCategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError>;

    async fn find_all(&self) -> Result<Vec<ProductCategory>, DomainError>;

    /// Categories whose code equals `code`; all categories when `code` is `None`
    async fn search(&self, code: Option<&str>) -> Result<Vec<ProductCategory>, DomainError>;

    async fn save(&self, category: &ProductCategory) -> Result<ProductCategory, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
