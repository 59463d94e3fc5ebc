//! ProductCategory Application Service (Use Case)

use std::sync::Arc;
use uuid::Uuid;

use openlmis::{DomainError, ProductCategory, ProductCategoryRepository};

pub struct ProductCategoryService {
    repo: Arc<dyn ProductCategoryRepository>,
}

impl ProductCategoryService {
    pub fn new(repo: Arc<dyn ProductCategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<ProductCategory>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Categories whose code matches exactly; all categories without a code
    pub async fn search(&self, code: Option<&str>) -> Result<Vec<ProductCategory>, DomainError> {
        self.repo.search(code).await
    }

    pub async fn create(
        &self,
        code: String,
        name: String,
        display_order: i32,
    ) -> Result<ProductCategory, DomainError> {
        let category = ProductCategory::new(code, name, display_order);
        let saved = self.repo.save(&category).await.inspect_err(|e| {
            tracing::error!("Failed to create product category {}: {}", category.code, e);
        })?;

        tracing::info!("Created ProductCategory: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    pub async fn update(
        &self,
        id: Uuid,
        category: ProductCategory,
    ) -> Result<ProductCategory, DomainError> {
        let category = ProductCategory { id, ..category };
        let saved = self.repo.save(&category).await.inspect_err(|e| {
            tracing::error!("Failed to update product category {}: {}", id, e);
        })?;

        tracing::info!("Saved ProductCategory: {} ({})", saved.code, saved.id);
        Ok(saved)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("ProductCategory", id));
        }
        self.repo.delete(id).await?;
        tracing::info!("Deleted ProductCategory: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProductCategoryRepository;

    #[tokio::test]
    async fn test_search_by_code() {
        let antibiotics = ProductCategory::new("ANT".into(), "Antibiotics".into(), 1);
        let vaccines = ProductCategory::new("VAC".into(), "Vaccines".into(), 2);
        let service = ProductCategoryService::new(Arc::new(
            InMemoryProductCategoryRepository::with([antibiotics.clone(), vaccines]),
        ));

        assert_eq!(service.search(Some("ANT")).await.unwrap(), vec![antibiotics]);
        assert!(service.search(Some("NONE")).await.unwrap().is_empty());
        assert_eq!(service.search(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_duplicate_code_is_validation_error() {
        let existing = ProductCategory::new("ANT".into(), "Antibiotics".into(), 1);
        let service = ProductCategoryService::new(Arc::new(
            InMemoryProductCategoryRepository::with([existing]),
        ));

        let result = service.create("ANT".into(), "Other".into(), 3).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
