//! PostgreSQL implementation of ProductCategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use openlmis::{DomainError, ProductCategory, ProductCategoryRepository};

use super::{map_delete_error, map_read_error, map_write_error};

/// PostgreSQL implementation of ProductCategoryRepository
pub struct PgProductCategoryRepository {
    pool: PgPool,
}

impl PgProductCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProductCategoryRow {
    id: Uuid,
    code: String,
    name: String,
    display_order: i32,
}

impl From<ProductCategoryRow> for ProductCategory {
    fn from(row: ProductCategoryRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
            display_order: row.display_order,
        }
    }
}

#[async_trait]
impl ProductCategoryRepository for PgProductCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError> {
        let row = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT * FROM product_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<ProductCategory>, DomainError> {
        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT * FROM product_categories ORDER BY display_order, code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, code: Option<&str>) -> Result<Vec<ProductCategory>, DomainError> {
        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            r#"
            SELECT * FROM product_categories
            WHERE ($1::text IS NULL OR code = $1)
            ORDER BY display_order, code
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, category: &ProductCategory) -> Result<ProductCategory, DomainError> {
        // Check if exists
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM product_categories WHERE id = $1)",
        )
        .bind(category.id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_read_error)?;

        let row = if exists {
            sqlx::query_as::<_, ProductCategoryRow>(
                r#"
                UPDATE product_categories
                SET code = $2, name = $3, display_order = $4
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(category.id)
            .bind(&category.code)
            .bind(&category.name)
            .bind(category.display_order)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, ProductCategoryRow>(
                r#"
                INSERT INTO product_categories (id, code, name, display_order)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(category.id)
            .bind(&category.code)
            .bind(&category.name)
            .bind(category.display_order)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
