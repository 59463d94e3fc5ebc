//! PostgreSQL implementation of OrderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use openlmis::{DomainError, Order, OrderRepository, OrderSearchFilter, OrderStatus};

use super::map_read_error;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_code: String,
    external_id: Option<Uuid>,
    program_id: Uuid,
    requesting_facility_id: Uuid,
    receiving_facility_id: Uuid,
    supplying_facility_id: Uuid,
    status: String,
    created_date: chrono::DateTime<chrono::Utc>,
    created_by_id: Option<Uuid>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse().map_err(DomainError::Repository)?;
        Ok(Self {
            id: row.id,
            order_code: row.order_code,
            external_id: row.external_id,
            program_id: row.program_id,
            requesting_facility_id: row.requesting_facility_id,
            receiving_facility_id: row.receiving_facility_id,
            supplying_facility_id: row.supplying_facility_id,
            status,
            created_date: row.created_date,
            created_by_id: row.created_by_id,
        })
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn search(&self, filter: &OrderSearchFilter) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT * FROM orders
            WHERE ($1::uuid IS NULL OR supplying_facility_id = $1)
              AND ($2::uuid IS NULL OR requesting_facility_id = $2)
              AND ($3::uuid IS NULL OR program_id = $3)
            ORDER BY created_date DESC
            "#,
        )
        .bind(filter.supplying_facility_id)
        .bind(filter.requesting_facility_id)
        .bind(filter.program_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
