//! PostgreSQL implementation of RequisitionRepository
//!
//! A requisition is stored across three tables. Saving replaces the line
//! items and the status log wholesale inside one transaction.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use openlmis::{
    DomainError, Requisition, RequisitionLineItem, RequisitionRepository, RequisitionStatus,
    StatusLogEntry,
};

use super::{map_delete_error, map_read_error, map_write_error};

pub struct PgRequisitionRepository {
    pool: PgPool,
}

impl PgRequisitionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach line items and status log to the given header rows
    async fn hydrate(&self, rows: Vec<RequisitionRow>) -> Result<Vec<Requisition>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let line_rows = sqlx::query_as::<_, LineItemRow>(
            r#"
            SELECT * FROM requisition_line_items
            WHERE requisition_id = ANY($1)
            ORDER BY requisition_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        let status_rows = sqlx::query_as::<_, StatusChangeRow>(
            "SELECT * FROM status_changes WHERE requisition_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        let mut line_items: HashMap<Uuid, Vec<RequisitionLineItem>> = HashMap::new();
        for row in line_rows {
            line_items
                .entry(row.requisition_id)
                .or_default()
                .push(row.into());
        }

        let mut status_changes: HashMap<Uuid, BTreeMap<RequisitionStatus, StatusLogEntry>> =
            HashMap::new();
        for row in status_rows {
            let status: RequisitionStatus = row.status.parse().map_err(DomainError::Repository)?;
            status_changes
                .entry(row.requisition_id)
                .or_default()
                .insert(status, StatusLogEntry::new(row.author_id, row.changed_date));
        }

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                row.into_requisition(
                    status_changes.remove(&id).unwrap_or_default(),
                    line_items.remove(&id).unwrap_or_default(),
                )
            })
            .collect()
    }
}

#[derive(sqlx::FromRow)]
struct RequisitionRow {
    id: Uuid,
    facility_id: Uuid,
    program_id: Uuid,
    processing_period_id: Uuid,
    supervisory_node_id: Option<Uuid>,
    status: String,
    emergency: bool,
    currency_code: String,
    created_date: DateTime<Utc>,
    modified_date: Option<DateTime<Utc>>,
}

impl RequisitionRow {
    fn into_requisition(
        self,
        status_changes: BTreeMap<RequisitionStatus, StatusLogEntry>,
        line_items: Vec<RequisitionLineItem>,
    ) -> Result<Requisition, DomainError> {
        let status: RequisitionStatus = self.status.parse().map_err(DomainError::Repository)?;
        Ok(Requisition {
            id: self.id,
            facility_id: self.facility_id,
            program_id: self.program_id,
            processing_period_id: self.processing_period_id,
            supervisory_node_id: self.supervisory_node_id,
            status,
            emergency: self.emergency,
            currency_code: self.currency_code,
            created_date: self.created_date,
            modified_date: self.modified_date,
            status_changes,
            line_items,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LineItemRow {
    id: Uuid,
    requisition_id: Uuid,
    orderable_id: Uuid,
    full_supply: bool,
    skipped: bool,
    beginning_balance: Option<i32>,
    total_received_quantity: Option<i32>,
    total_consumed_quantity: Option<i32>,
    stock_on_hand: Option<i32>,
    requested_quantity: Option<i32>,
    requested_quantity_explanation: Option<String>,
    approved_quantity: Option<i32>,
    price_per_pack: Option<Decimal>,
    total_cost: Option<Decimal>,
    remarks: Option<String>,
}

impl From<LineItemRow> for RequisitionLineItem {
    fn from(row: LineItemRow) -> Self {
        Self {
            id: row.id,
            orderable_id: row.orderable_id,
            full_supply: row.full_supply,
            skipped: row.skipped,
            beginning_balance: row.beginning_balance,
            total_received_quantity: row.total_received_quantity,
            total_consumed_quantity: row.total_consumed_quantity,
            stock_on_hand: row.stock_on_hand,
            requested_quantity: row.requested_quantity,
            requested_quantity_explanation: row.requested_quantity_explanation,
            approved_quantity: row.approved_quantity,
            price_per_pack: row.price_per_pack,
            total_cost: row.total_cost,
            remarks: row.remarks,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatusChangeRow {
    requisition_id: Uuid,
    status: String,
    author_id: Option<Uuid>,
    changed_date: DateTime<Utc>,
}

#[async_trait]
impl RequisitionRepository for PgRequisitionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Requisition>, DomainError> {
        let row = sqlx::query_as::<_, RequisitionRow>("SELECT * FROM requisitions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(self.hydrate(vec![row]).await?.pop())
    }

    async fn search(
        &self,
        facility_id: Option<Uuid>,
        program_id: Option<Uuid>,
    ) -> Result<Vec<Requisition>, DomainError> {
        let rows = sqlx::query_as::<_, RequisitionRow>(
            r#"
            SELECT * FROM requisitions
            WHERE ($1::uuid IS NULL OR facility_id = $1)
              AND ($2::uuid IS NULL OR program_id = $2)
            ORDER BY created_date DESC
            "#,
        )
        .bind(facility_id)
        .bind(program_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        self.hydrate(rows).await
    }

    async fn save(&self, requisition: &Requisition) -> Result<Requisition, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_read_error)?;

        sqlx::query(
            r#"
            INSERT INTO requisitions (
                id, facility_id, program_id, processing_period_id, supervisory_node_id,
                status, emergency, currency_code, created_date, modified_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE
            SET supervisory_node_id = EXCLUDED.supervisory_node_id,
                status = EXCLUDED.status,
                emergency = EXCLUDED.emergency,
                currency_code = EXCLUDED.currency_code,
                modified_date = EXCLUDED.modified_date
            "#,
        )
        .bind(requisition.id)
        .bind(requisition.facility_id)
        .bind(requisition.program_id)
        .bind(requisition.processing_period_id)
        .bind(requisition.supervisory_node_id)
        .bind(requisition.status.as_str())
        .bind(requisition.emergency)
        .bind(&requisition.currency_code)
        .bind(requisition.created_date)
        .bind(requisition.modified_date)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        sqlx::query("DELETE FROM requisition_line_items WHERE requisition_id = $1")
            .bind(requisition.id)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;

        for (position, item) in requisition.line_items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO requisition_line_items (
                    id, requisition_id, position, orderable_id, full_supply, skipped,
                    beginning_balance, total_received_quantity, total_consumed_quantity,
                    stock_on_hand, requested_quantity, requested_quantity_explanation,
                    approved_quantity, price_per_pack, total_cost, remarks
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                "#,
            )
            .bind(item.id)
            .bind(requisition.id)
            .bind(position as i32)
            .bind(item.orderable_id)
            .bind(item.full_supply)
            .bind(item.skipped)
            .bind(item.beginning_balance)
            .bind(item.total_received_quantity)
            .bind(item.total_consumed_quantity)
            .bind(item.stock_on_hand)
            .bind(item.requested_quantity)
            .bind(&item.requested_quantity_explanation)
            .bind(item.approved_quantity)
            .bind(item.price_per_pack)
            .bind(item.total_cost)
            .bind(&item.remarks)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        sqlx::query("DELETE FROM status_changes WHERE requisition_id = $1")
            .bind(requisition.id)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;

        for (status, entry) in &requisition.status_changes {
            sqlx::query(
                r#"
                INSERT INTO status_changes (requisition_id, status, author_id, changed_date)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(requisition.id)
            .bind(status.as_str())
            .bind(entry.author_id)
            .bind(entry.changed_date)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        tx.commit().await.map_err(map_read_error)?;

        Ok(requisition.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM requisitions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
