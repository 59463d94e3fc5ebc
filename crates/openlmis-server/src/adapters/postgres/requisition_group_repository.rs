//! PostgreSQL implementation of RequisitionGroupRepository
//!
//! Member facilities live in `requisition_group_members` and are written in
//! the same transaction as the group row.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use openlmis::{DomainError, RequisitionGroup, RequisitionGroupRepository};

use super::{map_delete_error, map_read_error, map_write_error};

pub struct PgRequisitionGroupRepository {
    pool: PgPool,
}

impl PgRequisitionGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_members(&self, group_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, DomainError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid)>(
            r#"
            SELECT requisition_group_id, facility_id FROM requisition_group_members
            WHERE requisition_group_id = ANY($1)
            ORDER BY facility_id
            "#,
        )
        .bind(group_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        let mut members: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (group_id, facility_id) in rows {
            members.entry(group_id).or_default().push(facility_id);
        }
        Ok(members)
    }
}

#[derive(sqlx::FromRow)]
struct RequisitionGroupRow {
    id: Uuid,
    code: String,
    name: String,
    description: Option<String>,
    supervisory_node_id: Option<Uuid>,
}

impl RequisitionGroupRow {
    fn into_group(self, member_facility_ids: Vec<Uuid>) -> RequisitionGroup {
        RequisitionGroup {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
            supervisory_node_id: self.supervisory_node_id,
            member_facility_ids,
        }
    }
}

#[async_trait]
impl RequisitionGroupRepository for PgRequisitionGroupRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RequisitionGroup>, DomainError> {
        let row = sqlx::query_as::<_, RequisitionGroupRow>(
            "SELECT * FROM requisition_groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut members = self.load_members(&[row.id]).await?;
        let member_ids = members.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_group(member_ids)))
    }

    async fn find_all(&self) -> Result<Vec<RequisitionGroup>, DomainError> {
        let rows = sqlx::query_as::<_, RequisitionGroupRow>(
            "SELECT * FROM requisition_groups ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut members = self.load_members(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let member_ids = members.remove(&row.id).unwrap_or_default();
                row.into_group(member_ids)
            })
            .collect())
    }

    async fn save(&self, group: &RequisitionGroup) -> Result<RequisitionGroup, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_read_error)?;

        let row = sqlx::query_as::<_, RequisitionGroupRow>(
            r#"
            INSERT INTO requisition_groups (id, code, name, description, supervisory_node_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET code = EXCLUDED.code, name = EXCLUDED.name,
                description = EXCLUDED.description,
                supervisory_node_id = EXCLUDED.supervisory_node_id
            RETURNING *
            "#,
        )
        .bind(group.id)
        .bind(&group.code)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.supervisory_node_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        sqlx::query("DELETE FROM requisition_group_members WHERE requisition_group_id = $1")
            .bind(group.id)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;

        for facility_id in &group.member_facility_ids {
            sqlx::query(
                r#"
                INSERT INTO requisition_group_members (requisition_group_id, facility_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(group.id)
            .bind(facility_id)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        tx.commit().await.map_err(map_read_error)?;

        let mut member_ids = group.member_facility_ids.clone();
        member_ids.sort();
        member_ids.dedup();
        Ok(row.into_group(member_ids))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM requisition_groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
