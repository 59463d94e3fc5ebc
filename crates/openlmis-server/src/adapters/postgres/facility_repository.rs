//! PostgreSQL implementations of FacilityRepository and ProgramRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use openlmis::{DomainError, Facility, FacilityRepository, Program, ProgramRepository};

use super::{map_delete_error, map_read_error, map_write_error};

pub struct PgFacilityRepository {
    pool: PgPool,
}

impl PgFacilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FacilityRow {
    id: Uuid,
    code: String,
    name: String,
    description: Option<String>,
    active: bool,
    enabled: bool,
    go_live_date: Option<NaiveDate>,
}

impl From<FacilityRow> for Facility {
    fn from(row: FacilityRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            active: row.active,
            enabled: row.enabled,
            go_live_date: row.go_live_date,
        }
    }
}

#[async_trait]
impl FacilityRepository for PgFacilityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, DomainError> {
        let row = sqlx::query_as::<_, FacilityRow>("SELECT * FROM facilities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Facility>, DomainError> {
        let rows = sqlx::query_as::<_, FacilityRow>("SELECT * FROM facilities ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, facility: &Facility) -> Result<Facility, DomainError> {
        let row = sqlx::query_as::<_, FacilityRow>(
            r#"
            INSERT INTO facilities (id, code, name, description, active, enabled, go_live_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET code = EXCLUDED.code, name = EXCLUDED.name, description = EXCLUDED.description,
                active = EXCLUDED.active, enabled = EXCLUDED.enabled,
                go_live_date = EXCLUDED.go_live_date
            RETURNING *
            "#,
        )
        .bind(facility.id)
        .bind(&facility.code)
        .bind(&facility.name)
        .bind(&facility.description)
        .bind(facility.active)
        .bind(facility.enabled)
        .bind(facility.go_live_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct PgProgramRepository {
    pool: PgPool,
}

impl PgProgramRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProgramRow {
    id: Uuid,
    code: String,
    name: String,
    description: Option<String>,
    active: bool,
}

impl From<ProgramRow> for Program {
    fn from(row: ProgramRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            active: row.active,
        }
    }
}

#[async_trait]
impl ProgramRepository for PgProgramRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Program>, DomainError> {
        let row = sqlx::query_as::<_, ProgramRow>("SELECT * FROM programs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(row.map(Into::into))
    }
}
