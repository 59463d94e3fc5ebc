//! Composite Requisition Views
//!
//! Request-scoped DTOs assembled from a Requisition plus reference data.
//! Never persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reference_data::{FacilityDto, ProcessingPeriodDto, ProgramDto, UserDto};
use super::requisition::StatusLogEntry;
use crate::domain::value_objects::{Money, RequisitionStatus};

/// Summary view used by search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BasicRequisitionDto {
    pub id: Uuid,
    pub emergency: bool,
    pub modified_date: Option<DateTime<Utc>>,
    pub facility: Option<FacilityDto>,
    pub program: Option<ProgramDto>,
    pub processing_period: Option<ProcessingPeriodDto>,
}

/// Transport form of a requisition line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RequisitionLineItemDto {
    pub id: Uuid,
    pub orderable_id: Uuid,
    pub full_supply: bool,
    pub skipped: bool,
    pub beginning_balance: Option<i32>,
    pub total_received_quantity: Option<i32>,
    pub total_consumed_quantity: Option<i32>,
    pub stock_on_hand: Option<i32>,
    pub requested_quantity: Option<i32>,
    pub requested_quantity_explanation: Option<String>,
    pub approved_quantity: Option<i32>,
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub price_per_pack: Option<Decimal>,
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub total_cost: Option<Decimal>,
    pub remarks: Option<String>,
}

/// Full requisition view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RequisitionDto {
    pub id: Uuid,
    pub status: RequisitionStatus,
    pub emergency: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
    pub supervisory_node: Option<Uuid>,
    pub facility: Option<FacilityDto>,
    pub program: Option<ProgramDto>,
    pub processing_period: Option<ProcessingPeriodDto>,
    pub status_changes: BTreeMap<RequisitionStatus, StatusLogEntry>,
    pub requisition_line_items: Vec<RequisitionLineItemDto>,
}

/// Printable report view of a requisition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RequisitionReportDto {
    pub requisition: RequisitionDto,
    pub full_supply: Vec<RequisitionLineItemDto>,
    pub non_full_supply: Vec<RequisitionLineItemDto>,
    pub total_cost: Money,
    pub full_supply_total_cost: Money,
    pub non_full_supply_total_cost: Money,
    pub initiated_by: Option<UserDto>,
    pub initiated_date: Option<DateTime<Utc>>,
    pub submitted_by: Option<UserDto>,
    pub submitted_date: Option<DateTime<Utc>>,
    pub authorized_by: Option<UserDto>,
    pub authorized_date: Option<DateTime<Utc>>,
}
