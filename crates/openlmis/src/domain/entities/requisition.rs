//! Requisition - Periodic supply request and its status history
//!
//! Pure domain entity without infrastructure dependencies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Money, RequisitionStatus};

/// Audit record of a status transition. `author_id` is `None` for system transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatusLogEntry {
    pub author_id: Option<Uuid>,
    pub changed_date: DateTime<Utc>,
}

impl StatusLogEntry {
    pub fn new(author_id: Option<Uuid>, changed_date: DateTime<Utc>) -> Self {
        Self {
            author_id,
            changed_date,
        }
    }
}

/// Single product row of a requisition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionLineItem {
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
    pub price_per_pack: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub remarks: Option<String>,
}

impl RequisitionLineItem {
    pub fn new(orderable_id: Uuid, full_supply: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            orderable_id,
            full_supply,
            skipped: false,
            beginning_balance: None,
            total_received_quantity: None,
            total_consumed_quantity: None,
            stock_on_hand: None,
            requested_quantity: None,
            requested_quantity_explanation: None,
            approved_quantity: None,
            price_per_pack: None,
            total_cost: None,
            remarks: None,
        }
    }
}

/// Requisition aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub program_id: Uuid,
    pub processing_period_id: Uuid,
    pub supervisory_node_id: Option<Uuid>,
    pub status: RequisitionStatus,
    pub emergency: bool,
    pub currency_code: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status_changes: BTreeMap<RequisitionStatus, StatusLogEntry>,
    #[serde(default)]
    pub line_items: Vec<RequisitionLineItem>,
}

impl Requisition {
    /// Create a new INITIATED requisition. `initiator` is `None` when the system initiates it.
    pub fn initiate(
        facility_id: Uuid,
        program_id: Uuid,
        processing_period_id: Uuid,
        emergency: bool,
        currency_code: impl Into<String>,
        initiator: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        let mut requisition = Self {
            id: Uuid::new_v4(),
            facility_id,
            program_id,
            processing_period_id,
            supervisory_node_id: None,
            status: RequisitionStatus::Initiated,
            emergency,
            currency_code: currency_code.into(),
            created_date: now,
            modified_date: Some(now),
            status_changes: BTreeMap::new(),
            line_items: Vec::new(),
        };
        requisition.record_status_change(initiator, now);
        requisition
    }

    /// INITIATED -> SUBMITTED
    pub fn submit(&mut self, submitter: Uuid) -> Result<(), DomainError> {
        self.transition(
            RequisitionStatus::Initiated,
            RequisitionStatus::Submitted,
            submitter,
        )
    }

    /// SUBMITTED -> AUTHORIZED
    pub fn authorize(&mut self, authorizer: Uuid) -> Result<(), DomainError> {
        self.transition(
            RequisitionStatus::Submitted,
            RequisitionStatus::Authorized,
            authorizer,
        )
    }

    fn transition(
        &mut self,
        expected: RequisitionStatus,
        next: RequisitionStatus,
        author: Uuid,
    ) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::Validation(format!(
                "Cannot change requisition {} from {} to {}",
                self.id, self.status, next
            )));
        }
        let now = Utc::now();
        self.status = next;
        self.modified_date = Some(now);
        self.record_status_change(Some(author), now);
        Ok(())
    }

    fn record_status_change(&mut self, author_id: Option<Uuid>, at: DateTime<Utc>) {
        self.status_changes
            .insert(self.status, StatusLogEntry::new(author_id, at));
    }

    /// Log entry for the given status, if the requisition ever reached it
    pub fn status_change(&self, status: RequisitionStatus) -> Option<&StatusLogEntry> {
        self.status_changes.get(&status)
    }

    pub fn is_deletable(&self) -> bool {
        self.status.is_deletable()
    }

    pub fn non_skipped_full_supply_line_items(&self) -> Vec<&RequisitionLineItem> {
        self.line_items
            .iter()
            .filter(|li| li.full_supply && !li.skipped)
            .collect()
    }

    pub fn non_skipped_non_full_supply_line_items(&self) -> Vec<&RequisitionLineItem> {
        self.line_items
            .iter()
            .filter(|li| !li.full_supply && !li.skipped)
            .collect()
    }

    pub fn total_cost(&self) -> Money {
        self.sum_costs(|_| true)
    }

    pub fn full_supply_total_cost(&self) -> Money {
        self.sum_costs(|li| li.full_supply)
    }

    pub fn non_full_supply_total_cost(&self) -> Money {
        self.sum_costs(|li| !li.full_supply)
    }

    fn sum_costs<F>(&self, include: F) -> Money
    where
        F: Fn(&RequisitionLineItem) -> bool,
    {
        Money::sum(
            &self.currency_code,
            self.line_items
                .iter()
                .filter(|li| !li.skipped && include(li))
                .filter_map(|li| li.total_cost.as_ref()),
        )
    }
}
