//! Line item export

use crate::domain::{RequisitionLineItem, RequisitionLineItemDto};

/// Converts line items into their transport form
pub trait ExportHelper: Send + Sync {
    fn export_to_dtos(&self, line_items: &[&RequisitionLineItem]) -> Vec<RequisitionLineItemDto>;
}

/// Field-for-field export preserving input order
#[derive(Debug, Clone, Copy, Default)]
pub struct RequisitionExportHelper;

impl RequisitionExportHelper {
    pub fn new() -> Self {
        Self
    }

    fn export(line_item: &RequisitionLineItem) -> RequisitionLineItemDto {
        RequisitionLineItemDto {
            id: line_item.id,
            orderable_id: line_item.orderable_id,
            full_supply: line_item.full_supply,
            skipped: line_item.skipped,
            beginning_balance: line_item.beginning_balance,
            total_received_quantity: line_item.total_received_quantity,
            total_consumed_quantity: line_item.total_consumed_quantity,
            stock_on_hand: line_item.stock_on_hand,
            requested_quantity: line_item.requested_quantity,
            requested_quantity_explanation: line_item.requested_quantity_explanation.clone(),
            approved_quantity: line_item.approved_quantity,
            price_per_pack: line_item.price_per_pack,
            total_cost: line_item.total_cost,
            remarks: line_item.remarks.clone(),
        }
    }
}

impl ExportHelper for RequisitionExportHelper {
    fn export_to_dtos(&self, line_items: &[&RequisitionLineItem]) -> Vec<RequisitionLineItemDto> {
        line_items.iter().map(|li| Self::export(li)).collect()
    }
}
