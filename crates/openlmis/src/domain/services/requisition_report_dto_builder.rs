//! RequisitionReportDtoBuilder
//!
//! Report view of a requisition: nested full view, exported line items,
//! cost totals and who initiated/submitted/authorized it and when.
//!
//! A status log entry without an author is a system transition and is
//! reported with a synthetic user named by the localized `SYSTEM` message.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    message_keys, Message, Requisition, RequisitionReportDto, RequisitionStatus, UserDto,
};
use crate::ports::{MessageService, UserReferenceDataService};

use super::{found_or_none, ExportHelper, RequisitionDtoBuilder};

pub struct RequisitionReportDtoBuilder {
    requisition_dto_builder: Arc<dyn RequisitionDtoBuilder>,
    export_helper: Arc<dyn ExportHelper>,
    user_service: Arc<dyn UserReferenceDataService>,
    message_service: Arc<dyn MessageService>,
}

impl RequisitionReportDtoBuilder {
    pub fn new(
        requisition_dto_builder: Arc<dyn RequisitionDtoBuilder>,
        export_helper: Arc<dyn ExportHelper>,
        user_service: Arc<dyn UserReferenceDataService>,
        message_service: Arc<dyn MessageService>,
    ) -> Self {
        Self {
            requisition_dto_builder,
            export_helper,
            user_service,
            message_service,
        }
    }

    pub async fn build(&self, requisition: &Requisition) -> RequisitionReportDto {
        let requisition_dto = self.requisition_dto_builder.build(requisition).await;
        let full_supply = self
            .export_helper
            .export_to_dtos(&requisition.non_skipped_full_supply_line_items());
        let non_full_supply = self
            .export_helper
            .export_to_dtos(&requisition.non_skipped_non_full_supply_line_items());

        let (initiated_by, initiated_date) = self
            .status_actor(requisition, RequisitionStatus::Initiated)
            .await;
        let (submitted_by, submitted_date) = self
            .status_actor(requisition, RequisitionStatus::Submitted)
            .await;
        let (authorized_by, authorized_date) = self
            .status_actor(requisition, RequisitionStatus::Authorized)
            .await;

        RequisitionReportDto {
            requisition: requisition_dto,
            full_supply,
            non_full_supply,
            total_cost: requisition.total_cost(),
            full_supply_total_cost: requisition.full_supply_total_cost(),
            non_full_supply_total_cost: requisition.non_full_supply_total_cost(),
            initiated_by,
            initiated_date,
            submitted_by,
            submitted_date,
            authorized_by,
            authorized_date,
        }
    }

    async fn status_actor(
        &self,
        requisition: &Requisition,
        status: RequisitionStatus,
    ) -> (Option<UserDto>, Option<DateTime<Utc>>) {
        let Some(entry) = requisition.status_change(status) else {
            return (None, None);
        };

        let user = match entry.author_id {
            Some(author_id) => found_or_none(
                self.user_service.find_one(author_id).await,
                "User",
                author_id,
            ),
            None => Some(self.system_user()),
        };

        (user, Some(entry.changed_date))
    }

    fn system_user(&self) -> UserDto {
        let system = self
            .message_service
            .localize(&Message::new(message_keys::SYSTEM))
            .message;

        UserDto {
            username: system.clone(),
            first_name: Some(system),
            last_name: None,
            ..Default::default()
        }
    }
}
