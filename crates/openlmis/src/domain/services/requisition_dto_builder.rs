//! RequisitionDtoBuilder
//!
//! Full requisition view: the basic view plus status, status log and line items.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{FacilityDto, ProgramDto, Requisition, RequisitionDto};

use super::{BasicRequisitionDtoBuilder, ExportHelper};

/// Builds the full requisition view
#[async_trait]
pub trait RequisitionDtoBuilder: Send + Sync {
    async fn build(&self, requisition: &Requisition) -> RequisitionDto;

    /// Build using already-resolved facility/program when provided
    async fn build_with(
        &self,
        requisition: &Requisition,
        facility: Option<FacilityDto>,
        program: Option<ProgramDto>,
    ) -> RequisitionDto;
}

/// RequisitionDtoBuilder backed by the reference-data lookups of the basic builder
pub struct DefaultRequisitionDtoBuilder {
    basic: Arc<BasicRequisitionDtoBuilder>,
    export_helper: Arc<dyn ExportHelper>,
}

impl DefaultRequisitionDtoBuilder {
    pub fn new(basic: Arc<BasicRequisitionDtoBuilder>, export_helper: Arc<dyn ExportHelper>) -> Self {
        Self {
            basic,
            export_helper,
        }
    }
}

#[async_trait]
impl RequisitionDtoBuilder for DefaultRequisitionDtoBuilder {
    async fn build(&self, requisition: &Requisition) -> RequisitionDto {
        self.build_with(requisition, None, None).await
    }

    async fn build_with(
        &self,
        requisition: &Requisition,
        facility: Option<FacilityDto>,
        program: Option<ProgramDto>,
    ) -> RequisitionDto {
        let basic = self.basic.build_with(requisition, facility, program).await;
        let line_items: Vec<_> = requisition.line_items.iter().collect();

        RequisitionDto {
            id: basic.id,
            status: requisition.status,
            emergency: basic.emergency,
            created_date: requisition.created_date,
            modified_date: basic.modified_date,
            supervisory_node: requisition.supervisory_node_id,
            facility: basic.facility,
            program: basic.program,
            processing_period: basic.processing_period,
            status_changes: requisition.status_changes.clone(),
            requisition_line_items: self.export_helper.export_to_dtos(&line_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::test_support::{
        facility_dto, period_dto, program_dto, FakeLookup,
    };
    use crate::domain::services::RequisitionExportHelper;
    use crate::domain::{ProcessingPeriodDto, RequisitionLineItem, RequisitionStatus};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_build_full_view() {
        let mut requisition = Requisition::initiate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            false,
            "USD",
            Some(Uuid::new_v4()),
        );
        requisition.line_items = vec![
            RequisitionLineItem::new(Uuid::new_v4(), true),
            RequisitionLineItem::new(Uuid::new_v4(), false),
        ];
        requisition.submit(Uuid::new_v4()).unwrap();

        let periods = Arc::new(FakeLookup::with([(
            requisition.processing_period_id,
            period_dto(requisition.processing_period_id),
        )]));
        let basic = Arc::new(BasicRequisitionDtoBuilder::new(
            Arc::new(FakeLookup::with([(
                requisition.facility_id,
                facility_dto(requisition.facility_id),
            )])),
            Arc::new(FakeLookup::with([(
                requisition.program_id,
                program_dto(requisition.program_id),
            )])),
            periods.clone(),
        ));
        let builder = DefaultRequisitionDtoBuilder::new(basic, Arc::new(RequisitionExportHelper::new()));

        let dto = builder.build(&requisition).await;

        assert_eq!(dto.id, requisition.id);
        assert_eq!(dto.status, RequisitionStatus::Submitted);
        assert_eq!(dto.created_date, requisition.created_date);
        assert_eq!(dto.status_changes.len(), 2);
        assert_eq!(dto.requisition_line_items.len(), 2);
        assert_eq!(dto.facility.map(|f| f.id), Some(requisition.facility_id));
        assert_eq!(
            dto.processing_period.map(|p: ProcessingPeriodDto| p.id),
            Some(requisition.processing_period_id)
        );
        assert_eq!(periods.calls().len(), 1);
    }
}
