//! BasicRequisitionDtoBuilder
//!
//! Builds the summary view of a requisition. Facility and program may be
//! supplied by the caller to skip the remote lookup; the processing period is
//! always resolved remotely. Absent or failed lookups leave the field empty.

use std::sync::Arc;

use crate::domain::{BasicRequisitionDto, FacilityDto, ProcessingPeriodDto, ProgramDto, Requisition};
use crate::ports::{FacilityReferenceDataService, PeriodService, ProgramReferenceDataService};

use super::found_or_none;

/// Reference record looked up once by the caller and shared across a batch
#[derive(Debug, Clone, PartialEq)]
pub enum Prefetched<T> {
    /// Not looked up; resolved per requisition
    NotFetched,
    /// Looked up; `None` when absent or the lookup failed
    Fetched(Option<T>),
}

pub struct BasicRequisitionDtoBuilder {
    facility_service: Arc<dyn FacilityReferenceDataService>,
    program_service: Arc<dyn ProgramReferenceDataService>,
    period_service: Arc<dyn PeriodService>,
}

impl BasicRequisitionDtoBuilder {
    pub fn new(
        facility_service: Arc<dyn FacilityReferenceDataService>,
        program_service: Arc<dyn ProgramReferenceDataService>,
        period_service: Arc<dyn PeriodService>,
    ) -> Self {
        Self {
            facility_service,
            program_service,
            period_service,
        }
    }

    pub async fn build(&self, requisition: &Requisition) -> BasicRequisitionDto {
        self.build_with(requisition, None, None).await
    }

    /// Build using already-resolved facility/program when provided
    pub async fn build_with(
        &self,
        requisition: &Requisition,
        facility: Option<FacilityDto>,
        program: Option<ProgramDto>,
    ) -> BasicRequisitionDto {
        let facility = self.resolve_facility(requisition, facility).await;
        let program = self.resolve_program(requisition, program).await;
        self.assemble(requisition, facility, program).await
    }

    /// Build summaries for many requisitions sharing the same facility/program.
    /// A fetched record, found or not, is reused for every row.
    pub async fn build_all(
        &self,
        requisitions: &[Requisition],
        facility: &Prefetched<FacilityDto>,
        program: &Prefetched<ProgramDto>,
    ) -> Vec<BasicRequisitionDto> {
        let mut dtos = Vec::with_capacity(requisitions.len());
        for requisition in requisitions {
            let facility = match facility {
                Prefetched::Fetched(found) => found.clone(),
                Prefetched::NotFetched => self.resolve_facility(requisition, None).await,
            };
            let program = match program {
                Prefetched::Fetched(found) => found.clone(),
                Prefetched::NotFetched => self.resolve_program(requisition, None).await,
            };
            dtos.push(self.assemble(requisition, facility, program).await);
        }
        dtos
    }

    async fn assemble(
        &self,
        requisition: &Requisition,
        facility: Option<FacilityDto>,
        program: Option<ProgramDto>,
    ) -> BasicRequisitionDto {
        BasicRequisitionDto {
            id: requisition.id,
            emergency: requisition.emergency,
            modified_date: requisition.modified_date,
            facility,
            program,
            processing_period: self.resolve_period(requisition).await,
        }
    }

    pub(crate) async fn resolve_facility(
        &self,
        requisition: &Requisition,
        provided: Option<FacilityDto>,
    ) -> Option<FacilityDto> {
        match provided {
            Some(facility) => Some(facility),
            None => found_or_none(
                self.facility_service.find_one(requisition.facility_id).await,
                "Facility",
                requisition.facility_id,
            ),
        }
    }

    pub(crate) async fn resolve_program(
        &self,
        requisition: &Requisition,
        provided: Option<ProgramDto>,
    ) -> Option<ProgramDto> {
        match provided {
            Some(program) => Some(program),
            None => found_or_none(
                self.program_service.find_one(requisition.program_id).await,
                "Program",
                requisition.program_id,
            ),
        }
    }

    pub(crate) async fn resolve_period(
        &self,
        requisition: &Requisition,
    ) -> Option<ProcessingPeriodDto> {
        found_or_none(
            self.period_service
                .get_period(requisition.processing_period_id)
                .await,
            "ProcessingPeriod",
            requisition.processing_period_id,
        )
    }
}
