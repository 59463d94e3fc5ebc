//! Requisition Application Service (Use Case)
//!
//! Initiates requisitions, moves them through submit/authorize, and assembles
//! the composite views returned by the API. Status changes notify the
//! initiator when their user record allows it.

use std::sync::Arc;
use uuid::Uuid;

use openlmis::{
    message_keys, BasicRequisitionDto, BasicRequisitionDtoBuilder, DomainError,
    FacilityReferenceDataService, Message, MessageService, Notification, NotificationService,
    Prefetched, ProgramReferenceDataService, Requisition, RequisitionDto, RequisitionDtoBuilder,
    RequisitionReportDto, RequisitionReportDtoBuilder, RequisitionRepository, RequisitionStatus,
    UserReferenceDataService,
};

/// Collaborators of RequisitionService
pub struct RequisitionServiceDeps {
    pub repo: Arc<dyn RequisitionRepository>,
    pub basic_builder: Arc<BasicRequisitionDtoBuilder>,
    pub dto_builder: Arc<dyn RequisitionDtoBuilder>,
    pub report_builder: Arc<RequisitionReportDtoBuilder>,
    pub facilities: Arc<dyn FacilityReferenceDataService>,
    pub programs: Arc<dyn ProgramReferenceDataService>,
    pub users: Arc<dyn UserReferenceDataService>,
    pub messages: Arc<dyn MessageService>,
    pub notifications: Arc<dyn NotificationService>,
}

pub struct RequisitionService {
    deps: RequisitionServiceDeps,
    currency_code: String,
    notification_from: String,
}

impl RequisitionService {
    pub fn new(
        deps: RequisitionServiceDeps,
        currency_code: impl Into<String>,
        notification_from: impl Into<String>,
    ) -> Self {
        Self {
            deps,
            currency_code: currency_code.into(),
            notification_from: notification_from.into(),
        }
    }

    /// Create an INITIATED requisition and return its full view
    pub async fn initiate(
        &self,
        facility_id: Uuid,
        program_id: Uuid,
        processing_period_id: Uuid,
        emergency: bool,
        initiator: Option<Uuid>,
    ) -> Result<RequisitionDto, DomainError> {
        let requisition = Requisition::initiate(
            facility_id,
            program_id,
            processing_period_id,
            emergency,
            self.currency_code.as_str(),
            initiator,
        );
        let saved = self.deps.repo.save(&requisition).await?;

        tracing::info!(
            "Initiated Requisition: {} (facility {}, program {}, period {})",
            saved.id,
            facility_id,
            program_id,
            processing_period_id
        );
        Ok(self.deps.dto_builder.build(&saved).await)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<RequisitionDto>, DomainError> {
        match self.deps.repo.find_by_id(id).await? {
            Some(requisition) => Ok(Some(self.deps.dto_builder.build(&requisition).await)),
            None => Ok(None),
        }
    }

    /// Summaries of matching requisitions. Facility and program are looked up
    /// once and shared by every row.
    pub async fn search(
        &self,
        facility_id: Option<Uuid>,
        program_id: Option<Uuid>,
    ) -> Result<Vec<BasicRequisitionDto>, DomainError> {
        let requisitions = self.deps.repo.search(facility_id, program_id).await?;
        if requisitions.is_empty() {
            return Ok(Vec::new());
        }

        let facility = match facility_id {
            Some(id) => Prefetched::Fetched(
                self.deps.facilities.find_one(id).await.unwrap_or_else(|e| {
                    tracing::warn!("Facility {} lookup failed: {}", id, e);
                    None
                }),
            ),
            None => Prefetched::NotFetched,
        };
        let program = match program_id {
            Some(id) => Prefetched::Fetched(
                self.deps.programs.find_one(id).await.unwrap_or_else(|e| {
                    tracing::warn!("Program {} lookup failed: {}", id, e);
                    None
                }),
            ),
            None => Prefetched::NotFetched,
        };

        Ok(self
            .deps
            .basic_builder
            .build_all(&requisitions, &facility, &program)
            .await)
    }

    pub async fn submit(&self, id: Uuid, actor: Option<Uuid>) -> Result<RequisitionDto, DomainError> {
        self.change_status(id, actor, RequisitionStatus::Submitted, Requisition::submit)
            .await
    }

    pub async fn authorize(
        &self,
        id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<RequisitionDto, DomainError> {
        self.change_status(id, actor, RequisitionStatus::Authorized, Requisition::authorize)
            .await
    }

    async fn change_status(
        &self,
        id: Uuid,
        actor: Option<Uuid>,
        target: RequisitionStatus,
        transition: fn(&mut Requisition, Uuid) -> Result<(), DomainError>,
    ) -> Result<RequisitionDto, DomainError> {
        let actor = actor.ok_or_else(|| {
            DomainError::Validation("Status changes require an authenticated user".to_string())
        })?;
        let mut requisition = self
            .deps
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Requisition", id))?;

        let from = requisition.status;
        if let Err(e) = transition(&mut requisition, actor) {
            tracing::debug!("Rejected transition of requisition {}: {}", id, e);
            return Err(DomainError::Validation(self.localize(Message::with_params(
                message_keys::ERROR_INVALID_STATUS_TRANSITION,
                [id.to_string(), from.to_string(), target.to_string()],
            ))));
        }

        let saved = self.deps.repo.save(&requisition).await?;
        tracing::info!("Requisition {} moved from {} to {}", saved.id, from, saved.status);

        self.notify_initiator(&saved).await;
        Ok(self.deps.dto_builder.build(&saved).await)
    }

    async fn notify_initiator(&self, requisition: &Requisition) {
        let Some(initiator_id) = requisition
            .status_change(RequisitionStatus::Initiated)
            .and_then(|entry| entry.author_id)
        else {
            return;
        };

        let initiator = match self.deps.users.find_one(initiator_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!("Initiator {} of requisition {} not found", initiator_id, requisition.id);
                return;
            }
            Err(e) => {
                tracing::warn!("Initiator {} lookup failed: {}", initiator_id, e);
                return;
            }
        };

        if !initiator.allow_notify() || !initiator.active_and_verified() {
            return;
        }
        let Some(email) = initiator.email.clone() else {
            return;
        };

        let status = requisition.status.to_string();
        let notification = Notification {
            from: self.notification_from.clone(),
            to: email,
            subject: self.localize(Message::with_params(
                message_keys::NOTIFICATION_STATUS_CHANGED_SUBJECT,
                [status.clone()],
            )),
            content: self.localize(Message::with_params(
                message_keys::NOTIFICATION_STATUS_CHANGED_CONTENT,
                [
                    initiator.print_name(),
                    requisition.id.to_string(),
                    status.to_lowercase(),
                ],
            )),
        };

        if let Err(e) = self.deps.notifications.notify(&notification).await {
            tracing::warn!(
                "Could not notify {} about requisition {}: {}",
                notification.to,
                requisition.id,
                e
            );
        }
    }

    pub async fn report(&self, id: Uuid) -> Result<Option<RequisitionReportDto>, DomainError> {
        match self.deps.repo.find_by_id(id).await? {
            Some(requisition) => Ok(Some(self.deps.report_builder.build(&requisition).await)),
            None => Ok(None),
        }
    }

    /// Delete an INITIATED or SKIPPED requisition
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let requisition = self
            .deps
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Requisition", id))?;

        if !requisition.is_deletable() {
            return Err(DomainError::Validation(self.localize(Message::with_params(
                message_keys::ERROR_REQUISITION_NOT_DELETABLE,
                [id.to_string(), requisition.status.to_string()],
            ))));
        }

        self.deps.repo.delete(id).await?;
        tracing::info!("Deleted Requisition: {}", id);
        Ok(())
    }

    fn localize(&self, message: Message) -> String {
        self.deps.messages.localize(&message).message
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryRequisitionRepository, RecordingNotificationService, StaticReferenceData,
    };
    use crate::adapters::PropertiesMessageService;
    use chrono::NaiveDate;
    use openlmis::{
        DefaultRequisitionDtoBuilder, FacilityDto, ProcessingPeriodDto, ProgramDto,
        RequisitionExportHelper, UserDto,
    };

    pub(crate) struct Fixture {
        pub repo: Arc<InMemoryRequisitionRepository>,
        pub notifications: Arc<RecordingNotificationService>,
        pub reference: Arc<StaticReferenceData>,
        pub facility_id: Uuid,
        pub program_id: Uuid,
        pub period_id: Uuid,
        pub initiator: UserDto,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self::with_notifications(RecordingNotificationService::default())
        }

        pub fn with_notifications(notifications: RecordingNotificationService) -> Self {
            let facility_id = Uuid::new_v4();
            let program_id = Uuid::new_v4();
            let period_id = Uuid::new_v4();
            let initiator = UserDto {
                id: Some(Uuid::new_v4()),
                username: "nurse".to_string(),
                first_name: Some("Ana".to_string()),
                last_name: Some("Silva".to_string()),
                email: Some("ana@clinic.org".to_string()),
                verified: true,
                active: true,
                allow_notify: Some(true),
                ..Default::default()
            };

            let mut reference = StaticReferenceData::default();
            reference.facilities.insert(
                facility_id,
                FacilityDto {
                    id: facility_id,
                    code: Some("HC01".into()),
                    name: Some("Comfort Health Clinic".into()),
                    description: None,
                    active: Some(true),
                    enabled: Some(true),
                    geographic_zone: None,
                },
            );
            reference.programs.insert(
                program_id,
                ProgramDto {
                    id: program_id,
                    code: Some("PRG001".into()),
                    name: Some("Family Planning".into()),
                    description: None,
                    active: Some(true),
                    period_skippable: false,
                    show_non_full_supply_tab: None,
                },
            );
            reference.periods.insert(
                period_id,
                ProcessingPeriodDto {
                    id: period_id,
                    name: Some("Jan2017".into()),
                    description: None,
                    start_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2017, 1, 31).unwrap(),
                    processing_schedule: None,
                    duration_in_months: Some(1),
                },
            );
            reference
                .users
                .insert(initiator.id.unwrap(), initiator.clone());

            Self {
                repo: Arc::new(InMemoryRequisitionRepository::default()),
                notifications: Arc::new(notifications),
                reference: Arc::new(reference),
                facility_id,
                program_id,
                period_id,
                initiator,
            }
        }

        pub fn service(&self) -> RequisitionService {
            let messages: Arc<dyn MessageService> = Arc::new(PropertiesMessageService::new("en"));
            let export_helper = Arc::new(RequisitionExportHelper::new());
            let basic_builder = Arc::new(BasicRequisitionDtoBuilder::new(
                self.reference.clone(),
                self.reference.clone(),
                self.reference.clone(),
            ));
            let dto_builder: Arc<dyn RequisitionDtoBuilder> = Arc::new(
                DefaultRequisitionDtoBuilder::new(basic_builder.clone(), export_helper.clone()),
            );
            let report_builder = Arc::new(RequisitionReportDtoBuilder::new(
                dto_builder.clone(),
                export_helper,
                self.reference.clone(),
                messages.clone(),
            ));

            RequisitionService::new(
                RequisitionServiceDeps {
                    repo: self.repo.clone(),
                    basic_builder,
                    dto_builder,
                    report_builder,
                    facilities: self.reference.clone(),
                    programs: self.reference.clone(),
                    users: self.reference.clone(),
                    messages,
                    notifications: self.notifications.clone(),
                },
                "USD",
                "noreply@openlmis.org",
            )
        }

        pub fn initiator_id(&self) -> Uuid {
            self.initiator.id.unwrap()
        }

        pub async fn initiate(&self, service: &RequisitionService) -> RequisitionDto {
            service
                .initiate(
                    self.facility_id,
                    self.program_id,
                    self.period_id,
                    false,
                    Some(self.initiator_id()),
                )
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_initiate_records_initiator() {
        let fx = Fixture::new();
        let service = fx.service();

        let dto = fx.initiate(&service).await;

        assert_eq!(dto.status, RequisitionStatus::Initiated);
        assert_eq!(
            dto.status_changes[&RequisitionStatus::Initiated].author_id,
            Some(fx.initiator_id())
        );
        assert_eq!(dto.facility.map(|f| f.id), Some(fx.facility_id));
        assert!(dto.processing_period.is_some());
        assert_eq!(fx.repo.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_and_authorize_notify_initiator() {
        let fx = Fixture::new();
        let service = fx.service();
        let id = fx.initiate(&service).await.id;
        let approver = Uuid::new_v4();

        let submitted = service.submit(id, Some(approver)).await.unwrap();
        let authorized = service.authorize(id, Some(approver)).await.unwrap();

        assert_eq!(submitted.status, RequisitionStatus::Submitted);
        assert_eq!(authorized.status, RequisitionStatus::Authorized);
        assert_eq!(
            authorized.status_changes[&RequisitionStatus::Authorized].author_id,
            Some(approver)
        );

        let sent = fx.notifications.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "ana@clinic.org");
        assert_eq!(sent[0].from, "noreply@openlmis.org");
        assert_eq!(sent[0].subject, "Requisition SUBMITTED");
        assert!(sent[1].content.starts_with("Dear Ana Silva,"));
        assert!(sent[1].content.contains("has been authorized"));
    }

    #[tokio::test]
    async fn test_invalid_transition_is_validation_error() {
        let fx = Fixture::new();
        let service = fx.service();
        let id = fx.initiate(&service).await.id;

        let result = service.authorize(id, Some(Uuid::new_v4())).await;

        match result {
            Err(DomainError::Validation(msg)) => {
                assert!(msg.contains("from INITIATED to AUTHORIZED"), "{msg}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(fx.notifications.sent().is_empty());
    }

    #[tokio::test]
    async fn test_status_change_requires_actor() {
        let fx = Fixture::new();
        let service = fx.service();
        let id = fx.initiate(&service).await.id;

        let result = service.submit(id, None).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_notification_failure_is_not_fatal() {
        let fx = Fixture::with_notifications(RecordingNotificationService::failing());
        let service = fx.service();
        let id = fx.initiate(&service).await.id;

        let submitted = service.submit(id, Some(Uuid::new_v4())).await.unwrap();
        assert_eq!(submitted.status, RequisitionStatus::Submitted);
    }

    #[tokio::test]
    async fn test_search_uses_shared_reference_data() {
        let fx = Fixture::new();
        let service = fx.service();
        fx.initiate(&service).await;
        fx.initiate(&service).await;

        let results = service
            .search(Some(fx.facility_id), Some(fx.program_id))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| r.facility.as_ref().map(|f| f.id) == Some(fx.facility_id)));
        assert!(service.search(Some(Uuid::new_v4()), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_with_unknown_facility_looks_it_up_once() {
        let fx = Fixture::new();
        let service = fx.service();
        let unknown_facility = Uuid::new_v4();
        for _ in 0..2 {
            service
                .initiate(unknown_facility, fx.program_id, fx.period_id, false, None)
                .await
                .unwrap();
        }
        let lookups_before = fx.reference.facility_lookups().len();

        let results = service.search(Some(unknown_facility), None).await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.facility.is_none()));
        assert!(results.iter().all(|r| r.program.is_some()));
        assert_eq!(
            &fx.reference.facility_lookups()[lookups_before..],
            &[unknown_facility]
        );
    }

    #[tokio::test]
    async fn test_report_names_initiator() {
        let fx = Fixture::new();
        let service = fx.service();
        let id = fx.initiate(&service).await.id;

        let report = service.report(id).await.unwrap().expect("report");

        assert_eq!(report.initiated_by, Some(fx.initiator.clone()));
        assert!(report.submitted_by.is_none());
        assert!(service.report(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_only_initiated_or_skipped() {
        let fx = Fixture::new();
        let service = fx.service();
        let deletable = fx.initiate(&service).await.id;
        let submitted = fx.initiate(&service).await.id;
        service.submit(submitted, Some(Uuid::new_v4())).await.unwrap();

        service.delete(deletable).await.unwrap();
        let result = service.delete(submitted).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(fx.repo.get(deletable).is_none());
        assert!(fx.repo.get(submitted).is_some());
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
