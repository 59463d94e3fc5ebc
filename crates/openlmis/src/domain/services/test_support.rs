//! In-memory port fakes for builder tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::{
    FacilityDto, LocalizedMessage, Message, ProcessingPeriodDto, ProgramDto, UserDto,
};
use crate::ports::{
    FacilityReferenceDataService, MessageService, PeriodService, ProgramReferenceDataService,
    UserReferenceDataService,
};

/// Lookup fake that records every requested ID
pub struct FakeLookup<T> {
    records: HashMap<Uuid, T>,
    calls: Mutex<Vec<Uuid>>,
    failing: bool,
}

impl<T: Clone> FakeLookup<T> {
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    pub fn with(records: impl IntoIterator<Item = (Uuid, T)>) -> Self {
        Self {
            records: records.into_iter().collect(),
            ..Self::empty()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::empty()
        }
    }

    pub fn calls(&self) -> Vec<Uuid> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, id: Uuid) -> Result<Option<T>, DomainError> {
        self.calls.lock().unwrap().push(id);
        if self.failing {
            return Err(DomainError::ExternalService("connection refused".into()));
        }
        Ok(self.records.get(&id).cloned())
    }
}

#[async_trait]
impl FacilityReferenceDataService for FakeLookup<FacilityDto> {
    async fn find_one(&self, id: Uuid) -> Result<Option<FacilityDto>, DomainError> {
        self.lookup(id)
    }
}

#[async_trait]
impl ProgramReferenceDataService for FakeLookup<ProgramDto> {
    async fn find_one(&self, id: Uuid) -> Result<Option<ProgramDto>, DomainError> {
        self.lookup(id)
    }
}

#[async_trait]
impl PeriodService for FakeLookup<ProcessingPeriodDto> {
    async fn get_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>, DomainError> {
        self.lookup(id)
    }
}

#[async_trait]
impl UserReferenceDataService for FakeLookup<UserDto> {
    async fn find_one(&self, id: Uuid) -> Result<Option<UserDto>, DomainError> {
        self.lookup(id)
    }
}

/// Message catalog with fixed entries
pub struct FixedMessages(pub HashMap<String, String>);

impl FixedMessages {
    pub fn system(value: &str) -> Self {
        Self(HashMap::from([(
            crate::domain::message_keys::SYSTEM.to_string(),
            value.to_string(),
        )]))
    }
}

impl MessageService for FixedMessages {
    fn localize(&self, message: &Message) -> LocalizedMessage {
        let pattern = self
            .0
            .get(&message.key)
            .cloned()
            .unwrap_or_else(|| message.key.clone());
        LocalizedMessage {
            message_key: message.key.clone(),
            message: message.format(&pattern),
        }
    }
}

pub fn facility_dto(id: Uuid) -> FacilityDto {
    FacilityDto {
        id,
        code: Some("HC01".into()),
        name: Some("Comfort Health Clinic".into()),
        description: None,
        active: Some(true),
        enabled: Some(true),
        geographic_zone: None,
    }
}

pub fn program_dto(id: Uuid) -> ProgramDto {
    ProgramDto {
        id,
        code: Some("PRG001".into()),
        name: Some("Family Planning".into()),
        description: None,
        active: Some(true),
        period_skippable: false,
        show_non_full_supply_tab: Some(true),
    }
}

pub fn period_dto(id: Uuid) -> ProcessingPeriodDto {
    ProcessingPeriodDto {
        id,
        name: Some("Jan2017".into()),
        description: None,
        start_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2017, 1, 31).unwrap(),
        processing_schedule: None,
        duration_in_months: Some(1),
    }
}

pub fn user_dto(id: Uuid, username: &str) -> UserDto {
    UserDto {
        id: Some(id),
        username: username.to_string(),
        first_name: Some(username.to_uppercase()),
        last_name: Some("Tester".into()),
        active: true,
        verified: true,
        ..Default::default()
    }
}
