//! In-memory adapters used by route and application tests
//!
//! Tables enforce unique codes (-> Validation) and refuse to delete rows
//! marked as referenced (-> Conflict), mirroring the Postgres error mapping.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use openlmis::{
    DomainError, Facility, FacilityDto, FacilityReferenceDataService, FacilityRepository,
    Notification, NotificationService, Order, OrderRepository, OrderSearchFilter, PeriodService,
    ProcessingPeriodDto, ProductCategory, ProductCategoryRepository, Program, ProgramDto,
    ProgramReferenceDataService, ProgramRepository, Requisition, RequisitionGroup,
    RequisitionGroupRepository, RequisitionRepository, UserDto, UserReferenceDataService,
};

pub trait Keyed {
    fn key(&self) -> Uuid;
    fn code(&self) -> Option<&str> {
        None
    }
}

impl Keyed for RequisitionGroup {
    fn key(&self) -> Uuid {
        self.id
    }
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl Keyed for ProductCategory {
    fn key(&self) -> Uuid {
        self.id
    }
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl Keyed for Facility {
    fn key(&self) -> Uuid {
        self.id
    }
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl Keyed for Requisition {
    fn key(&self) -> Uuid {
        self.id
    }
}

pub struct MemoryTable<T> {
    rows: Mutex<BTreeMap<Uuid, T>>,
    referenced: Mutex<HashSet<Uuid>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            referenced: Mutex::new(HashSet::new()),
        }
    }
}

impl<T: Keyed + Clone> MemoryTable<T> {
    pub fn with(rows: impl IntoIterator<Item = T>) -> Self {
        let table = Self::default();
        table
            .rows
            .lock()
            .unwrap()
            .extend(rows.into_iter().map(|r| (r.key(), r)));
        table
    }

    /// Make deletes of `id` fail as if another table still referenced it
    pub fn mark_referenced(&self, id: Uuid) {
        self.referenced.lock().unwrap().insert(id);
    }

    /// Seed a row, panicking on a unique-code clash
    pub fn insert(&self, row: T) {
        self.upsert(&row).unwrap();
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn upsert(&self, row: &T) -> Result<T, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(code) = row.code() {
            let taken = rows
                .values()
                .any(|other| other.key() != row.key() && other.code() == Some(code));
            if taken {
                return Err(DomainError::Validation(format!(
                    "duplicate key value violates unique constraint: code={code}"
                )));
            }
        }
        rows.insert(row.key(), row.clone());
        Ok(row.clone())
    }

    fn remove(&self, id: Uuid) -> Result<bool, DomainError> {
        if self.referenced.lock().unwrap().contains(&id) {
            return Err(DomainError::Conflict(format!(
                "update or delete violates foreign key constraint: {id}"
            )));
        }
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub type InMemoryRequisitionGroupRepository = MemoryTable<RequisitionGroup>;
pub type InMemoryProductCategoryRepository = MemoryTable<ProductCategory>;
pub type InMemoryFacilityRepository = MemoryTable<Facility>;
pub type InMemoryRequisitionRepository = MemoryTable<Requisition>;

#[async_trait]
impl RequisitionGroupRepository for MemoryTable<RequisitionGroup> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RequisitionGroup>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> Result<Vec<RequisitionGroup>, DomainError> {
        Ok(self.all())
    }

    async fn save(&self, group: &RequisitionGroup) -> Result<RequisitionGroup, DomainError> {
        self.upsert(group)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.remove(id)
    }
}

#[async_trait]
impl ProductCategoryRepository for MemoryTable<ProductCategory> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> Result<Vec<ProductCategory>, DomainError> {
        Ok(self.all())
    }

    async fn search(&self, code: Option<&str>) -> Result<Vec<ProductCategory>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|c| code.map_or(true, |code| c.code == code))
            .collect())
    }

    async fn save(&self, category: &ProductCategory) -> Result<ProductCategory, DomainError> {
        self.upsert(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.remove(id)
    }
}

#[async_trait]
impl FacilityRepository for MemoryTable<Facility> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Facility>, DomainError> {
        Ok(self.all())
    }

    async fn save(&self, facility: &Facility) -> Result<Facility, DomainError> {
        self.upsert(facility)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.remove(id)
    }
}

#[async_trait]
impl RequisitionRepository for MemoryTable<Requisition> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Requisition>, DomainError> {
        Ok(self.get(id))
    }

    async fn search(
        &self,
        facility_id: Option<Uuid>,
        program_id: Option<Uuid>,
    ) -> Result<Vec<Requisition>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|r| facility_id.map_or(true, |id| r.facility_id == id))
            .filter(|r| program_id.map_or(true, |id| r.program_id == id))
            .collect())
    }

    async fn save(&self, requisition: &Requisition) -> Result<Requisition, DomainError> {
        self.upsert(requisition)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.remove(id)
    }
}

#[derive(Default)]
pub struct InMemoryProgramRepository {
    programs: HashMap<Uuid, Program>,
}

impl InMemoryProgramRepository {
    pub fn with(programs: impl IntoIterator<Item = Program>) -> Self {
        Self {
            programs: programs.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Program>, DomainError> {
        Ok(self.programs.get(&id).cloned())
    }
}

/// Order store that records every filter it was searched with
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
    searches: Mutex<Vec<OrderSearchFilter>>,
}

impl InMemoryOrderRepository {
    pub fn with(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
            searches: Mutex::new(Vec::new()),
        }
    }

    pub fn searches(&self) -> Vec<OrderSearchFilter> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn search(&self, filter: &OrderSearchFilter) -> Result<Vec<Order>, DomainError> {
        self.searches.lock().unwrap().push(filter.clone());
        Ok(self
            .orders
            .iter()
            .filter(|o| {
                filter
                    .supplying_facility_id
                    .map_or(true, |id| o.supplying_facility_id == id)
            })
            .filter(|o| {
                filter
                    .requesting_facility_id
                    .map_or(true, |id| o.requesting_facility_id == id)
            })
            .filter(|o| filter.program_id.map_or(true, |id| o.program_id == id))
            .cloned()
            .collect())
    }
}

/// Reference data served from maps; facility and program lookups are recorded
#[derive(Default)]
pub struct StaticReferenceData {
    pub facilities: HashMap<Uuid, FacilityDto>,
    pub programs: HashMap<Uuid, ProgramDto>,
    pub periods: HashMap<Uuid, ProcessingPeriodDto>,
    pub users: HashMap<Uuid, UserDto>,
    facility_lookups: Mutex<Vec<Uuid>>,
    program_lookups: Mutex<Vec<Uuid>>,
}

impl StaticReferenceData {
    pub fn facility_lookups(&self) -> Vec<Uuid> {
        self.facility_lookups.lock().unwrap().clone()
    }

    pub fn program_lookups(&self) -> Vec<Uuid> {
        self.program_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl FacilityReferenceDataService for StaticReferenceData {
    async fn find_one(&self, id: Uuid) -> Result<Option<FacilityDto>, DomainError> {
        self.facility_lookups.lock().unwrap().push(id);
        Ok(self.facilities.get(&id).cloned())
    }
}

#[async_trait]
impl ProgramReferenceDataService for StaticReferenceData {
    async fn find_one(&self, id: Uuid) -> Result<Option<ProgramDto>, DomainError> {
        self.program_lookups.lock().unwrap().push(id);
        Ok(self.programs.get(&id).cloned())
    }
}

#[async_trait]
impl PeriodService for StaticReferenceData {
    async fn get_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>, DomainError> {
        Ok(self.periods.get(&id).cloned())
    }
}

#[async_trait]
impl UserReferenceDataService for StaticReferenceData {
    async fn find_one(&self, id: Uuid) -> Result<Option<UserDto>, DomainError> {
        Ok(self.users.get(&id).cloned())
    }
}

/// Captures notifications instead of sending them; optionally fails every send
#[derive(Default)]
pub struct RecordingNotificationService {
    sent: Mutex<Vec<Notification>>,
    failing: bool,
}

impl RecordingNotificationService {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotificationService {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
        if self.failing {
            return Err(DomainError::ExternalService("notification service down".into()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
