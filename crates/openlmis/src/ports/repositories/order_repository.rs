//! Order Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Order};

/// Filter for order searches. `None` fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSearchFilter {
    pub supplying_facility_id: Option<Uuid>,
    pub requesting_facility_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
}

/// Repository interface for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn search(&self, filter: &OrderSearchFilter) -> Result<Vec<Order>, DomainError>;
}
