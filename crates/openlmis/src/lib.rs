//! OpenLMIS Requisition Domain Library
//!
//! Core domain types and interfaces for the OpenLMIS requisition service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Requisition, reference-data projections, composite DTOs,
//!     managed records (RequisitionGroup, ProductCategory, Facility, ...)
//!   - `value_objects/`: Immutable value types (RequisitionStatus, Money, Message)
//!   - `services/`: DTO builders composing requisition views
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Reference-data, message and notification interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use openlmis::domain::{Requisition, BasicRequisitionDtoBuilder};
//! use openlmis::ports::{FacilityReferenceDataService, RequisitionRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    message_keys, BasicRequisitionDto, BasicRequisitionDtoBuilder, DefaultRequisitionDtoBuilder,
    DomainError, ExportHelper, Facility, FacilityDto, GeographicLevelDto, GeographicZoneDto,
    LocalizedMessage, Message, Money, Order, OrderStatus, Prefetched, ProcessingPeriodDto,
    ProcessingScheduleDto, ProductCategory, Program, ProgramDto, Requisition, RequisitionDto,
    RequisitionDtoBuilder, RequisitionExportHelper, RequisitionGroup, RequisitionLineItem,
    RequisitionLineItemDto, RequisitionReportDto, RequisitionReportDtoBuilder, RequisitionStatus,
    RoleAssignmentDto, StatusLogEntry, UserDto,
};
pub use ports::{
    // Repositories
    FacilityRepository,
    // Services
    FacilityReferenceDataService,
    MessageService,
    Notification,
    NotificationService,
    OrderRepository,
    OrderSearchFilter,
    PeriodService,
    ProductCategoryRepository,
    ProgramReferenceDataService,
    ProgramRepository,
    RequisitionGroupRepository,
    RequisitionRepository,
    UserReferenceDataService,
};
