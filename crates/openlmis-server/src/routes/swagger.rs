//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use openlmis::{
    BasicRequisitionDto, FacilityDto, GeographicLevelDto, GeographicZoneDto, Money,
    ProcessingPeriodDto, ProcessingScheduleDto, ProgramDto, RequisitionDto,
    RequisitionLineItemDto, RequisitionReportDto, RequisitionStatus, RoleAssignmentDto,
    StatusLogEntry, UserDto,
};
use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, FacilityRequest, FacilityResponse, OrderResponse, ProductCategoryRequest,
    ProductCategoryResponse, RequisitionGroupRequest, RequisitionGroupResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // RequisitionGroup endpoints
        super::requisition_group::list_requisition_groups,
        super::requisition_group::create_requisition_group,
        super::requisition_group::get_requisition_group,
        super::requisition_group::update_requisition_group,
        super::requisition_group::delete_requisition_group,
        // ProductCategory endpoints
        super::product_category::list_product_categories,
        super::product_category::create_product_category,
        super::product_category::search_product_categories,
        super::product_category::get_product_category,
        super::product_category::update_product_category,
        super::product_category::delete_product_category,
        // Facility endpoints
        super::facility::list_facilities,
        super::facility::create_facility,
        super::facility::get_facility,
        super::facility::update_facility,
        super::facility::delete_facility,
        super::facility::get_facility_orders,
        // Requisition endpoints
        super::requisition::initiate_requisition,
        super::requisition::search_requisitions,
        super::requisition::get_requisition,
        super::requisition::submit_requisition,
        super::requisition::authorize_requisition,
        super::requisition::requisition_report,
        super::requisition::delete_requisition,
    ),
    info(
        title = "OpenLMIS Requisition API",
        version = "0.3.0",
        description = "Requisition lifecycle and reference records of the OpenLMIS supply chain.",
        license(name = "AGPL-3.0-or-later"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "RequisitionGroup", description = "Facilities supervised together"),
        (name = "ProductCategory", description = "Groupings of orderable products"),
        (name = "Facility", description = "Facilities and the orders they supply"),
        (name = "Requisition", description = "Requisition lifecycle, views and reports"),
    ),
    components(
        schemas(
            ErrorResponse,
            // RequisitionGroup
            RequisitionGroupRequest,
            RequisitionGroupResponse,
            // ProductCategory
            ProductCategoryRequest,
            ProductCategoryResponse,
            // Facility
            FacilityRequest,
            FacilityResponse,
            OrderResponse,
            // Requisition views
            RequisitionStatus,
            StatusLogEntry,
            Money,
            RequisitionLineItemDto,
            BasicRequisitionDto,
            RequisitionDto,
            RequisitionReportDto,
            // Reference data
            FacilityDto,
            GeographicZoneDto,
            GeographicLevelDto,
            ProgramDto,
            ProcessingPeriodDto,
            ProcessingScheduleDto,
            UserDto,
            RoleAssignmentDto,
        )
    ),
)]
pub struct ApiDoc;
