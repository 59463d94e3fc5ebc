//! Reference Data Projections
//!
//! Read-only views of facility, program, period and user records owned by the
//! reference-data service. They are fetched per request and never persisted here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic level number of a district zone
pub const DISTRICT_LEVEL: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeographicLevelDto {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
    pub level_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeographicZoneDto {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
    pub level: GeographicLevelDto,
    pub parent: Option<Box<GeographicZoneDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub enabled: Option<bool>,
    pub geographic_zone: Option<GeographicZoneDto>,
}

impl FacilityDto {
    /// Walk up the zone hierarchy to the zone at `level_number`
    pub fn zone_by_level_number(&self, level_number: i32) -> Option<&GeographicZoneDto> {
        let mut zone = self.geographic_zone.as_ref();
        while let Some(z) = zone {
            if z.level.level_number == level_number {
                return Some(z);
            }
            zone = z.parent.as_deref();
        }
        None
    }

    /// Zone of the facility that has the district level
    pub fn district(&self) -> Option<&GeographicZoneDto> {
        self.zone_by_level_number(DISTRICT_LEVEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub period_skippable: bool,
    pub show_non_full_supply_tab: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProcessingScheduleDto {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProcessingPeriodDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub processing_schedule: Option<ProcessingScheduleDto>,
    pub duration_in_months: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentDto {
    pub role_id: Uuid,
    pub program_id: Option<Uuid>,
    pub supervisory_node_id: Option<Uuid>,
    pub warehouse_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub home_facility: Option<FacilityDto>,
    #[serde(default)]
    pub role_assignments: Vec<RoleAssignmentDto>,
    pub allow_notify: Option<bool>,
    #[serde(default)]
    pub active: bool,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl UserDto {
    /// "firstName lastName" for display; falls back to the username when both are blank
    pub fn print_name(&self) -> String {
        if is_blank(&self.first_name) && is_blank(&self.last_name) {
            return self.username.clone();
        }
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn allow_notify(&self) -> bool {
        self.allow_notify.unwrap_or(false)
    }

    pub fn active_and_verified(&self) -> bool {
        self.active && self.verified
    }
}
