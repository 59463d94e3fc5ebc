//! RequisitionStatus - Lifecycle states of a requisition

use serde::{Deserialize, Serialize};

/// Requisition lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequisitionStatus {
    Initiated,
    Submitted,
    Authorized,
    Approved,
    Released,
    Skipped,
}

impl RequisitionStatus {
    /// Statuses in which the requisition can still be edited or removed
    pub fn is_pre_authorize(&self) -> bool {
        matches!(self, Self::Initiated | Self::Submitted)
    }

    /// Only requisitions that never left the facility can be deleted
    pub fn is_deletable(&self) -> bool {
        matches!(self, Self::Initiated | Self::Skipped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => "INITIATED",
            Self::Submitted => "SUBMITTED",
            Self::Authorized => "AUTHORIZED",
            Self::Approved => "APPROVED",
            Self::Released => "RELEASED",
            Self::Skipped => "SKIPPED",
        }
    }
}

impl std::fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequisitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INITIATED" => Ok(Self::Initiated),
            "SUBMITTED" => Ok(Self::Submitted),
            "AUTHORIZED" => Ok(Self::Authorized),
            "APPROVED" => Ok(Self::Approved),
            "RELEASED" => Ok(Self::Released),
            "SKIPPED" => Ok(Self::Skipped),
            _ => Err(format!("Unknown requisition status: {}", s)),
        }
    }
}
