//! Error payload

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for 4xx/5xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub description: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
        }
    }
}
