//! Message - Localizable message key with positional parameters

use serde::{Deserialize, Serialize};

/// Well-known message keys
pub mod message_keys {
    /// Display name of the synthetic actor for system-initiated transitions
    pub const SYSTEM: &str = "requisition.message.system";
    pub const ERROR_FACILITY_NOT_FOUND: &str = "requisition.error.facility.notFound";
    pub const ERROR_INVALID_STATUS_TRANSITION: &str = "requisition.error.status.invalidTransition";
    pub const ERROR_REQUISITION_NOT_DELETABLE: &str = "requisition.error.delete.notDeletable";
    pub const NOTIFICATION_STATUS_CHANGED_SUBJECT: &str =
        "requisition.notification.statusChanged.subject";
    pub const NOTIFICATION_STATUS_CHANGED_CONTENT: &str =
        "requisition.notification.statusChanged.content";
}

/// A message key plus the values substituted into `{0}`, `{1}`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params<I, S>(key: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Substitute positional parameters into a resolved pattern.
    ///
    /// The pattern is scanned once, so placeholders appearing inside a
    /// substituted value are left as they are. Unknown indexes stay literal.
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let param = after.find('}').and_then(|close| {
                after[..close]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.params.get(i))
                    .map(|value| (value, close))
            });

            match param {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Result of resolving a Message in a locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedMessage {
    pub message_key: String,
    pub message: String,
}

impl std::fmt::Display for LocalizedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
