//! Property-file backed MessageService
//!
//! The catalog is embedded at compile time. Unsupported locales fall back to
//! English; unknown keys resolve to the key itself.

use std::collections::HashMap;

use openlmis::{LocalizedMessage, Message, MessageService};

const DEFAULT_LOCALE: &str = "en";
const MESSAGES_EN: &str = include_str!("../../resources/messages_en.properties");

pub struct PropertiesMessageService {
    messages: HashMap<String, String>,
}

impl PropertiesMessageService {
    pub fn new(locale: &str) -> Self {
        let source = match locale {
            "en" => MESSAGES_EN,
            other => {
                tracing::warn!(
                    "No message catalog for locale '{}', using '{}'",
                    other,
                    DEFAULT_LOCALE
                );
                MESSAGES_EN
            }
        };
        Self::from_properties(source)
    }

    pub fn from_properties(source: &str) -> Self {
        Self {
            messages: parse_properties(source),
        }
    }
}

impl MessageService for PropertiesMessageService {
    fn localize(&self, message: &Message) -> LocalizedMessage {
        let text = match self.messages.get(&message.key) {
            Some(pattern) => message.format(pattern),
            None => {
                tracing::debug!("Message key not in catalog: {}", message.key);
                message.key.clone()
            }
        };
        LocalizedMessage {
            message_key: message.key.clone(),
            message: text,
        }
    }
}

fn parse_properties(source: &str) -> HashMap<String, String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unescape(value.trim())))
        })
        .collect()
}

fn unescape(value: &str) -> String {
    value
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\\", "\\")
}
