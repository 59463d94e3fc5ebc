//! Message Service Port
//!
//! Resolves message keys to strings in the configured locale.

use crate::domain::{LocalizedMessage, Message};

pub trait MessageService: Send + Sync {
    /// Resolve `message`; unknown keys resolve to the key itself
    fn localize(&self, message: &Message) -> LocalizedMessage;
}
