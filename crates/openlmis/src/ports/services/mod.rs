//! Service Ports
//!
//! Abstract interfaces for external services.

mod message;
mod notification;
mod reference_data;

pub use message::*;
pub use notification::*;
pub use reference_data::*;
