//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod message;
mod money;
mod order_status;
mod requisition_status;

pub use message::*;
pub use money::*;
pub use order_status::*;
pub use requisition_status::*;
