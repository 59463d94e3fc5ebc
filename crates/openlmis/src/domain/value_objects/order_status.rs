//! OrderStatus - Fulfillment states of an order

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Ordered,
    Fulfilling,
    Shipped,
    Received,
    TransferFailed,
    InRoute,
    ReadyToPack,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Ordered => "ORDERED",
            OrderStatus::Fulfilling => "FULFILLING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::TransferFailed => "TRANSFER_FAILED",
            OrderStatus::InRoute => "IN_ROUTE",
            OrderStatus::ReadyToPack => "READY_TO_PACK",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ORDERED" => Ok(OrderStatus::Ordered),
            "FULFILLING" => Ok(OrderStatus::Fulfilling),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "RECEIVED" => Ok(OrderStatus::Received),
            "TRANSFER_FAILED" => Ok(OrderStatus::TransferFailed),
            "IN_ROUTE" => Ok(OrderStatus::InRoute),
            "READY_TO_PACK" => Ok(OrderStatus::ReadyToPack),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}
